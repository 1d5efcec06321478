use anyhow::Result;
use std::fmt::Write as _;
use std::io::Write as _;

use super::result::CommandResultViewModel;
use super::style;
use super::views::View;
use crate::args::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T: View>(&self, result: CommandResultViewModel<T>) -> Result<()> {
        let text = self.render_to_string(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    pub fn render_to_string<T: View>(&self, result: &CommandResultViewModel<T>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(result)?)),
            OutputFormat::Html => Ok(format!("{}\n", result.content.to_html())),
            OutputFormat::Plain => Ok(render_plain(result)),
        }
    }
}

fn render_plain<T: View>(result: &CommandResultViewModel<T>) -> String {
    let mut out = String::new();

    if let Some(badge) = &result.badge {
        let _ = writeln!(out, "{} {}", badge.icon(), style::bold(&badge.label));
        out.push('\n');
    }

    let _ = write!(out, "{}", result.content);

    if !result.suggestions.is_empty() {
        let _ = writeln!(out, "\n{}", style::bold("Next:"));
        for tip in &result.suggestions {
            let _ = write!(out, "  • {}", tip.description);
            if let Some(cmd) = &tip.command {
                let _ = write!(out, ": {}", style::cyan(cmd));
            }
            out.push('\n');
        }
    }

    out
}
