use crate::args::OutputFormat;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, View};
use anyhow::Result;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a view model using the configured format
    pub fn render<T: View>(&self, view_model: CommandResultViewModel<T>) -> Result<()> {
        ConsoleRenderer::new(self.format).render(view_model)
    }
}
