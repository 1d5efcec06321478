use quotedesk_core::{EmailFeedback, FeedbackTone, Registration, escape_html, render_html};
use quotedesk_runtime::Dashboard;
use quotedesk_types::{Post, QuoteRequest, Role, SupportRequest};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::style;

/// Command output: serializable for `--format json`, displayable for plain
/// text. HTML defaults to the plain text in a `<pre>` block.
pub trait View: Serialize + fmt::Display {
    fn to_html(&self) -> String {
        format!("<pre>{}</pre>", escape_html(&self.to_string()))
    }
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteSubmittedView {
    pub request: QuoteRequest,
}

impl fmt::Display for QuoteSubmittedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.request;
        writeln!(f, "{} {}", style::dim("id:"), r.id)?;
        writeln!(f, "{} {}", style::dim("owner:"), or_dash(Some(r.client_user.as_str())))?;
        writeln!(f, "{} {}", style::dim("name:"), or_dash(r.name.as_deref()))?;
        writeln!(f, "{} {}", style::dim("email:"), or_dash(r.email.as_deref()))?;
        writeln!(f, "{} {}", style::dim("phone:"), or_dash(r.phone.as_deref()))?;
        writeln!(f, "{} {}", style::dim("status:"), style::status(r.status.as_str()))
    }
}

impl View for QuoteSubmittedView {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DashboardView(pub Dashboard);

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = &self.0;
        writeln!(f, "Welcome, {}", style::bold(&dashboard.viewer))?;

        if dashboard.cards.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No requests found. Submit one from the homepage contact form.");
        }

        for card in &dashboard.cards {
            writeln!(f)?;
            writeln!(f, "{}  {}", style::bold(&card.title), style::dim(&format!("#{}", card.id)))?;
            writeln!(f, "  Name:      {}", card.name)?;
            writeln!(f, "  Email:     {}", card.email)?;
            writeln!(f, "  Phone:     {}", card.phone)?;
            writeln!(f, "  Submitted: {}", card.submitted)?;
            writeln!(f, "  Status:    {}", style::status(&card.status))?;
        }
        Ok(())
    }
}

impl View for DashboardView {
    fn to_html(&self) -> String {
        render_html(&self.0.cards)
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteView {
    pub request: QuoteRequest,
}

impl fmt::Display for QuoteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Request {} is {}",
            self.request.id,
            style::status(self.request.status.as_str())
        )
    }
}

impl View for QuoteView {}

#[derive(Debug, Serialize)]
pub struct ExportView {
    pub rows: usize,
    pub output: PathBuf,
}

impl fmt::Display for ExportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {} rows to {}", self.rows, self.output.display())
    }
}

impl View for ExportView {}

#[derive(Debug, Serialize)]
pub struct SupportSubmittedView {
    pub request: SupportRequest,
}

impl fmt::Display for SupportSubmittedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", style::dim("id:"), self.request.id)?;
        for (key, value) in &self.request.fields {
            let text = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            writeln!(f, "{} {}", style::dim(&format!("{}:", key)), text)?;
        }
        Ok(())
    }
}

impl View for SupportSubmittedView {}

#[derive(Debug, Serialize)]
pub struct SupportListView {
    pub requests: Vec<SupportRequest>,
}

impl fmt::Display for SupportListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requests.is_empty() {
            return writeln!(f, "No support messages.");
        }
        for request in &self.requests {
            let summary = ["subject", "message", "email", "name"]
                .iter()
                .find_map(|k| request.field(k).filter(|v| !v.trim().is_empty()))
                .unwrap_or("-");
            writeln!(
                f,
                "{}  {}  {}",
                style::dim(&request.id.to_string()),
                request.submitted_at.format("%Y-%m-%d %H:%M"),
                summary
            )?;
        }
        Ok(())
    }
}

impl View for SupportListView {}

#[derive(Debug, Serialize)]
pub struct SavedToggleView {
    pub id: u64,
    pub saved: bool,
    pub total: usize,
}

impl fmt::Display for SavedToggleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.saved { "Saved" } else { "Removed" };
        writeln!(f, "{} post {} ({} saved)", verb, self.id, self.total)
    }
}

impl View for SavedToggleView {}

fn write_post(f: &mut fmt::Formatter<'_>, post: &Post) -> fmt::Result {
    writeln!(
        f,
        "{} {} ({})  {}",
        style::dim(&format!("#{}", post.id)),
        style::bold(&post.author),
        post.user_type,
        style::dim(&format!("{} · {}", post.timestamp, post.category_label()))
    )?;
    writeln!(f, "  {}", post.content)?;
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        writeln!(f, "  {}", style::dim(&tags.join(" ")))?;
    }
    let mark = if post.liked { " (liked)" } else { "" };
    writeln!(
        f,
        "  {} likes{}, {} comments",
        post.likes,
        mark,
        post.comments.len()
    )?;
    for comment in &post.comments {
        writeln!(
            f,
            "    {} ({}): {}",
            comment.author,
            comment.user_type.as_deref().unwrap_or("user"),
            comment.text
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub post: Post,
}

impl fmt::Display for PostView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_post(f, &self.post)
    }
}

impl View for PostView {}

#[derive(Debug, Serialize)]
pub struct PostListView {
    pub posts: Vec<Post>,
}

impl fmt::Display for PostListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.posts.is_empty() {
            return writeln!(f, "No posts found");
        }
        for (i, post) in self.posts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_post(f, post)?;
        }
        Ok(())
    }
}

impl View for PostListView {}

#[derive(Debug, Serialize)]
pub struct SavedListView {
    pub ids: Vec<u64>,
    /// Feed posts behind `ids`; ids whose post is gone have no entry.
    pub posts: Vec<Post>,
}

impl fmt::Display for SavedListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ids.is_empty() {
            return writeln!(f, "No saved posts.");
        }
        for id in &self.ids {
            match self.posts.iter().find(|p| p.id.as_u64() == *id) {
                Some(post) => writeln!(f, "{}  {}  {}", id, post.author, post.content)?,
                None => writeln!(f, "{}  {}", id, style::dim("(post not found)"))?,
            }
        }
        Ok(())
    }
}

impl View for SavedListView {}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub role: Role,
    /// Stored session name; `None` when logged out.
    pub name: Option<String>,
    pub display_name: String,
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "{} ({})", style::bold(name), self.role),
            None => writeln!(
                f,
                "Not logged in as {} (shown as {})",
                self.role, self.display_name
            ),
        }
    }
}

impl View for SessionView {}

#[derive(Debug, Serialize)]
pub struct RegistrationView {
    pub registration: Registration,
}

impl fmt::Display for RegistrationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.registration;
        writeln!(f, "{} <{}>, {} ({})", r.name, r.email, r.phone, r.role)
    }
}

impl View for RegistrationView {}

#[derive(Debug, Serialize)]
pub struct EmailCheckView {
    pub email: String,
    pub feedback: EmailFeedback,
    pub message: String,
    pub tone: FeedbackTone,
    pub valid: bool,
}

impl EmailCheckView {
    pub fn new(email: &str, feedback: EmailFeedback) -> Self {
        Self {
            email: email.to_string(),
            feedback,
            message: feedback.message().to_string(),
            tone: feedback.tone(),
            valid: feedback.is_valid(),
        }
    }
}

impl fmt::Display for EmailCheckView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            return writeln!(f, "(empty)");
        }
        writeln!(f, "{}", style::tone(&self.message, self.tone))
    }
}

impl View for EmailCheckView {}

#[derive(Debug, Serialize)]
pub struct ChatView {
    pub reply: String,
    pub fallback: bool,
}

impl fmt::Display for ChatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.reply)
    }
}

impl View for ChatView {}

#[derive(Debug, Serialize)]
pub struct ChatWelcomeView {
    pub greeting: String,
    pub questions: Vec<String>,
}

impl fmt::Display for ChatWelcomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.greeting)?;
        writeln!(f)?;
        for (i, question) in self.questions.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, question)?;
        }
        Ok(())
    }
}

impl View for ChatWelcomeView {}

#[derive(Debug, Serialize)]
pub struct InitView {
    pub config_path: PathBuf,
    pub written: bool,
}

impl fmt::Display for InitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.written {
            writeln!(f, "Wrote {}", self.config_path.display())
        } else {
            writeln!(
                f,
                "{} already exists (use --force to overwrite)",
                self.config_path.display()
            )
        }
    }
}

impl View for InitView {}

#[derive(Debug, Serialize)]
pub struct OverviewView {
    pub data_dir: PathBuf,
    pub quote_requests: usize,
    pub pending: usize,
    pub support_requests: usize,
}

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", style::dim("data dir:"), self.data_dir.display())?;
        writeln!(
            f,
            "{} {} ({} pending)",
            style::dim("quote requests:"),
            self.quote_requests,
            self.pending
        )?;
        writeln!(f, "{} {}", style::dim("support messages:"), self.support_requests)
    }
}

impl View for OverviewView {}
