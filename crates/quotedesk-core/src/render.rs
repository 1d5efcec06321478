use chrono::{DateTime, FixedOffset, Local, Utc};
use quotedesk_types::{QuoteRequest, RequestId};
use serde::Serialize;

/// Characters of `project_details` shown on a card.
pub const DETAIL_PREVIEW_CHARS: usize = 140;

const DEFAULT_TITLE: &str = "Quote Request";
const EMPTY_STATE: &str = "No requests found. Submit one from the homepage contact form.";

// en-US `toLocaleString()` layout, e.g. "12/10/2024, 3:05:09 PM"
const LOCALE_TIMESTAMP: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Zone used for `submitted`. `None` means the machine's local zone.
    pub utc_offset: Option<FixedOffset>,
}

impl RenderOptions {
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            utc_offset: Some(offset),
        }
    }

    pub fn format_timestamp(&self, ts: &DateTime<Utc>) -> String {
        match self.utc_offset {
            Some(offset) => ts.with_timezone(&offset).format(LOCALE_TIMESTAMP).to_string(),
            None => ts.with_timezone(&Local).format(LOCALE_TIMESTAMP).to_string(),
        }
    }
}

/// One dashboard card. Text fields hold the raw stored text; `render_html`
/// escapes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestCard {
    pub id: RequestId,
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub submitted: String,
    pub status: String,
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate to `max_chars` characters, respecting UTF-8 boundaries.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn render_card(request: &QuoteRequest, options: &RenderOptions) -> RequestCard {
    let details = request.project_details.as_deref().unwrap_or("");
    let title = truncate_chars(details, DETAIL_PREVIEW_CHARS);

    let name = request
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&request.client_user);

    RequestCard {
        id: request.id,
        title: if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title.to_string()
        },
        name: name.to_string(),
        email: request.email.clone().unwrap_or_default(),
        phone: request.phone.clone().unwrap_or_default(),
        submitted: options.format_timestamp(&request.submitted_at),
        status: request.status.as_str().to_string(),
    }
}

/// Turn stored requests into display cards, keeping their order.
pub fn render_cards(requests: &[QuoteRequest], options: &RenderOptions) -> Vec<RequestCard> {
    requests.iter().map(|r| render_card(r, options)).collect()
}

/// Dashboard list markup with every card field escaped. An empty slice
/// yields the empty-state card.
pub fn render_html(cards: &[RequestCard]) -> String {
    if cards.is_empty() {
        return format!("<div class=\"card\"><p>{}</p></div>", EMPTY_STATE);
    }

    cards
        .iter()
        .map(|card| {
            format!(
                concat!(
                    "<div class=\"card\" data-id=\"{id}\">\n",
                    "  <h3>{title}</h3>\n",
                    "  <p><strong>Name:</strong> {name}</p>\n",
                    "  <p><strong>Email:</strong> {email}</p>\n",
                    "  <p><strong>Phone:</strong> {phone}</p>\n",
                    "  <p><small>Submitted: {submitted}</small></p>\n",
                    "  <p>Status: <span class=\"status {status}\">{status}</span></p>\n",
                    "</div>"
                ),
                id = card.id,
                title = escape_html(&card.title),
                name = escape_html(&card.name),
                email = escape_html(&card.email),
                phone = escape_html(&card.phone),
                submitted = escape_html(&card.submitted),
                status = escape_html(&card.status),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
