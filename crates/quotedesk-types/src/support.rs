use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::RequestId;

/// A message sent through the support/contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRequest {
    pub id: RequestId,

    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,

    /// Always `"support"`; kept so the stored blob is self-describing.
    #[serde(rename = "type", default = "support_kind")]
    pub kind: String,

    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

fn support_kind() -> String {
    "support".to_string()
}

impl SupportRequest {
    pub fn new(
        id: RequestId,
        submitted_at: DateTime<Utc>,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id,
            submitted_at,
            kind: support_kind(),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }
}
