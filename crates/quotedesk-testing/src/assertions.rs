//! Assertions over `--format json` output.
//!
//! Every command prints `{"badge"?, "content", "suggestions"?}`; dashboard
//! listings put their cards under `content.cards`.

use anyhow::{Context, Result};
use serde_json::Value;

fn cards(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")
}

/// Assert that a dashboard listing holds `expected` cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = cards(json)?;
    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }
    Ok(())
}

/// Assert that every card shows `status`.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    for (i, card) in cards(json)?.iter().enumerate() {
        let actual = card["status"]
            .as_str()
            .with_context(|| format!("Card {} missing status", i))?;
        if actual != status {
            anyhow::bail!("Card {} has status {} but expected {}", i, actual, status);
        }
    }
    Ok(())
}

/// Card ids in listing order.
pub fn card_ids(json: &Value) -> Result<Vec<u64>> {
    cards(json)?
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["id"]
                .as_u64()
                .with_context(|| format!("Card {} missing numeric id", i))
        })
        .collect()
}

/// Assert that ids are strictly decreasing, i.e. newest first.
pub fn assert_newest_first(json: &Value) -> Result<()> {
    let ids = card_ids(json)?;
    if let Some(pair) = ids.windows(2).find(|w| w[0] <= w[1]) {
        anyhow::bail!("Cards out of order: {} listed before {}", pair[0], pair[1]);
    }
    Ok(())
}

/// Id of the request a `quote submit` printed.
pub fn submitted_id(json: &Value) -> Result<u64> {
    json["content"]["request"]["id"]
        .as_u64()
        .context("Expected 'content.request.id' in JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_card_count() {
        let json = json!({
            "content": {
                "viewer": "Engineer",
                "cards": [{"id": 2, "status": "pending"}, {"id": 1, "status": "pending"}]
            }
        });

        assert!(assert_card_count(&json, 2).is_ok());
        assert!(assert_card_count(&json, 1).is_err());
        assert!(assert_all_status(&json, "pending").is_ok());
        assert!(assert_newest_first(&json).is_ok());
    }

    #[test]
    fn test_assert_newest_first_rejects_ascending() {
        let json = json!({"content": {"cards": [{"id": 1}, {"id": 2}]}});
        assert!(assert_newest_first(&json).is_err());
        assert_eq!(card_ids(&json).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_missing_cards_is_error() {
        let json = json!({"content": {}});
        assert!(assert_card_count(&json, 0).is_err());
    }
}
