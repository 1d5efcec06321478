use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::Error;

/// Raw submitted form fields, keyed by input name.
///
/// Presence matters: a key that was submitted blank is different from a key
/// the form never had.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Trimmed value, or `None` if absent or blank.
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse `key=value` pairs, e.g. from repeated command-line flags.
    pub fn parse_pairs<I, S>(pairs: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::MalformedField(pair.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::MalformedField(pair.to_string()));
            }
            fields.insert(key, value);
        }
        Ok(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FromStr for FormFields {
    type Err = Error;

    /// Parses a single `key=value` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_pairs([s])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_keeps_value_equals_signs() {
        let fields = FormFields::parse_pairs(["name=Ann", "project_details=a=b"]).unwrap();
        assert_eq!(fields.get("name"), Some("Ann"));
        assert_eq!(fields.get("project_details"), Some("a=b"));
    }

    #[test]
    fn test_parse_pairs_rejects_missing_separator() {
        let err = FormFields::parse_pairs(["budget"]).unwrap_err();
        assert_eq!(err, Error::MalformedField("budget".to_string()));
        assert!(FormFields::parse_pairs(["=5"]).is_err());
    }

    #[test]
    fn test_non_blank_distinguishes_presence() {
        let fields = FormFields::new().with("phone", "   ");
        assert!(fields.contains("phone"));
        assert_eq!(fields.non_blank("phone"), None);
        assert!(fields.is_empty());
    }
}
