use quotedesk_types::Role;

use crate::{KeyValueStore, Result, keys};

/// Remembered dashboard names, one per role.
///
/// Values are stored as plain strings, not JSON.
pub struct SessionMarkers<'a> {
    kv: &'a dyn KeyValueStore,
}

fn marker_key(role: Role) -> &'static str {
    match role {
        Role::Client => keys::CLIENT_NAME,
        Role::Contractor => keys::CONTRACTOR_NAME,
    }
}

impl<'a> SessionMarkers<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    pub fn get(&self, role: Role) -> Result<Option<String>> {
        Ok(self
            .kv
            .get(marker_key(role))?
            .filter(|name| !name.is_empty()))
    }

    pub fn set(&self, role: Role, name: &str) -> Result<()> {
        self.kv.set(marker_key(role), name)
    }

    pub fn clear(&self, role: Role) -> Result<()> {
        self.kv.remove(marker_key(role))
    }

    /// Logged-in name, or the role's placeholder name.
    pub fn display_name(&self, role: Role) -> Result<String> {
        Ok(self
            .get(role)?
            .unwrap_or_else(|| role.default_display_name().to_string()))
    }
}
