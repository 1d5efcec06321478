use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Who is using a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Client,
    Contractor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Contractor => "contractor",
        }
    }

    /// `userType` written on community posts and comments.
    pub fn community_name(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Contractor => "engineer",
        }
    }

    pub fn avatar(&self) -> &'static str {
        match self {
            Role::Client => "👤",
            Role::Contractor => "👷",
        }
    }

    /// Name shown on the dashboard when nobody is logged in.
    pub fn default_display_name(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Contractor => "Engineer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Role::Client),
            // the community pages call contractors "engineer"
            "contractor" | "engineer" => Ok(Role::Contractor),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}
