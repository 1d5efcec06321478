mod auth;
mod community;
mod quotes;
mod support;

pub use auth::AuthOps;
pub use community::CommunityOps;
pub use quotes::{Dashboard, QuoteOps};
pub use support::SupportOps;

use quotedesk_core::{Clock, RenderOptions, SystemClock};
use quotedesk_store::{KeyValueStore, SavedIds, SessionMarkers, SqliteStore};
use std::path::{Path, PathBuf};

use crate::chat::{ChatClient, HttpTransport};
use crate::config::Config;
use crate::Result;

/// Outcome of a form that passed validation.
///
/// A storage failure is reported instead of being hidden behind a success
/// message; the record is returned so the caller can show what was lost.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Saved(T),
    NotPersisted { record: T, error: String },
}

impl<T> Submission<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Submission::Saved(_))
    }

    pub fn record(&self) -> &T {
        match self {
            Submission::Saved(record) | Submission::NotPersisted { record, .. } => record,
        }
    }
}

/// Entry point tying a storage backend, configuration and clock together.
pub struct QuoteDesk {
    kv: Box<dyn KeyValueStore>,
    config: Config,
    clock: Box<dyn Clock>,
    data_dir: Option<PathBuf>,
}

impl QuoteDesk {
    /// Open (creating if needed) the workspace in `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let db_path = data_dir.join("quotedesk.db");
        let config_path = data_dir.join("config.toml");

        let kv = SqliteStore::open(&db_path)?;
        let config = Config::load_from(&config_path)?;

        Ok(Self {
            kv: Box::new(kv),
            config,
            clock: Box::new(SystemClock),
            data_dir: Some(data_dir.to_path_buf()),
        })
    }

    /// Build a desk over any backend, e.g. `MemoryStore` in tests.
    pub fn with_backend(kv: Box<dyn KeyValueStore>, config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            kv,
            config,
            clock,
            data_dir: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            utc_offset: self.config.display.utc_offset()?,
        })
    }

    pub fn quotes(&self) -> QuoteOps<'_> {
        QuoteOps::new(self)
    }

    pub fn support(&self) -> SupportOps<'_> {
        SupportOps::new(self)
    }

    pub fn auth(&self) -> AuthOps<'_> {
        AuthOps::new(self)
    }

    pub fn community(&self) -> CommunityOps<'_> {
        CommunityOps::new(self)
    }

    pub fn saved(&self) -> SavedIds<'_> {
        SavedIds::new(self.store())
    }

    pub fn sessions(&self) -> SessionMarkers<'_> {
        SessionMarkers::new(self.store())
    }

    pub fn chat(&self) -> ChatClient<HttpTransport> {
        ChatClient::new(HttpTransport::new(&self.config.chat))
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
