// Key-value persistence
//
// Every collection lives under one key as a single JSON array and is read
// and written wholesale. Stores borrow a backend handle; nothing here keeps
// global state.

mod collection;
mod error;
pub mod keys;
mod kv;
mod posts;
mod quotes;
mod saved;
mod session;
mod sqlite;
mod support;

pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore};
pub use posts::{FeedScope, PostFilter, PostStore};
pub use quotes::{QuoteStore, RequestFilter};
pub use saved::SavedIds;
pub use session::SessionMarkers;
pub use sqlite::SqliteStore;
pub use support::SupportStore;
