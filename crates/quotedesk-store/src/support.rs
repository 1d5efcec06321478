use quotedesk_types::SupportRequest;

use crate::{KeyValueStore, Result, collection, keys};

/// Messages from the support form, most recent first.
pub struct SupportStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> SupportStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    pub fn append(&self, mut request: SupportRequest) -> Result<SupportRequest> {
        let mut requests = collection::load::<SupportRequest>(self.kv, keys::SUPPORT_REQUESTS)?;
        let existing = requests.records().map(|r| r.id).chain(requests.unreadable_ids());
        request.id = collection::next_id(existing, request.id);
        requests.prepend(request.clone());
        collection::store(self.kv, keys::SUPPORT_REQUESTS, &requests)?;
        Ok(request)
    }

    pub fn list(&self) -> Result<Vec<SupportRequest>> {
        collection::read(self.kv, keys::SUPPORT_REQUESTS)
    }
}
