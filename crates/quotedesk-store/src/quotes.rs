use quotedesk_types::{QuoteRequest, RequestId, RequestStatus};
use std::io;

use crate::{Error, KeyValueStore, Result, collection, keys};

/// Which requests a dashboard gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFilter {
    /// Contractor view.
    All,
    /// Client view: only requests owned by this session identity.
    Client(String),
    Status(RequestStatus),
}

impl RequestFilter {
    pub fn matches(&self, request: &QuoteRequest) -> bool {
        match self {
            RequestFilter::All => true,
            RequestFilter::Client(identity) => request.belongs_to(identity),
            RequestFilter::Status(status) => request.status == *status,
        }
    }
}

/// The persisted quote request collection, most recent first.
pub struct QuoteStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> QuoteStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    pub fn load(&self) -> Result<Vec<QuoteRequest>> {
        collection::read(self.kv, keys::QUOTE_REQUESTS)
    }

    /// Prepend a request and persist the whole collection.
    ///
    /// Returns the request as stored; its id may have been moved past the
    /// newest existing id.
    pub fn append(&self, mut request: QuoteRequest) -> Result<QuoteRequest> {
        let mut requests = collection::load::<QuoteRequest>(self.kv, keys::QUOTE_REQUESTS)?;
        let existing = requests.records().map(|r| r.id).chain(requests.unreadable_ids());
        request.id = collection::next_id(existing, request.id);
        requests.prepend(request.clone());
        collection::store(self.kv, keys::QUOTE_REQUESTS, &requests)?;
        Ok(request)
    }

    pub fn list(&self, filter: &RequestFilter) -> Result<Vec<QuoteRequest>> {
        self.list_where(|r| filter.matches(r))
    }

    /// Stored order is preserved.
    pub fn list_where(&self, predicate: impl Fn(&QuoteRequest) -> bool) -> Result<Vec<QuoteRequest>> {
        Ok(self.load()?.into_iter().filter(|r| predicate(r)).collect())
    }

    pub fn get(&self, id: RequestId) -> Result<Option<QuoteRequest>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Move a request to `status`. Re-applying the current status writes
    /// nothing; moving backwards is rejected.
    pub fn set_status(&self, id: RequestId, status: RequestStatus) -> Result<QuoteRequest> {
        let mut requests = collection::load::<QuoteRequest>(self.kv, keys::QUOTE_REQUESTS)?;
        let request = requests
            .records_mut()
            .find(|r| r.id == id)
            .ok_or(Error::NotFound(id))?;

        if request.status == status {
            return Ok(request.clone());
        }
        if !request.status.can_transition_to(status) {
            return Err(Error::InvalidTransition {
                id,
                from: request.status,
                to: status,
            });
        }

        request.status = status;
        let updated = request.clone();
        collection::store(self.kv, keys::QUOTE_REQUESTS, &requests)?;
        Ok(updated)
    }

    /// Write matching requests as CSV. Returns the number of rows written.
    pub fn export_csv<W: io::Write>(&self, filter: &RequestFilter, writer: W) -> Result<usize> {
        let requests = self.list(filter)?;
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record([
            "id",
            "submittedAt",
            "clientUser",
            "status",
            "name",
            "email",
            "phone",
            "area_size",
            "budget",
            "project_details",
        ])?;

        for r in &requests {
            wtr.write_record([
                r.id.to_string(),
                r.submitted_at.to_rfc3339(),
                r.client_user.clone(),
                r.status.to_string(),
                r.name.clone().unwrap_or_default(),
                r.email.clone().unwrap_or_default(),
                r.phone.clone().unwrap_or_default(),
                r.area_size.map(|v| v.to_string()).unwrap_or_default(),
                r.budget.map(|v| v.to_string()).unwrap_or_default(),
                r.project_details.clone().unwrap_or_default(),
            ])?;
        }

        wtr.flush().map_err(|e| Error::Csv(e.into()))?;
        Ok(requests.len())
    }
}
