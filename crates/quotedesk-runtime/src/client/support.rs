use quotedesk_core::ValidationError;
use quotedesk_store::SupportStore;
use quotedesk_types::{FormFields, RequestId, SupportRequest};

use super::{QuoteDesk, Submission};
use crate::Result;

pub struct SupportOps<'a> {
    desk: &'a QuoteDesk,
}

impl<'a> SupportOps<'a> {
    pub(super) fn new(desk: &'a QuoteDesk) -> Self {
        Self { desk }
    }

    fn store(&self) -> SupportStore<'a> {
        SupportStore::new(self.desk.store())
    }

    /// Persist a support message. Only a completely blank form is refused.
    pub fn submit(
        &self,
        fields: &FormFields,
    ) -> std::result::Result<Submission<SupportRequest>, ValidationError> {
        if fields.is_empty() {
            return Err(ValidationError::EmptyForm);
        }

        let submitted_at = self.desk.clock().now();
        let payload = fields
            .iter()
            .filter(|(k, _)| !matches!(*k, "id" | "submittedAt" | "type"))
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        let request =
            SupportRequest::new(RequestId::from_datetime(submitted_at), submitted_at, payload);

        Ok(match self.store().append(request.clone()) {
            Ok(stored) => {
                tracing::info!(id = %stored.id, "support request saved");
                Submission::Saved(stored)
            }
            Err(err) => {
                tracing::error!(id = %request.id, error = %err, "failed to save support request");
                Submission::NotPersisted {
                    record: request,
                    error: err.to_string(),
                }
            }
        })
    }

    pub fn list(&self) -> Result<Vec<SupportRequest>> {
        Ok(self.store().list()?)
    }
}
