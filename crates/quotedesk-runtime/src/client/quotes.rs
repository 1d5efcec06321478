use quotedesk_core::{FormProfile, RequestCard, ValidationError, render_cards, validate_quote};
use quotedesk_store::{QuoteStore, RequestFilter};
use quotedesk_types::{FormFields, QuoteRequest, RequestId, RequestStatus, Role};
use serde::Serialize;
use std::io;

use super::{QuoteDesk, Submission};
use crate::Result;

/// What a dashboard page shows: who is looking and their cards.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub viewer: String,
    pub role: Role,
    pub cards: Vec<RequestCard>,
}

pub struct QuoteOps<'a> {
    desk: &'a QuoteDesk,
}

impl<'a> QuoteOps<'a> {
    pub(super) fn new(desk: &'a QuoteDesk) -> Self {
        Self { desk }
    }

    fn store(&self) -> QuoteStore<'a> {
        QuoteStore::new(self.desk.store())
    }

    /// Validate and persist a quote form.
    ///
    /// Public submissions are owned by the email local part; client
    /// dashboard submissions by the logged-in client name, which also fills
    /// in a missing `name`.
    pub fn submit(
        &self,
        fields: &FormFields,
        profile: FormProfile,
    ) -> std::result::Result<Submission<QuoteRequest>, ValidationError> {
        let quote = validate_quote(fields, profile)?;
        let submitted_at = self.desk.clock().now();

        let (client_user, name) = match profile {
            FormProfile::Public => {
                let owner = quote
                    .email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .unwrap_or("")
                    .to_string();
                (owner, quote.name)
            }
            FormProfile::Client => {
                let owner = self.client_identity();
                let name = quote.name.or_else(|| Some(owner.clone()));
                (owner, name)
            }
        };

        let request = QuoteRequest {
            id: RequestId::from_datetime(submitted_at),
            submitted_at,
            client_user,
            status: RequestStatus::Pending,
            name,
            email: quote.email,
            phone: quote.phone,
            area_size: quote.area_size,
            budget: quote.budget,
            project_details: quote.project_details,
            extra: quote.extra,
        };

        Ok(match self.store().append(request.clone()) {
            Ok(stored) => {
                tracing::info!(id = %stored.id, client_user = %stored.client_user, "quote request saved");
                Submission::Saved(stored)
            }
            Err(err) => {
                tracing::error!(id = %request.id, error = %err, "failed to save quote request");
                Submission::NotPersisted {
                    record: request,
                    error: err.to_string(),
                }
            }
        })
    }

    /// Session identity used to scope the client view. Falls back to the
    /// placeholder name when nobody is logged in, as the dashboard does.
    pub fn client_identity(&self) -> String {
        match self.desk.sessions().display_name(Role::Client) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(error = %err, "could not read client session marker");
                Role::Client.default_display_name().to_string()
            }
        }
    }

    pub fn list(&self, filter: &RequestFilter) -> Result<Vec<QuoteRequest>> {
        Ok(self.store().list(filter)?)
    }

    pub fn get(&self, id: RequestId) -> Result<Option<QuoteRequest>> {
        Ok(self.store().get(id)?)
    }

    /// Mark a request completed. Completing twice is harmless.
    pub fn complete(&self, id: RequestId) -> Result<QuoteRequest> {
        let updated = self.store().set_status(id, RequestStatus::Completed)?;
        tracing::info!(id = %id, "quote request completed");
        Ok(updated)
    }

    pub fn client_dashboard(&self) -> Result<Dashboard> {
        let viewer = self.client_identity();
        let requests = self.list(&RequestFilter::Client(viewer.clone()))?;
        Ok(Dashboard {
            cards: render_cards(&requests, &self.desk.render_options()?),
            viewer,
            role: Role::Client,
        })
    }

    pub fn contractor_dashboard(&self, filter: &RequestFilter) -> Result<Dashboard> {
        let viewer = self.desk.sessions().display_name(Role::Contractor)?;
        let requests = self.list(filter)?;
        Ok(Dashboard {
            cards: render_cards(&requests, &self.desk.render_options()?),
            viewer,
            role: Role::Contractor,
        })
    }

    pub fn export_csv<W: io::Write>(&self, filter: &RequestFilter, writer: W) -> Result<usize> {
        Ok(self.store().export_csv(filter, writer)?)
    }
}
