use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactRequest, SubmissionTicket};

/// Monotonic per-form submission tag, used to drop repeat deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Success,
    Error,
}

/// Structured answer from the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub message: String,
}

impl SubmitResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Error,
            message: message.into(),
        }
    }
}

/// The call itself failed, as opposed to a structured error response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Delivers a contact request somewhere.
pub trait Submitter {
    fn submit(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<SubmitResponse, SubmitError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub id: SubmissionId,
    pub first_name: String,
    pub result: Result<SubmitResponse, SubmitError>,
}

/// Holds a loading flag raised for as long as the guard lives.
pub struct LoadingGuard<F: Fn(bool)> {
    set_loading: F,
}

impl<F: Fn(bool)> LoadingGuard<F> {
    pub fn acquire(set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: Fn(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

/// Send one ticket through `submitter` with the loading flag held.
///
/// The flag is lowered on every exit, including a fault or the future being
/// dropped before completion.
pub async fn run_submission<S, F>(
    ticket: SubmissionTicket,
    submitter: &S,
    set_loading: F,
) -> SubmissionOutcome
where
    S: Submitter,
    F: Fn(bool),
{
    let _loading = LoadingGuard::acquire(set_loading);
    log::debug!("submitting contact request {:?}", ticket.id);
    let result = submitter.submit(&ticket.request).await;
    SubmissionOutcome {
        id: ticket.id,
        first_name: ticket.request.first_name,
        result,
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use server::{submit_contact, ServerSubmitter};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod server {
    use leptos::prelude::*;
    use leptos::server_fn::codec::Json;

    use super::{SubmitError, SubmitResponse, Submitter};
    use crate::contact::ContactRequest;

    #[server(input = Json)]
    pub async fn submit_contact(request: ContactRequest) -> Result<SubmitResponse, ServerFnError> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %e, "rejected contact request");
            return Ok(SubmitResponse::error(e.to_string()));
        }
        tracing::info!(
            first_name = %request.first_name,
            email = %request.email,
            enquiry = %request.enquiry,
            comment_len = request.comment.chars().count(),
            "contact request received"
        );
        Ok(SubmitResponse::success(format!(
            "Thanks for your submission {}, we will get back to you shortly!",
            request.first_name
        )))
    }

    /// Submits through the `submit_contact` server function.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ServerSubmitter;

    impl Submitter for ServerSubmitter {
        async fn submit(&self, request: &ContactRequest) -> Result<SubmitResponse, SubmitError> {
            submit_contact(request.clone())
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))
        }
    }
}
