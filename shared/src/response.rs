use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ResponseError;
use crate::result::{is_present, is_success, SendResult};

/// Body the provider returns for a (multicast) send request.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub multicast_id: Option<i64>,
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub failure: u32,
    #[serde(default)]
    pub canonical_ids: u32,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

/// One entry of `results`, in the same order as the request's destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub registration_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Counts recomputed from the entries themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseSummary {
    pub success: u32,
    pub failure: u32,
    pub canonical_ids: u32,
}

impl<C> SendResult<C> {
    /// Builds a result from a decoded response entry.
    pub fn from_entry(context: C, entry: ResultEntry) -> Self {
        SendResult::new(
            context,
            entry.registration_id,
            entry.message_id,
            entry.error,
        )
    }
}

impl SendResponse {
    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        let response: SendResponse = serde_json::from_str(body)?;

        debug!(
            "Decoded send response multicast_id={:?} with {} results",
            response.multicast_id,
            response.results.len()
        );

        let summary = response.summary();
        if summary.success != response.success
            || summary.failure != response.failure
            || summary.canonical_ids != response.canonical_ids
        {
            warn!(
                "Provider totals (success={}, failure={}, canonical_ids={}) disagree with entries {:?}",
                response.success, response.failure, response.canonical_ids, summary
            );
        }

        Ok(response)
    }

    /// Pairs each entry with the context of the destination it belongs to.
    pub fn into_results<C, I>(self, contexts: I) -> Result<Vec<SendResult<C>>, ResponseError>
    where
        I: IntoIterator<Item = C>,
    {
        let contexts: Vec<C> = contexts.into_iter().collect();
        if contexts.len() != self.results.len() {
            return Err(ResponseError::ContextMismatch {
                expected: contexts.len(),
                actual: self.results.len(),
            });
        }

        Ok(contexts
            .into_iter()
            .zip(self.results)
            .map(|(context, entry)| SendResult::from_entry(context, entry))
            .collect())
    }

    pub fn summary(&self) -> ResponseSummary {
        let mut summary = ResponseSummary::default();
        for entry in &self.results {
            if is_success(entry.message_id.as_deref(), entry.error.as_deref()) {
                summary.success += 1;
            } else {
                summary.failure += 1;
            }
            if is_present(entry.registration_id.as_deref()) {
                summary.canonical_ids += 1;
            }
        }
        summary
    }
}
