//! Classification of transport outcomes
//!
//! Every completed exchange ends up in exactly one bucket: a success carrying
//! its body, an expected absence, or a domain failure. Transport and decode
//! failures are raised elsewhere (by the transport and the mapper).

use crate::error::AppError;
use crate::model::http::RawResponse;
use crate::model::mapper::ResponseMapper;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

/// What a request addresses, which decides how "not found" is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceScope {
    /// A single resource by id; 404 means the resource is absent
    Item,
    /// A collection or an action; 404 is a failure
    Collection,
}

/// Successful interpretation of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx with its body, possibly empty
    Success(String),
    /// The addressed resource does not exist
    Absent,
}

/// Error envelopes the service uses in rejection bodies
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEnvelope {
    Detailed {
        error: ErrorDetail,
    },
    Flat {
        error: String,
        #[serde(default)]
        error_description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Interprets the status of a completed exchange
pub fn classify<M: ResponseMapper>(
    mapper: &M,
    response: RawResponse,
    scope: ResourceScope,
) -> Result<Outcome, AppError> {
    let status = response.status;
    if status.is_success() {
        return Ok(Outcome::Success(response.body));
    }
    if status == StatusCode::NOT_FOUND && scope == ResourceScope::Item {
        return Ok(Outcome::Absent);
    }
    let failure = domain_failure(mapper, status, &response.body);
    error!("Request rejected with status {}: {}", status, failure);
    Err(failure)
}

/// Body of a successful exchange with a collection or action; every non-2xx is a failure
pub fn success_body<M: ResponseMapper>(mapper: &M, response: RawResponse) -> Result<String, AppError> {
    match classify(mapper, response, ResourceScope::Collection)? {
        Outcome::Success(body) => Ok(body),
        Outcome::Absent => Err(domain_failure(mapper, StatusCode::NOT_FOUND, "")),
    }
}

/// Builds an [`AppError::Domain`] from a rejection, preferring the body's code and message
pub fn domain_failure<M: ResponseMapper>(mapper: &M, status: StatusCode, body: &str) -> AppError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let fallback_code = reason.to_lowercase().replace(' ', "_");

    let (code, message) = match mapper.decode::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope::Detailed { error }) => {
            let code = match error.code {
                Some(Value::String(code)) if !code.is_empty() => code,
                Some(Value::Number(code)) => code.to_string(),
                _ => error.name.unwrap_or(fallback_code),
            };
            let message = error
                .message
                .or(error.description)
                .unwrap_or_else(|| reason.to_string());
            (code, message)
        }
        Ok(ErrorEnvelope::Flat {
            error,
            error_description,
        }) => (error, error_description.unwrap_or_else(|| reason.to_string())),
        Err(_) if body.trim().is_empty() => (fallback_code, reason.to_string()),
        Err(_) => (fallback_code, body.trim().to_string()),
    };

    AppError::Domain {
        status: Some(status.as_u16()),
        code,
        message,
    }
}
