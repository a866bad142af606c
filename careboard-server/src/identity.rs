//! Participant identity extracted from trusted headers.
//!
//! Authentication itself is delegated to the external identity service; the
//! portal trusts the `x-participant-id` and `x-participant-role` headers it
//! forwards. No credential validation happens here.

use axum::http::request::Parts;
use axum::{extract::FromRequestParts, http::HeaderMap};

use careboard_core::{Participant, Role};

use crate::routes::AppError;

const PARTICIPANT_ID_HEADER: &str = "x-participant-id";
const PARTICIPANT_ROLE_HEADER: &str = "x-participant-role";

/// Required identity: rejects the request with 401 when absent.
pub struct Identity(pub Participant);

/// Optional identity for surfaces that render with or without a viewer.
pub struct MaybeIdentity(pub Option<Participant>);

fn participant_from_headers(headers: &HeaderMap) -> Result<Option<Participant>, AppError> {
    let Some(id_value) = headers.get(PARTICIPANT_ID_HEADER) else {
        return Ok(None);
    };

    let id = id_value
        .to_str()
        .map_err(|_| AppError::BadRequest("participant id is not valid UTF-8".to_string()))?
        .to_string();

    let role_text = headers
        .get(PARTICIPANT_ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    let role: Role = role_text.parse()?;

    Ok(Some(Participant { id, role }))
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match participant_from_headers(&parts.headers)? {
            Some(participant) => Ok(Identity(participant)),
            None => Err(AppError::Unauthenticated),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(participant_from_headers(&parts.headers)?))
    }
}
