// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actor authentication context

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Wire name of the actor id field
const ACTOR_ID: &str = "actorId";

/// Errors from authentication context validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthContextError {
    /// Input was not a field mapping at all
    #[error("authentication context must be an object")]
    NotAnObject,
    /// Required field absent from the input
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Field present but not usable
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    /// Input carried fields outside the recognized set
    #[error("unexpected fields: {}", .0.join(", "))]
    UnexpectedFields(Vec<String>),
}

/// Identity on whose behalf a workflow executes.
///
/// Built once from deserialized wire input and immutable afterwards. The
/// schema is closed: any field beyond `actorId` rejects the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthenticationContext {
    actor_id: Uuid,
}

impl AuthenticationContext {
    /// Validate a deserialized wire value and build the context
    pub fn from_value(value: &Value) -> Result<Self, AuthContextError> {
        let fields = value.as_object().ok_or(AuthContextError::NotAnObject)?;
        Self::from_fields(fields)
    }

    /// Validate a field mapping and build the context.
    ///
    /// `actorId` must be present and hold a string-form UUID; no other
    /// field is accepted.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, AuthContextError> {
        let unexpected: Vec<String> = fields
            .keys()
            .filter(|key| key.as_str() != ACTOR_ID)
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(AuthContextError::UnexpectedFields(unexpected));
        }

        let raw = fields
            .get(ACTOR_ID)
            .ok_or(AuthContextError::MissingField(ACTOR_ID))?;
        let text = raw.as_str().ok_or_else(|| AuthContextError::InvalidField {
            field: ACTOR_ID,
            reason: "expected a string".into(),
        })?;
        let actor_id = Uuid::parse_str(text).map_err(|e| AuthContextError::InvalidField {
            field: ACTOR_ID,
            reason: e.to_string(),
        })?;

        Ok(Self { actor_id })
    }

    /// The validated actor id
    pub fn actor_id(&self) -> Uuid {
        self.actor_id
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
