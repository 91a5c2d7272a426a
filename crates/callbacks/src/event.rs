// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event payload types for the runtime's callback lifecycle

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Extra keyword data the runtime attaches to an event, passed through verbatim
pub type Kwargs = serde_json::Map<String, Value>;

/// One completion candidate from a model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Generated text
    pub text: String,
    /// Provider-specific metadata (finish reason, logprobs, ...)
    #[serde(default)]
    pub generation_info: Option<Value>,
}

/// Result of a completed model call
///
/// One inner list per input prompt; a prompt may produce several candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResult {
    pub generations: Vec<Vec<Generation>>,
    /// Provider-specific output (token usage, model name, ...)
    #[serde(default)]
    pub llm_output: Option<Value>,
}

/// A tool invocation chosen by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAction {
    /// Tool to invoke
    pub tool: String,
    /// Raw input handed to the tool
    pub tool_input: String,
    /// The reasoning text that led to this action
    pub log: String,
}

/// Terminal values produced when the agent finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentFinish {
    /// Final outputs keyed by name
    pub return_values: serde_json::Map<String, Value>,
    /// The reasoning text that led to finishing
    pub log: String,
}

/// Failure the runtime reports to an error hook.
///
/// A genuine error and a user-initiated interruption arrive through the
/// same channel; handlers treat both identically.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CallbackFailure {
    /// The model, chain, or tool raised an error
    #[error("{0}")]
    Error(String),
    /// The user interrupted execution
    #[error("interrupted: {0}")]
    Interrupted(String),
}

impl CallbackFailure {
    /// The message carried by either variant
    pub fn message(&self) -> &str {
        match self {
            CallbackFailure::Error(msg) | CallbackFailure::Interrupted(msg) => msg,
        }
    }
}
