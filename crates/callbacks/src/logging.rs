// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging for runtime callbacks

use crate::event::{AgentAction, AgentFinish, CallbackFailure, Kwargs, LlmResult};
use crate::handler::CallbackHandler;
use serde_json::{Map, Value};

/// Log target carrying every callback record
const LOG_TARGET: &str = "langchain";

/// Handler that forwards every lifecycle event to structured logging.
///
/// Each hook emits exactly one record under the `langchain` target, tagged
/// with the event name and carrying the event payload under its own field
/// names plus the untouched `kwargs` bag. Model, chain, and tool failures
/// log at error level; everything else at debug. Payloads are logged in
/// full, unredacted; callers control exposure through subscriber
/// filtering.
#[derive(Debug, Clone, Default)]
pub struct LoggingCallbackHandler;

impl LoggingCallbackHandler {
    pub fn new() -> Self {
        Self
    }
}

impl CallbackHandler for LoggingCallbackHandler {
    fn on_llm_start(&self, serialized: &Value, prompts: &[String], kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?serialized, ?prompts, ?kwargs, "llm_start");
    }

    fn on_llm_new_token(&self, token: &str, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, token, ?kwargs, "llm_new_token");
    }

    fn on_llm_end(&self, response: &LlmResult, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?response, ?kwargs, "llm_end");
    }

    fn on_llm_error(&self, error: &CallbackFailure, kwargs: &Kwargs) {
        tracing::error!(target: LOG_TARGET, ?error, ?kwargs, "llm_error");
    }

    fn on_chain_start(&self, serialized: &Value, inputs: &Map<String, Value>, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?serialized, ?inputs, ?kwargs, "chain_start");
    }

    fn on_chain_end(&self, outputs: &Map<String, Value>, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?outputs, ?kwargs, "chain_end");
    }

    fn on_chain_error(&self, error: &CallbackFailure, kwargs: &Kwargs) {
        tracing::error!(target: LOG_TARGET, ?error, ?kwargs, "chain_error");
    }

    fn on_tool_start(&self, serialized: &Value, input_str: &str, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?serialized, input_str, ?kwargs, "tool_start");
    }

    fn on_tool_end(&self, output: &str, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, output, ?kwargs, "tool_end");
    }

    fn on_tool_error(&self, error: &CallbackFailure, kwargs: &Kwargs) {
        tracing::error!(target: LOG_TARGET, ?error, ?kwargs, "tool_error");
    }

    fn on_text(&self, text: &str, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, text, ?kwargs, "text");
    }

    fn on_agent_action(&self, action: &AgentAction, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?action, ?kwargs, "agent_action");
    }

    fn on_agent_finish(&self, finish: &AgentFinish, kwargs: &Kwargs) {
        tracing::debug!(target: LOG_TARGET, ?finish, ?kwargs, "agent_finish");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
