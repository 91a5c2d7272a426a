// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback hook definitions

use crate::event::{AgentAction, AgentFinish, CallbackFailure, Kwargs, LlmResult};
use serde_json::{Map, Value};

/// Lifecycle hooks the runtime invokes on a registered handler.
///
/// Every hook has a no-op default so implementations override only the
/// events they care about. Hooks are plain synchronous callbacks invoked
/// inline on the runtime's execution path: they return nothing and must
/// not panic. Ordering across hooks is the runtime's business; each hook
/// is an independent, stateless notification.
pub trait CallbackHandler: Send + Sync {
    /// A model call is starting
    fn on_llm_start(&self, _serialized: &Value, _prompts: &[String], _kwargs: &Kwargs) {}

    /// The model streamed a new token
    fn on_llm_new_token(&self, _token: &str, _kwargs: &Kwargs) {}

    /// A model call completed
    fn on_llm_end(&self, _response: &LlmResult, _kwargs: &Kwargs) {}

    /// A model call failed or was interrupted
    fn on_llm_error(&self, _error: &CallbackFailure, _kwargs: &Kwargs) {}

    /// A chain is starting
    fn on_chain_start(&self, _serialized: &Value, _inputs: &Map<String, Value>, _kwargs: &Kwargs) {}

    /// A chain completed
    fn on_chain_end(&self, _outputs: &Map<String, Value>, _kwargs: &Kwargs) {}

    /// A chain failed or was interrupted
    fn on_chain_error(&self, _error: &CallbackFailure, _kwargs: &Kwargs) {}

    /// A tool call is starting
    fn on_tool_start(&self, _serialized: &Value, _input_str: &str, _kwargs: &Kwargs) {}

    /// A tool call completed
    fn on_tool_end(&self, _output: &str, _kwargs: &Kwargs) {}

    /// A tool call failed or was interrupted
    fn on_tool_error(&self, _error: &CallbackFailure, _kwargs: &Kwargs) {}

    /// The runtime emitted free-form text
    fn on_text(&self, _text: &str, _kwargs: &Kwargs) {}

    /// The agent chose an action
    fn on_agent_action(&self, _action: &AgentAction, _kwargs: &Kwargs) {}

    /// The agent finished
    fn on_agent_finish(&self, _finish: &AgentFinish, _kwargs: &Kwargs) {}
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
