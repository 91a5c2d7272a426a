// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Callback instrumentation for agent runtimes
//!
//! This crate provides:
//! - `CallbackHandler` - lifecycle hooks a handler registers with the runtime
//! - `LoggingCallbackHandler` - forwards every lifecycle event to structured logging
//! - Event payload types the runtime hands to hooks

pub mod event;
pub mod handler;
pub mod logging;

pub use event::{AgentAction, AgentFinish, CallbackFailure, Generation, Kwargs, LlmResult};
pub use handler::CallbackHandler;
pub use logging::LoggingCallbackHandler;
