// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Workflow worker support
//!
//! This crate provides the validated identity context a workflow worker
//! attaches to each activity it executes.

pub mod auth;

pub use auth::{AuthContextError, AuthenticationContext};
