// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Quill starter.
//!
//! Serves the routes a plugin definition exposes (the starter's
//! `GET /helloworld`) plus a `/health` endpoint.

pub mod server;

pub use server::{ServerConfig, build_router, start_server};
