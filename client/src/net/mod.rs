//! Networking modules for the scheme assistant HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the raw HTTP calls, `chat_client` wires them into chat state,
//! and `types` defines the wire schema and its validation.

pub mod api;
pub mod chat_client;
pub mod types;
