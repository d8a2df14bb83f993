//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome and read/write shared state from
//! Leptos context providers.

pub mod chat_message;
pub mod error_banner;
pub mod header;
pub mod message_input;
pub mod message_list;
pub mod scheme_details;
