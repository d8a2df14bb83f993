//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `ui`) so individual components can
//! depend on small focused models provided as `RwSignal` contexts.

pub mod chat;
pub mod ui;
