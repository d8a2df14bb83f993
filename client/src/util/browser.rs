//! Thin wrappers over browser APIs used by components.
//!
//! Every helper is a no-op outside the `hydrate` build so callers need no
//! `cfg` of their own.

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
