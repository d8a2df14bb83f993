//! Header preferences: answer language and the "Latest Updates" toggle.
//!
//! DESIGN
//! ======
//! Kept apart from conversation state (`chat`) so changing a preference never
//! touches the message list. Values are read untracked at send time.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Header preferences: answer language and the grounding toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub language: Language,
    /// Ask the backend to fold in up-to-date external information.
    pub use_grounding: bool,
}

/// Languages offered in the header selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Tamil,
    Telugu,
    Marathi,
}

impl Language {
    /// Selector order.
    pub const ALL: [Self; 6] = [Self::English, Self::Hindi, Self::Bengali, Self::Tamil, Self::Telugu, Self::Marathi];

    /// ISO 639-1 code sent to the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Marathi => "mr",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Marathi => "Marathi",
        }
    }

    /// Look up a language by its code. Unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}
