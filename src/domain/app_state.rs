use serde::{Deserialize, Serialize};

/// Interface language offered by the top-nav selector. Selection only
/// changes chrome state for now; page copy is not translated yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Chrome-level state shared through context. Each page keeps its own form
/// and result state locally; nothing here crosses page boundaries.
#[derive(Clone, Debug)]
pub struct AppState {
    pub language: Language,
    pub unread_notifications: u8,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            // Seeded advisory notices; there is no live feed behind these.
            unread_notifications: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }
}
