use vmap_core::{Phrase, TranslationGateway};

/// Languages offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Maps a two-letter language code to a locale with a translation
    /// table. Languages without a table (eo, fi, fr) fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "de" => Self::De,
            "en" => Self::En,
            other => {
                log::debug!("No translation table for '{other}', falling back to English");
                Self::En
            }
        }
    }
}

/// Compiled-in localized phrases, the counterpart of the web client's
/// translation files.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTranslations {
    locale: Locale,
}

impl StaticTranslations {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn for_code(code: &str) -> Self {
        Self::new(Locale::from_code(code))
    }
}

impl TranslationGateway for StaticTranslations {
    fn translate(&self, phrase: Phrase) -> String {
        let text = match self.locale {
            Locale::De => match phrase {
                Phrase::Open => "geöffnet",
                Phrase::Closed => "geschlossen",
                Phrase::WillCloseSoon => ", schließt bald",
                Phrase::WillOpenSoon => ", öffnet bald",
                Phrase::PublicHoliday => "Feiertag",
                Phrase::MoreInfo => "Weitere Informationen",
            },
            Locale::En => match phrase {
                Phrase::Open => "open",
                Phrase::Closed => "closed",
                Phrase::WillCloseSoon => ", will close soon",
                Phrase::WillOpenSoon => ", will open soon",
                Phrase::PublicHoliday => "public holiday",
                Phrase::MoreInfo => "More information",
            },
        };
        text.to_string()
    }
}
