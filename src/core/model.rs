// SyriaBiz - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// Languages the directory is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic. The directory starts in Arabic.
    #[default]
    Ar,
    En,
}

impl Language {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Language] {
        &[Language::Ar, Language::En]
    }

    /// Canonical language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a language tag (case-insensitive, tolerant of region tags
    /// such as `en-GB` or `ar_SY`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    /// Arabic is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Localized text
// =============================================================================

/// User-facing text carried in both languages.
///
/// Both fields are always present; either may be an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedString {
    pub ar: String,
    pub en: String,
}

impl LocalizedString {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Text for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}

// =============================================================================
// Category and City
// =============================================================================

/// Kind of business. Closed set; new kinds need a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clinic,
    Pharmacy,
    Factory,
    Office,
}

impl Category {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Clinic,
            Category::Pharmacy,
            Category::Factory,
            Category::Office,
        ]
    }

    /// English identifier, also used in catalog files and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Clinic => "Clinic",
            Category::Pharmacy => "Pharmacy",
            Category::Factory => "Factory",
            Category::Office => "Office",
        }
    }

    /// Localization key of the display label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::Clinic => "categoryClinic",
            Category::Pharmacy => "categoryPharmacy",
            Category::Factory => "categoryFactory",
            Category::Office => "categoryOffice",
        }
    }

    /// Parse an identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// City a business is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Damascus,
    Aleppo,
    Homs,
}

impl City {
    /// Returns all variants in display order.
    pub fn all() -> &'static [City] {
        &[City::Damascus, City::Aleppo, City::Homs]
    }

    /// English identifier, also used in catalog files and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            City::Damascus => "Damascus",
            City::Aleppo => "Aleppo",
            City::Homs => "Homs",
        }
    }

    /// Localization key of the display label.
    pub fn label_key(&self) -> &'static str {
        match self {
            City::Damascus => "cityDamascus",
            City::Aleppo => "cityAleppo",
            City::Homs => "cityHoms",
        }
    }

    /// Parse an identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Opening hours
// =============================================================================

/// Daily recurring open window on the local 24-hour clock.
///
/// `open == 0 && close == 24` means always open. Windows that cross
/// midnight (close <= open) are not modelled and never evaluate as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: u8,
    pub close: u8,
}

impl OpeningHours {
    /// The 0-24 sentinel window.
    pub const ALWAYS_OPEN: OpeningHours = OpeningHours { open: 0, close: 24 };

    pub fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    pub fn is_always_open(&self) -> bool {
        *self == Self::ALWAYS_OPEN
    }

    /// Display form: "24/7" for the sentinel, otherwise "09:00 - 17:00".
    pub fn label(&self) -> String {
        if self.is_always_open() {
            "24/7".to_string()
        } else {
            format!("{:02}:00 - {:02}:00", self.open, self.close)
        }
    }
}

// =============================================================================
// Business
// =============================================================================

/// A single directory listing.
///
/// Records are only ever built through `core::builder` or loaded from a
/// catalog document and validated, so the fields can be read freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Unique within a catalog. Higher ids were created later.
    pub id: u64,

    pub name: LocalizedString,

    pub category: Category,

    pub city: City,

    /// Free text; only checked for presence.
    pub phone: String,

    pub address: LocalizedString,

    pub description: LocalizedString,

    /// Image URL.
    pub image: String,

    pub hours: OpeningHours,
}
