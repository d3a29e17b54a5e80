//! Country record and flag path derivation.
//!
//! A [`Country`] is built once from the static catalog and never mutated. Its
//! lowercased ISO alpha-2 `code` is the identity key used by selection, the
//! flag cache and the "already signaled" bookkeeping of the presenter.

use serde::{Deserialize, Serialize};

/// Offset from an ASCII uppercase letter to its Unicode regional indicator.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// A selectable country.
///
/// # Fields
///
/// - `code`: ISO alpha-2 code, lowercased (`"fr"`)
/// - `label`: Display name (`"France"`)
/// - `img_src`: Path of the flag image, `<flags-base-path>/<code>.svg`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub label: String,
    pub img_src: String,
}

impl Country {
    /// Creates a country, lowercasing the code and deriving the flag path.
    ///
    /// A trailing `/` on `flags_base_path` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use countrypicker::domain::Country;
    ///
    /// let de = Country::new("DE", "Germany", "/host/flags/4x3/");
    /// assert_eq!(de.code, "de");
    /// assert_eq!(de.img_src, "/host/flags/4x3/de.svg");
    /// ```
    #[must_use]
    pub fn new(code: &str, label: &str, flags_base_path: &str) -> Self {
        let code = code.to_lowercase();
        let img_src = format!("{}/{code}.svg", flags_base_path.trim_end_matches('/'));
        Self {
            code,
            label: label.to_string(),
            img_src,
        }
    }

    /// Returns the flag emoji for this country's code.
    ///
    /// Terminals cannot show the SVG, so rows display the pair of regional
    /// indicator symbols instead. Codes that are not two ASCII letters yield
    /// two spaces so columns stay aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use countrypicker::domain::Country;
    ///
    /// let fr = Country::new("fr", "France", "/flags");
    /// assert_eq!(fr.flag_emoji(), "\u{1F1EB}\u{1F1F7}");
    /// ```
    #[must_use]
    pub fn flag_emoji(&self) -> String {
        if self.code.len() != 2 || !self.code.chars().all(|c| c.is_ascii_alphabetic()) {
            return "  ".to_string();
        }

        self.code
            .chars()
            .filter_map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

/// Signal emitted the first time a country row is materialized.
///
/// Carries what the flag cache needs to preload the image. Also used as the
/// payload of the worker's preload batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagDiscovered {
    pub img_src: String,
    pub code: String,
}

impl From<&Country> for FlagDiscovered {
    fn from(country: &Country) -> Self {
        Self {
            img_src: country.img_src.clone(),
            code: country.code.clone(),
        }
    }
}
