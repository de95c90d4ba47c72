//! PlayStation Store region definitions.
//!
//! This module provides the [`Region`] enum, the store locale sent with every
//! request in the `x-psn-store-locale-override` header.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// PlayStation Store region (store locale).
///
/// The store serves prices, availability and localized text per locale. This
/// enum lists commonly used locales, plus a `Custom` variant for any other
/// `language-country` pair the store accepts.
///
/// # Example
///
/// ```rust
/// use psn_store_api::Region;
///
/// let region: Region = "ru-ru".parse().unwrap();
/// assert_eq!(region, Region::Russia);
/// assert_eq!(Region::UnitedStates.to_string(), "en-us");
///
/// // Lookup by variant name
/// assert_eq!(Region::from_name("TURKEY_ENGLISH"), Some(Region::TurkeyEnglish));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States (`en-us`).
    UnitedStates,
    /// United Kingdom (`en-gb`).
    UnitedKingdom,
    /// Canada, English (`en-ca`).
    CanadaEnglish,
    /// Australia (`en-au`).
    Australia,
    /// Germany (`de-de`).
    Germany,
    /// France (`fr-fr`).
    France,
    /// Spain (`es-es`).
    Spain,
    /// Italy (`it-it`).
    Italy,
    /// Japan (`ja-jp`).
    Japan,
    /// Poland (`pl-pl`).
    Poland,
    /// Brazil (`pt-br`).
    Brazil,
    /// Russia (`ru-ru`).
    Russia,
    /// Ukraine, Russian (`ru-ua`).
    UkraineRussian,
    /// Ukraine, Ukrainian (`uk-ua`).
    Ukraine,
    /// Turkey, English (`en-tr`).
    TurkeyEnglish,
    /// Turkey, Turkish (`tr-tr`).
    Turkey,
    /// Any other store locale.
    Custom(String),
}

impl Region {
    /// Returns the locale string for this region (e.g. `en-us`).
    #[must_use]
    pub fn locale(&self) -> &str {
        match self {
            Self::UnitedStates => "en-us",
            Self::UnitedKingdom => "en-gb",
            Self::CanadaEnglish => "en-ca",
            Self::Australia => "en-au",
            Self::Germany => "de-de",
            Self::France => "fr-fr",
            Self::Spain => "es-es",
            Self::Italy => "it-it",
            Self::Japan => "ja-jp",
            Self::Poland => "pl-pl",
            Self::Brazil => "pt-br",
            Self::Russia => "ru-ru",
            Self::UkraineRussian => "ru-ua",
            Self::Ukraine => "uk-ua",
            Self::TurkeyEnglish => "en-tr",
            Self::Turkey => "tr-tr",
            Self::Custom(s) => s,
        }
    }

    /// Looks up a known region by its upper snake case name
    /// (e.g. `UNITED_STATES`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let region = match name {
            "UNITED_STATES" => Self::UnitedStates,
            "UNITED_KINGDOM" => Self::UnitedKingdom,
            "CANADA_ENGLISH" => Self::CanadaEnglish,
            "AUSTRALIA" => Self::Australia,
            "GERMANY" => Self::Germany,
            "FRANCE" => Self::France,
            "SPAIN" => Self::Spain,
            "ITALY" => Self::Italy,
            "JAPAN" => Self::Japan,
            "POLAND" => Self::Poland,
            "BRAZIL" => Self::Brazil,
            "RUSSIA" => Self::Russia,
            "UKRAINE_RUSSIAN" => Self::UkraineRussian,
            "UKRAINE" => Self::Ukraine,
            "TURKEY_ENGLISH" => Self::TurkeyEnglish,
            "TURKEY" => Self::Turkey,
            _ => return None,
        };
        Some(region)
    }

    fn is_valid_locale_format(s: &str) -> bool {
        // Format: ll-cc
        let mut parts = s.split('-');
        let (Some(language), Some(country), None) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        language.len() == 2
            && country.len() == 2
            && language.chars().all(|c| c.is_ascii_lowercase())
            && country.chars().all(|c| c.is_ascii_lowercase())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.locale())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        let known = [
            Self::UnitedStates,
            Self::UnitedKingdom,
            Self::CanadaEnglish,
            Self::Australia,
            Self::Germany,
            Self::France,
            Self::Spain,
            Self::Italy,
            Self::Japan,
            Self::Poland,
            Self::Brazil,
            Self::Russia,
            Self::UkraineRussian,
            Self::Ukraine,
            Self::TurkeyEnglish,
            Self::Turkey,
        ];

        if let Some(region) = known.into_iter().find(|r| r.locale() == s) {
            return Ok(region);
        }

        if Self::is_valid_locale_format(&s) {
            Ok(Self::Custom(s))
        } else {
            Err(ConfigError::InvalidRegion { region: s })
        }
    }
}
