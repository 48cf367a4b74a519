use crate::imports::*;

/// Closed set of festival identifiers, plus the default sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Festival {
    Default,
    NewYear,
    Pongal,
    RepublicDay,
    IndependenceDay,
    AyudhaPujai,
    Diwali,
    Christmas,
}

pub const SUPPORTED_FESTIVALS: &[Festival] = &[
    Festival::Default,
    Festival::NewYear,
    Festival::Pongal,
    Festival::RepublicDay,
    Festival::IndependenceDay,
    Festival::AyudhaPujai,
    Festival::Diwali,
    Festival::Christmas,
];

impl Default for Festival {
    fn default() -> Self {
        Self::Default
    }
}

impl Festival {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NewYear => "newyear",
            Self::Pongal => "pongal",
            Self::RepublicDay => "republic-day",
            Self::IndependenceDay => "independence-day",
            Self::AyudhaPujai => "ayudha-pujai",
            Self::Diwali => "diwali",
            Self::Christmas => "christmas",
        }
    }

    /// Themes shipping both a light and a dark stylesheet.
    pub fn dual_mode(&self) -> bool {
        matches!(self, Self::Diwali)
    }

    /// Themes with their own script on top of the stylesheets.
    pub fn has_script(&self) -> bool {
        matches!(self, Self::Diwali)
    }
}

impl TryFrom<&str> for Festival {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let festival = match value {
            "default" => Self::Default,
            "newyear" => Self::NewYear,
            "pongal" => Self::Pongal,
            "republic-day" => Self::RepublicDay,
            "independence-day" => Self::IndependenceDay,
            "ayudha-pujai" => Self::AyudhaPujai,
            "diwali" => Self::Diwali,
            "christmas" => Self::Christmas,
            _ => return Err(()),
        };
        assert_eq!(
            festival.as_str(),
            value,
            "resulting festival's id must match with the provided value"
        );
        Ok(festival)
    }
}

impl std::fmt::Display for Festival {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Light
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The synced theme record.
///
/// `theme` stays a plain string on the wire: the cache and the channel pass
/// values through untouched, validation against [`Festival`] belongs to the
/// consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: String,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(
        rename = "changedBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub changed_by: Option<String>,
}

impl ThemeConfig {
    pub fn new(festival: Festival, mode: Mode) -> Self {
        Self {
            theme: festival.as_str().to_owned(),
            mode,
            timestamp: None,
            changed_by: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new(Festival::Default, Mode::Light)
    }
}

/// Admin-initiated theme change payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeChangeForm {
    pub theme: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub changed_by: Option<String>,
}
