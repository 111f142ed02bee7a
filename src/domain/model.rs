use crate::utils::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for every rendered phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Es,
    En,
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    /// Long month name, `month` is 1-based.
    pub fn month_name(self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Es => MONTHS_ES[idx],
            Locale::En => MONTHS_EN[idx],
        }
    }

    /// Label for the open end of a date range.
    pub fn present(self) -> &'static str {
        match self {
            Locale::Es => "Presente",
            Locale::En => "Present",
        }
    }

    pub fn this_year(self) -> &'static str {
        match self {
            Locale::Es => "Este año",
            Locale::En => "This year",
        }
    }

    pub fn years_ago(self, years: i64) -> String {
        match (self, years) {
            (Locale::Es, 1) => "Hace 1 año".to_string(),
            (Locale::Es, n) => format!("Hace {} años", n),
            (Locale::En, 1) => "1 year ago".to_string(),
            (Locale::En, n) => format!("{} years ago", n),
        }
    }

    pub fn year_word(self, count: i64) -> &'static str {
        match (self, count == 1) {
            (Locale::Es, true) => "año",
            (Locale::Es, false) => "años",
            (Locale::En, true) => "year",
            (Locale::En, false) => "years",
        }
    }

    pub fn month_word(self, count: i64) -> &'static str {
        match (self, count == 1) {
            (Locale::Es, true) => "mes",
            (Locale::Es, false) => "meses",
            (Locale::En, true) => "month",
            (Locale::En, false) => "months",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "es-es" | "spanish" => Ok(Locale::Es),
            "en" | "en-us" | "english" => Ok(Locale::En),
            other => Err(FormatError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: other.to_string(),
                reason: "Unsupported locale. Valid locales: es, en".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Loosely-typed award or certificate entry from a résumé document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardType {
    Award,
    Certificate,
}

impl AwardType {
    pub fn as_str(self) -> &'static str {
        match self {
            AwardType::Award => "Award",
            AwardType::Certificate => "Certificate",
        }
    }

    /// Badge class for this award kind.
    pub fn badge_color(self) -> &'static str {
        crate::core::lookup::award_badge_color(self.as_str())
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Development")]
    InDevelopment,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InDevelopment => "In Development",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProjectStatus::Completed, Locale::Es) => "Completado",
            (ProjectStatus::InDevelopment, Locale::Es) => "En Desarrollo",
            (status, Locale::En) => status.as_str(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "AI/ML")]
    AiMl,
    Mobile,
    Web,
    Software,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::AiMl => "AI/ML",
            ProjectType::Mobile => "Mobile",
            ProjectType::Web => "Web",
            ProjectType::Software => "Software",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProjectType::AiMl, Locale::Es) => "IA/ML",
            (kind, _) => kind.as_str(),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
