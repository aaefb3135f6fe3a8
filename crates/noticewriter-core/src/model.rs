//! Wire types shared with the case-records service.
//!
//! Field names follow the service's JSON (`_id`, camelCase keys, `name_en`/`name_hi`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two languages a notice can be drafted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hi,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Ok(Language::Hi),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected hi or en)")),
        }
    }
}

/// Which content-generation path, if any, populates a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeType {
    #[default]
    Regular,
    Contempt,
    Custom,
}

impl NoticeType {
    pub const ALL: [NoticeType; 3] = [NoticeType::Regular, NoticeType::Contempt, NoticeType::Custom];

    /// Whether this type is linked to a case record (and so goes through
    /// department, sub-department, and case selection).
    pub fn is_case_linked(self) -> bool {
        !matches!(self, NoticeType::Custom)
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoticeType::Regular => "regular",
            NoticeType::Contempt => "contempt",
            NoticeType::Custom => "custom",
        })
    }
}

/// A top-level administrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name_en: String,
    pub name_hi: String,
}

impl Department {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Hi => &self.name_hi,
            Language::En => &self.name_en,
        }
    }
}

/// A unit nested under a [`Department`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDepartment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "departmentId")]
    pub department_id: u32,
    pub name_en: String,
    pub name_hi: String,
}

impl SubDepartment {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Hi => &self.name_hi,
            Language::En => &self.name_en,
        }
    }
}

/// A court case record. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(rename = "_id")]
    pub id: String,
    pub case_number: String,
    /// Petitioner / party name.
    pub name: String,
    /// Stored calendar date, usually `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub filing_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petition_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writ_type: Option<String>,
    /// Owning department id.
    pub department: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_department: Option<SubDepartment>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_date: Option<String>,
}

/// Container returned by the case list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseList {
    #[serde(default)]
    pub cases: Vec<Case>,
}
