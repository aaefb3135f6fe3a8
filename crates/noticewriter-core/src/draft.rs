//! The in-progress notice.
//!
//! A [`Draft`] is replaced, never mutated in place: every `with_*` method
//! consumes the old snapshot and returns the next one.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::dates::draft_date;
use crate::generate::NoticeText;
use crate::model::{Case, Department, Language, NoticeType, SubDepartment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub notice_type: NoticeType,
    pub language: Language,
    pub department: Option<Department>,
    pub sub_department: Option<SubDepartment>,
    pub case: Option<Case>,
    pub date: String,
    pub letter_number: String,
    pub subject: String,
    pub body: String,
    pub signatory: String,
    pub designation: String,
}

/// The free-text fields a user can edit on the review and custom steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Date,
    LetterNumber,
    Subject,
    Body,
    Signatory,
    Designation,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::LetterNumber,
        DraftField::Date,
        DraftField::Subject,
        DraftField::Body,
        DraftField::Signatory,
        DraftField::Designation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DraftField::Date => "date",
            DraftField::LetterNumber => "letter",
            DraftField::Subject => "subject",
            DraftField::Body => "body",
            DraftField::Signatory => "signatory",
            DraftField::Designation => "designation",
        }
    }

    /// Whether the field holds multi-line text.
    pub fn is_multiline(self) -> bool {
        matches!(self, DraftField::Body)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(DraftField::Date),
            "letter" | "letter-number" | "letter_number" => Ok(DraftField::LetterNumber),
            "subject" => Ok(DraftField::Subject),
            "body" | "content" => Ok(DraftField::Body),
            "signatory" => Ok(DraftField::Signatory),
            "designation" => Ok(DraftField::Designation),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

impl Draft {
    /// A fresh draft: today's date, everything else empty.
    pub fn new(language: Language, today: NaiveDate) -> Self {
        Self {
            notice_type: NoticeType::default(),
            language,
            department: None,
            sub_department: None,
            case: None,
            date: draft_date(today),
            letter_number: String::new(),
            subject: String::new(),
            body: String::new(),
            signatory: String::new(),
            designation: String::new(),
        }
    }

    pub fn with_notice_type(self, notice_type: NoticeType) -> Self {
        Self {
            notice_type,
            ..self
        }
    }

    /// Switch language. Already generated text is kept as-is.
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    /// Record the addressee department, dropping any narrower selection made
    /// under a previous department.
    pub fn with_department(self, department: Department) -> Self {
        Self {
            department: Some(department),
            sub_department: None,
            case: None,
            ..self
        }
    }

    /// Record (or clear) the sub-department, dropping any case chosen under
    /// the previous scope.
    pub fn with_sub_department(self, sub_department: Option<SubDepartment>) -> Self {
        Self {
            sub_department,
            case: None,
            ..self
        }
    }

    /// Attach the selected case together with its generated text, letter
    /// number, and the language's fixed signatory and designation.
    pub fn with_case(self, case: Case, text: NoticeText, letter_number: String) -> Self {
        let locale = self.language.locale();
        Self {
            case: Some(case),
            subject: text.subject,
            body: text.body,
            letter_number,
            signatory: locale.signatory.to_string(),
            designation: locale.designation.to_string(),
            ..self
        }
    }

    pub fn with_field(self, field: DraftField, value: String) -> Self {
        match field {
            DraftField::Date => Self { date: value, ..self },
            DraftField::LetterNumber => Self {
                letter_number: value,
                ..self
            },
            DraftField::Subject => Self {
                subject: value,
                ..self
            },
            DraftField::Body => Self { body: value, ..self },
            DraftField::Signatory => Self {
                signatory: value,
                ..self
            },
            DraftField::Designation => Self {
                designation: value,
                ..self
            },
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::LetterNumber => &self.letter_number,
            DraftField::Subject => &self.subject,
            DraftField::Body => &self.body,
            DraftField::Signatory => &self.signatory,
            DraftField::Designation => &self.designation,
        }
    }
}
