//! Subject and body generation for case-linked notices.
//!
//! Pure functions over the selected case, addressee, notice type, and
//! language. Nothing here touches the draft or the clock.

use crate::dates::display_stored_date;
use crate::locale::{ContemptTemplate, RegularTemplate};
use crate::model::{Case, Department, Language, NoticeType, SubDepartment};

/// Generated subject line and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeText {
    pub subject: String,
    pub body: String,
}

/// Generate notice text for `notice_type`.
///
/// Returns `None` for [`NoticeType::Custom`], whose text is always user-authored.
pub fn generate(
    case: &Case,
    department: &Department,
    sub_department: Option<&SubDepartment>,
    notice_type: NoticeType,
    language: Language,
) -> Option<NoticeText> {
    let locale = language.locale();
    match notice_type {
        NoticeType::Regular => Some(regular(
            &locale.regular,
            case,
            department,
            sub_department,
            language,
        )),
        NoticeType::Contempt => Some(contempt(&locale.contempt, case, language)),
        NoticeType::Custom => None,
    }
}

fn regular(
    t: &RegularTemplate,
    case: &Case,
    department: &Department,
    sub_department: Option<&SubDepartment>,
    language: Language,
) -> NoticeText {
    let mut particulars = vec![
        (t.petitioner_name, case.name.clone()),
        (t.petition_number, case.case_number.clone()),
        (t.filing_date, display_stored_date(&case.filing_date, language)),
        (t.department, department.name(language).to_string()),
    ];
    if let Some(sub) = sub_department {
        particulars.push((t.sub_department, sub.name(language).to_string()));
    }

    let list = particulars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| format!("{}. {}: {}", i + 1, label, value))
        .collect::<Vec<_>>()
        .join("\n");

    NoticeText {
        subject: t.subject.wrap(&case.case_number),
        body: paragraphs(&[t.intro, list.as_str(), t.closing[0], t.closing[1]]),
    }
}

fn contempt(t: &ContemptTemplate, case: &Case, language: Language) -> NoticeText {
    let hearing = match case.hearing_date.as_deref() {
        Some(date) if !date.trim().is_empty() => display_stored_date(date, language),
        _ => t.next_hearing.to_string(),
    };
    let opening = t
        .opening
        .wrap(&format!("{}, {}", case.case_number, case.name));
    let hearing = t.hearing.wrap(&hearing);

    NoticeText {
        subject: t.subject.wrap(&case.case_number),
        body: paragraphs(&[opening.as_str(), t.expectation, hearing.as_str(), t.closing]),
    }
}

/// Join paragraphs with one blank line between them.
fn paragraphs(parts: &[&str]) -> String {
    parts.join("\n\n")
}
