//! Terminal views for each workflow step.
//!
//! Views are built as strings so the session can print them and tests can
//! inspect them. All interface text follows the session language.

use std::fmt::Write;

use noticewriter_core::dates::display_stored_date;
use noticewriter_core::workflow::ActionKind;
use noticewriter_core::{CaseSource, Controller, DraftField, Language, Listing, NoticeType, Step};

const LABEL_WIDTH: usize = 22;

pub struct Labels {
    pub title: &'static str,
    pub language: &'static str,
    pub language_name: &'static str,
    pub select_type: &'static str,
    pub regular: &'static str,
    pub contempt: &'static str,
    pub custom: &'static str,
    pub select_department: &'static str,
    pub select_sub_department: &'static str,
    pub all_cases: &'static str,
    pub select_case: &'static str,
    pub edit_notice: &'static str,
    pub create_custom: &'static str,
    pub no_departments: &'static str,
    pub no_sub_departments: &'static str,
    pub no_cases: &'static str,
    pub fetch_failed: &'static str,
    pub case_number: &'static str,
    pub name: &'static str,
    pub filing_date: &'static str,
    pub status: &'static str,
    pub letter_number: &'static str,
    pub date: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
    pub signatory: &'static str,
    pub designation: &'static str,
    pub commands: &'static str,
    pub choose: &'static str,
    pub skip: &'static str,
    pub back: &'static str,
    pub new_notice: &'static str,
    pub print: &'static str,
    pub edit: &'static str,
    pub view: &'static str,
    pub switch_language: &'static str,
    pub quit: &'static str,
    pub enter_value: &'static str,
    pub enter_body: &'static str,
    pub printed: &'static str,
}

static HINDI: Labels = Labels {
    title: "न्यायालयीन नोटिस लेखक",
    language: "भाषा",
    language_name: "हिंदी",
    select_type: "नोटिस का प्रकार चुनें:",
    regular: "नियमित नोटिस",
    contempt: "अवमानना नोटिस",
    custom: "कस्टम नोटिस",
    select_department: "विभाग चुनें:",
    select_sub_department: "उप-विभाग चुनें:",
    all_cases: "सभी केसेस देखें (बिना उप-विभाग)",
    select_case: "केस चुनें:",
    edit_notice: "नोटिस संपादित करें:",
    create_custom: "कस्टम नोटिस बनाएं:",
    no_departments: "कोई विभाग नहीं मिला",
    no_sub_departments: "कोई उप-विभाग नहीं मिला",
    no_cases: "कोई केस नहीं मिला",
    fetch_failed: "डेटा लोड नहीं हो सका, कृपया पुनः प्रयास करें",
    case_number: "केस नंबर:",
    name: "नाम:",
    filing_date: "दाखिल दिनांक:",
    status: "स्थिति:",
    letter_number: "पत्र संख्या:",
    date: "दिनांक:",
    subject: "विषय:",
    content: "सामग्री:",
    signatory: "हस्ताक्षरकर्ता:",
    designation: "पदनाम:",
    commands: "आदेश",
    choose: "चुनें",
    skip: "उप-विभाग छोड़ें",
    back: "वापस",
    new_notice: "नया नोटिस",
    print: "प्रिंट करें",
    edit: "संपादित करें",
    view: "देखें",
    switch_language: "भाषा बदलें",
    quit: "बाहर निकलें",
    enter_value: "नया मान दर्ज करें:",
    enter_body: "नोटिस की सामग्री लिखें, समाप्त करने के लिए अकेली पंक्ति में '.' लिखें:",
    printed: "नोटिस प्रिंट किया गया",
};

static ENGLISH: Labels = Labels {
    title: "Court Notice Writer",
    language: "Language",
    language_name: "English",
    select_type: "Select Notice Type:",
    regular: "Regular Notice",
    contempt: "Contempt Notice",
    custom: "Custom Notice",
    select_department: "Select Department:",
    select_sub_department: "Select Sub-Department:",
    all_cases: "View All Cases (Without Sub-Department)",
    select_case: "Select Case:",
    edit_notice: "Edit Notice:",
    create_custom: "Create Custom Notice:",
    no_departments: "No departments found",
    no_sub_departments: "No sub-departments found",
    no_cases: "No cases found",
    fetch_failed: "Could not load data, please try again",
    case_number: "Case Number:",
    name: "Name:",
    filing_date: "Filing Date:",
    status: "Status:",
    letter_number: "Letter Number:",
    date: "Date:",
    subject: "Subject:",
    content: "Content:",
    signatory: "Signatory:",
    designation: "Designation:",
    commands: "Commands",
    choose: "choose",
    skip: "skip sub-department",
    back: "back",
    new_notice: "new notice",
    print: "print notice",
    edit: "edit",
    view: "view",
    switch_language: "switch language",
    quit: "quit",
    enter_value: "Enter the new value:",
    enter_body: "Write the notice content, end with a lone '.' line:",
    printed: "Notice printed",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Hi => &HINDI,
        Language::En => &ENGLISH,
    }
}

impl Labels {
    pub fn notice_type(&self, notice_type: NoticeType) -> &'static str {
        match notice_type {
            NoticeType::Regular => self.regular,
            NoticeType::Contempt => self.contempt,
            NoticeType::Custom => self.custom,
        }
    }

    pub fn field(&self, field: DraftField) -> &'static str {
        match field {
            DraftField::Date => self.date,
            DraftField::LetterNumber => self.letter_number,
            DraftField::Subject => self.subject,
            DraftField::Body => self.content,
            DraftField::Signatory => self.signatory,
            DraftField::Designation => self.designation,
        }
    }
}

/// Full view of the controller's current step.
pub fn step_view<S: CaseSource>(controller: &Controller<S>) -> String {
    let language = controller.language();
    let l = labels(language);
    let mut out = String::new();

    let _ = writeln!(out, "=== {} ===", l.title);
    let _ = writeln!(out, "{}: {}", l.language, l.language_name);
    out.push('\n');

    match controller.step() {
        Step::TypeSelect => {
            let _ = writeln!(out, "{}", l.select_type);
            for (i, notice_type) in NoticeType::ALL.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, l.notice_type(*notice_type));
            }
        }
        Step::DepartmentSelect => {
            let _ = writeln!(out, "{}", l.select_department);
            let names: Vec<&str> = controller
                .departments()
                .items()
                .iter()
                .map(|d| d.name(language))
                .collect();
            list_or_status(&mut out, controller.departments(), &names, l.no_departments, l);
        }
        Step::SubDepartmentSelect => {
            let _ = writeln!(out, "{}", l.select_sub_department);
            let names: Vec<&str> = controller
                .sub_departments()
                .items()
                .iter()
                .map(|s| s.name(language))
                .collect();
            list_or_status(
                &mut out,
                controller.sub_departments(),
                &names,
                l.no_sub_departments,
                l,
            );
            let _ = writeln!(out, "  s. {}", l.all_cases);
        }
        Step::CaseSelect => {
            let _ = writeln!(out, "{}", l.select_case);
            match controller.cases() {
                Listing::Ready(cases) if !cases.is_empty() => {
                    for (i, case) in cases.iter().enumerate() {
                        let _ = writeln!(out, "  {}. {} {}", i + 1, l.case_number, case.case_number);
                        let _ = writeln!(out, "     {} {}", l.name, case.name);
                        let _ = writeln!(
                            out,
                            "     {} {}",
                            l.filing_date,
                            display_stored_date(&case.filing_date, language)
                        );
                        let _ = writeln!(out, "     {} {}", l.status, case.status);
                    }
                }
                listing => status_line(&mut out, listing, l.no_cases, l),
            }
        }
        Step::ReviewEdit | Step::CustomEdit => {
            let heading = if controller.step() == Step::CustomEdit {
                l.create_custom
            } else {
                l.edit_notice
            };
            let _ = writeln!(out, "{heading}");
            out.push_str(&draft_fields(controller, l));
        }
    }

    out.push('\n');
    out.push_str(&command_hint(controller.step(), l));
    out
}

fn list_or_status<T>(
    out: &mut String,
    listing: &Listing<T>,
    names: &[&str],
    empty: &str,
    l: &Labels,
) {
    if names.is_empty() {
        status_line(out, listing, empty, l);
        return;
    }
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, name);
    }
}

fn status_line<T>(out: &mut String, listing: &Listing<T>, empty: &str, l: &Labels) {
    let text = match listing {
        Listing::Failed(_) => l.fetch_failed,
        Listing::Idle | Listing::Ready(_) => empty,
    };
    let _ = writeln!(out, "  {text}");
}

fn draft_fields<S: CaseSource>(controller: &Controller<S>, l: &Labels) -> String {
    let draft = controller.draft();
    let mut out = String::new();
    for field in DraftField::ALL {
        let label = format!("{} [{}]", l.field(field), field.key());
        let value = draft.field(field);
        if field.is_multiline() {
            let _ = writeln!(out, "  {label}");
            for line in value.lines() {
                let _ = writeln!(out, "    {line}");
            }
        } else {
            let _ = writeln!(out, "  {label:<LABEL_WIDTH$} {value}");
        }
    }
    out
}

/// One line listing the commands the step accepts.
pub fn command_hint(step: Step, l: &Labels) -> String {
    let mut parts: Vec<String> = Vec::new();
    for kind in step.actions() {
        let part = match kind {
            ActionKind::ChooseCaseLinkedType
            | ActionKind::SelectDepartment
            | ActionKind::SelectSubDepartment
            | ActionKind::SelectCase => format!("<n> {}", l.choose),
            ActionKind::ChooseCustomType => continue,
            ActionKind::SkipSubDepartment => format!("s {}", l.skip),
            ActionKind::Edit => format!("e <field> {}", l.edit),
            ActionKind::Print => format!("p {}  v {}", l.print, l.view),
            ActionKind::Back => format!("b {}", l.back),
            ActionKind::SetLanguage => format!("l hi|en {}", l.switch_language),
            ActionKind::Reset => format!("r {}", l.new_notice),
        };
        if !parts.contains(&part) {
            parts.push(part);
        }
    }
    parts.push(format!("q {}", l.quit));
    format!("{}: {}\n", l.commands, parts.join(" | "))
}
