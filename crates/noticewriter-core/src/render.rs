//! Plain-text print layout for a finished draft.
//!
//! Produces exactly the block that goes to the printer: header, optional
//! urgency marker, date and letter number, subject, addressee, body, closing
//! boilerplate, and the signature block. No interactive text is included.

use crate::draft::Draft;
use crate::model::{Language, NoticeType};

pub const DEFAULT_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintLayout {
    /// Line width used for centering and right alignment.
    pub width: usize,
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl PrintLayout {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render `draft` with the fixed text of `language`.
    pub fn render(&self, draft: &Draft, language: Language) -> String {
        let page = &language.locale().page;
        let mut out: Vec<String> = Vec::new();

        out.push(self.center(page.organization));
        if draft.notice_type == NoticeType::Contempt {
            out.push(self.center(page.urgency));
        }
        out.push(String::new());

        let date = format!("{} {}", page.date_label, draft.date);
        let letter = format!("{} {}", page.letter_label, draft.letter_number);
        out.extend(self.spread(&date, &letter));
        out.push(String::new());

        out.push(format!("{} {}", page.subject_label, draft.subject));
        out.push(String::new());

        if let Some(department) = &draft.department {
            out.push(department.name(language).to_string());
            if let Some(sub) = &draft.sub_department {
                out.push(sub.name(language).to_string());
            }
            out.push(String::new());
        }

        out.extend(draft.body.lines().map(|line| line.trim_end().to_string()));
        out.push(String::new());

        out.push(page.number_and_date.to_string());
        out.push(page.copy_to.to_string());
        out.push(String::new());
        out.push(String::new());

        out.push(self.right(page.signature));
        out.push(String::new());
        out.push(self.right(&format!("({})", draft.signatory)));
        out.push(self.right(&draft.designation));
        out.push(self.right(page.place));

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    fn center(&self, text: &str) -> String {
        let pad = self.width.saturating_sub(width_of(text)) / 2;
        format!("{}{}", " ".repeat(pad), text)
    }

    fn right(&self, text: &str) -> String {
        let pad = self.width.saturating_sub(width_of(text));
        format!("{}{}", " ".repeat(pad), text)
    }

    /// `left` and `right` on one line, or two lines when they do not fit.
    fn spread(&self, left: &str, right: &str) -> Vec<String> {
        let used = width_of(left) + width_of(right);
        if used < self.width {
            vec![format!("{}{}{}", left, " ".repeat(self.width - used), right)]
        } else {
            vec![left.to_string(), self.right(right)]
        }
    }
}

/// Render with the default layout.
pub fn render_notice(draft: &Draft, language: Language) -> String {
    PrintLayout::default().render(draft, language)
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}
