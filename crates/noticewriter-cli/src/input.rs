//! Command-line parsing for the interactive session.

use noticewriter_core::{DraftField, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based index into the list shown on the current step.
    Select(usize),
    Skip,
    Back,
    Reset,
    Print,
    Language(Language),
    /// Edit a field, with the new value inline or read afterwards.
    Edit {
        field: DraftField,
        value: Option<String>,
    },
    View,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Ok(n) = line.parse::<usize>() {
        if n == 0 {
            return Err("choices start at 1".into());
        }
        return Ok(Some(Command::Select(n)));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "s" | "skip" => Command::Skip,
        "b" | "back" => Command::Back,
        "r" | "reset" | "new" => Command::Reset,
        "p" | "print" => Command::Print,
        "v" | "view" => Command::View,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "l" | "lang" | "language" => {
            if rest.is_empty() {
                return Err("usage: l hi|en".into());
            }
            Command::Language(rest.parse()?)
        }
        "e" | "edit" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, Some(value.trim().to_string())),
                None => (rest, None),
            };
            if field.is_empty() {
                return Err("usage: e <field> [value]".into());
            }
            Command::Edit {
                field: field.parse()?,
                value,
            }
        }
        other => return Err(format!("unknown command '{other}' (h for help)")),
    };

    if !rest.is_empty() && !matches!(command, Command::Language(_) | Command::Edit { .. }) {
        return Err(format!("'{word}' takes no arguments"));
    }
    Ok(Some(command))
}
