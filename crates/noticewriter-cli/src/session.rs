//! Interactive drafting loop: read a command, dispatch it, show the result.
//!
//! Views, prompts and messages go to the session's `ui` writer (stderr in the
//! binary). Only the printer ever writes a rendered notice, so stdout carries
//! nothing but printed notices.

use std::io::Write;

use noticewriter_core::workflow::ActionKind;
use noticewriter_core::{
    Action, CaseSource, Controller, DraftField, NoticeType, Outcome, PrintLayout, Step,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

use crate::display::{command_hint, labels, step_view};
use crate::input::{self, Command};
use crate::print::Printer;

pub struct Session<S, W> {
    controller: Controller<S>,
    layout: PrintLayout,
    printer: Printer,
    ui: W,
}

impl<S: CaseSource, W: Write> Session<S, W> {
    pub fn new(controller: Controller<S>, layout: PrintLayout, printer: Printer, ui: W) -> Self {
        Self {
            controller,
            layout,
            printer,
            ui,
        }
    }

    /// Run until `q` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> anyhow::Result<()> {
        let mut lines = input.lines();
        self.controller.load_departments().await;
        self.show()?;

        loop {
            write!(self.ui, "> ")?;
            self.ui.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match input::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.handle(command, &mut lines).await?,
                Err(msg) => writeln!(self.ui, "! {msg}")?,
            }
        }
        Ok(())
    }

    async fn handle<R: AsyncBufRead + Unpin>(
        &mut self,
        command: Command,
        lines: &mut Lines<R>,
    ) -> anyhow::Result<()> {
        let language = self.controller.language();
        let l = labels(language);

        let action = match command {
            Command::Help => {
                write!(self.ui, "{}", command_hint(self.controller.step(), l))?;
                return Ok(());
            }
            Command::View => {
                let preview = self.layout.render(self.controller.draft(), language);
                write!(self.ui, "{preview}")?;
                return Ok(());
            }
            Command::Select(n) => match self.selection(n) {
                Some(action) => action,
                None => {
                    writeln!(self.ui, "! {n}?")?;
                    return Ok(());
                }
            },
            Command::Edit { field, value } => {
                let accepts_edit = self.controller.step().actions().contains(&ActionKind::Edit);
                let value = match value {
                    Some(value) => value,
                    None if accepts_edit => {
                        let hint = if field.is_multiline() {
                            l.enter_body
                        } else {
                            l.enter_value
                        };
                        writeln!(self.ui, "{} {}", l.field(field), hint)?;
                        read_value(lines, field).await?
                    }
                    None => String::new(),
                };
                Action::Edit(field, value)
            }
            Command::Skip => Action::SkipSubDepartment,
            Command::Back => Action::Back,
            Command::Reset => Action::Reset,
            Command::Print => Action::Print,
            Command::Language(language) => Action::SetLanguage(language),
            Command::Quit => return Ok(()),
        };

        match self.controller.dispatch(action).await {
            Ok(Outcome::Moved(_)) => self.show()?,
            Ok(Outcome::FetchFailed(_)) => {
                writeln!(self.ui, "! {}", labels(self.controller.language()).fetch_failed)?
            }
            Ok(Outcome::Print(draft)) => {
                let language = self.controller.language();
                let text = self.layout.render(&draft, language);
                match self.printer.print(&text).await {
                    Ok(()) => writeln!(self.ui, "{}", labels(language).printed)?,
                    Err(e) => {
                        warn!(error = %e, "print failed");
                        writeln!(self.ui, "! {e:#}")?;
                    }
                }
            }
            Err(e) => writeln!(self.ui, "! {e}")?,
        }
        Ok(())
    }

    /// Action for the `n`th (1-based) entry listed on the current step.
    fn selection(&self, n: usize) -> Option<Action> {
        let i = n.checked_sub(1)?;
        match self.controller.step() {
            Step::TypeSelect => NoticeType::ALL.get(i).copied().map(Action::ChooseType),
            Step::DepartmentSelect => self
                .controller
                .departments()
                .items()
                .get(i)
                .cloned()
                .map(Action::SelectDepartment),
            Step::SubDepartmentSelect => self
                .controller
                .sub_departments()
                .items()
                .get(i)
                .cloned()
                .map(Action::SelectSubDepartment),
            Step::CaseSelect => self
                .controller
                .cases()
                .items()
                .get(i)
                .cloned()
                .map(Action::SelectCase),
            Step::ReviewEdit | Step::CustomEdit => None,
        }
    }

    fn show(&mut self) -> std::io::Result<()> {
        write!(self.ui, "\n{}", step_view(&self.controller))
    }
}

/// One line, or for the body every line up to a lone `.`.
async fn read_value<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
    field: DraftField,
) -> std::io::Result<String> {
    if !field.is_multiline() {
        return Ok(lines.next_line().await?.unwrap_or_default().trim().to_string());
    }
    let mut body = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "." {
            break;
        }
        body.push(line.trim_end().to_string());
    }
    Ok(body.join("\n"))
}
