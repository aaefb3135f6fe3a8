//! The drafting state machine.
//!
//! Steps are named states and every move is a row in [`TRANSITIONS`], keyed on
//! (current step, action kind). [`Workflow::apply`] is pure: it returns the
//! next workflow value and, when the move needs the outside world, an
//! [`Effect`] for the controller to run before committing.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::dates;
use crate::draft::{Draft, DraftField};
use crate::error::WorkflowError;
use crate::generate::generate;
use crate::letter::{draw_serial, letter_number};
use crate::model::{Case, Department, Language, NoticeType, SubDepartment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    TypeSelect,
    DepartmentSelect,
    SubDepartmentSelect,
    CaseSelect,
    ReviewEdit,
    CustomEdit,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::TypeSelect => "type-select",
            Step::DepartmentSelect => "department-select",
            Step::SubDepartmentSelect => "sub-department-select",
            Step::CaseSelect => "case-select",
            Step::ReviewEdit => "review-edit",
            Step::CustomEdit => "custom-edit",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChooseType(NoticeType),
    SelectDepartment(Department),
    SelectSubDepartment(SubDepartment),
    SkipSubDepartment,
    SelectCase(Case),
    Edit(DraftField, String),
    SetLanguage(Language),
    Print,
    Back,
    Reset,
}

/// Transition-table key for an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ChooseCaseLinkedType,
    ChooseCustomType,
    SelectDepartment,
    SelectSubDepartment,
    SkipSubDepartment,
    SelectCase,
    Edit,
    SetLanguage,
    Print,
    Back,
    Reset,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::ChooseCaseLinkedType => "choose case-linked notice type",
            ActionKind::ChooseCustomType => "choose custom notice type",
            ActionKind::SelectDepartment => "select department",
            ActionKind::SelectSubDepartment => "select sub-department",
            ActionKind::SkipSubDepartment => "skip sub-department",
            ActionKind::SelectCase => "select case",
            ActionKind::Edit => "edit",
            ActionKind::SetLanguage => "set language",
            ActionKind::Print => "print",
            ActionKind::Back => "back",
            ActionKind::Reset => "reset",
        })
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ChooseType(t) if t.is_case_linked() => ActionKind::ChooseCaseLinkedType,
            Action::ChooseType(_) => ActionKind::ChooseCustomType,
            Action::SelectDepartment(_) => ActionKind::SelectDepartment,
            Action::SelectSubDepartment(_) => ActionKind::SelectSubDepartment,
            Action::SkipSubDepartment => ActionKind::SkipSubDepartment,
            Action::SelectCase(_) => ActionKind::SelectCase,
            Action::Edit(..) => ActionKind::Edit,
            Action::SetLanguage(_) => ActionKind::SetLanguage,
            Action::Print => ActionKind::Print,
            Action::Back => ActionKind::Back,
            Action::Reset => ActionKind::Reset,
        }
    }
}

/// Step-specific moves. [`ActionKind::SetLanguage`] (stay) and
/// [`ActionKind::Reset`] (to [`Step::TypeSelect`]) are accepted on every step.
pub const TRANSITIONS: &[(Step, ActionKind, Step)] = &[
    (Step::TypeSelect, ActionKind::ChooseCaseLinkedType, Step::DepartmentSelect),
    (Step::TypeSelect, ActionKind::ChooseCustomType, Step::CustomEdit),
    (Step::DepartmentSelect, ActionKind::SelectDepartment, Step::SubDepartmentSelect),
    (Step::DepartmentSelect, ActionKind::Back, Step::TypeSelect),
    (Step::SubDepartmentSelect, ActionKind::SelectSubDepartment, Step::CaseSelect),
    (Step::SubDepartmentSelect, ActionKind::SkipSubDepartment, Step::CaseSelect),
    (Step::SubDepartmentSelect, ActionKind::Back, Step::DepartmentSelect),
    (Step::CaseSelect, ActionKind::SelectCase, Step::ReviewEdit),
    (Step::CaseSelect, ActionKind::Back, Step::SubDepartmentSelect),
    (Step::ReviewEdit, ActionKind::Edit, Step::ReviewEdit),
    (Step::ReviewEdit, ActionKind::Print, Step::ReviewEdit),
    (Step::ReviewEdit, ActionKind::Back, Step::CaseSelect),
    (Step::CustomEdit, ActionKind::Edit, Step::CustomEdit),
    (Step::CustomEdit, ActionKind::Print, Step::CustomEdit),
    (Step::CustomEdit, ActionKind::Back, Step::TypeSelect),
];

/// Look up the step reached by `kind` from `step`.
pub fn route(step: Step, kind: ActionKind) -> Option<Step> {
    match kind {
        ActionKind::SetLanguage => Some(step),
        ActionKind::Reset => Some(Step::TypeSelect),
        _ => TRANSITIONS
            .iter()
            .find(|(from, k, _)| *from == step && *k == kind)
            .map(|(_, _, to)| *to),
    }
}

impl Step {
    /// Action kinds accepted on this step, in table order.
    pub fn actions(self) -> Vec<ActionKind> {
        let mut kinds: Vec<ActionKind> = TRANSITIONS
            .iter()
            .filter(|(from, _, _)| *from == self)
            .map(|(_, kind, _)| *kind)
            .collect();
        kinds.push(ActionKind::SetLanguage);
        kinds.push(ActionKind::Reset);
        kinds
    }
}

/// Work the controller must do for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the sub-departments of a department. Commit only on success.
    FetchSubDepartments { department_id: u32 },
    /// Load cases for a department, optionally narrowed to one sub-department.
    /// Commit only on success.
    FetchCases {
        department_id: u32,
        sub_department_id: Option<String>,
    },
    /// Hand this snapshot to the renderer. No state change.
    Print(Draft),
    /// A new workflow began; reference lists start over.
    Restart,
}

/// Per-transition inputs that would otherwise make [`Workflow::apply`] impure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub today: NaiveDate,
    /// Letter-number serial, used only when a case is selected.
    pub serial: u16,
}

impl Stamp {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            today: dates::today(),
            serial: draw_serial(rng),
        }
    }
}

/// Result of a successful [`Workflow::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub workflow: Workflow,
    pub effect: Option<Effect>,
}

/// Current step plus the draft snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    step: Step,
    draft: Draft,
}

impl Workflow {
    pub fn new(language: Language, today: NaiveDate) -> Self {
        Self {
            step: Step::TypeSelect,
            draft: Draft::new(language, today),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn language(&self) -> Language {
        self.draft.language
    }

    /// Compute the next workflow for `action`. `self` is never modified.
    pub fn apply(&self, action: Action, stamp: Stamp) -> Result<Transition, WorkflowError> {
        let kind = action.kind();
        let next = route(self.step, kind).ok_or(WorkflowError::InvalidTransition {
            step: self.step,
            action: kind,
        })?;

        let draft = self.draft.clone();
        let (draft, effect) = match action {
            Action::ChooseType(notice_type) => (draft.with_notice_type(notice_type), None),
            Action::SelectDepartment(department) => {
                let department_id = department.id;
                (
                    draft.with_department(department),
                    Some(Effect::FetchSubDepartments { department_id }),
                )
            }
            Action::SelectSubDepartment(sub) => {
                let department = self.selected_department()?;
                if sub.department_id != department.id {
                    return Err(WorkflowError::SubDepartmentMismatch {
                        sub_department: sub.id,
                        owner: sub.department_id,
                        department: department.id,
                    });
                }
                let effect = Effect::FetchCases {
                    department_id: department.id,
                    sub_department_id: Some(sub.id.clone()),
                };
                (draft.with_sub_department(Some(sub)), Some(effect))
            }
            Action::SkipSubDepartment => {
                let department_id = self.selected_department()?.id;
                let effect = Effect::FetchCases {
                    department_id,
                    sub_department_id: None,
                };
                (draft.with_sub_department(None), Some(effect))
            }
            Action::SelectCase(case) => {
                let department = self.selected_department()?;
                if case.department != department.id {
                    return Err(WorkflowError::CaseMismatch {
                        case_number: case.case_number,
                        owner: case.department,
                        department: department.id,
                    });
                }
                // Only case-linked types route to case selection, and those always generate.
                let Some(text) = generate(
                    &case,
                    department,
                    draft.sub_department.as_ref(),
                    draft.notice_type,
                    draft.language,
                ) else {
                    return Err(WorkflowError::InvalidTransition {
                        step: self.step,
                        action: kind,
                    });
                };
                let number = letter_number(draft.notice_type, stamp.serial, stamp.today.year());
                (draft.with_case(case, text, number), None)
            }
            Action::Edit(field, value) => (draft.with_field(field, value), None),
            Action::SetLanguage(language) => (draft.with_language(language), None),
            Action::Print => (draft.clone(), Some(Effect::Print(draft))),
            Action::Back => match self.step {
                Step::DepartmentSelect | Step::CustomEdit => {
                    (Draft::new(draft.language, stamp.today), Some(Effect::Restart))
                }
                Step::SubDepartmentSelect | Step::CaseSelect => {
                    (draft.with_sub_department(None), None)
                }
                _ => (draft, None),
            },
            Action::Reset => (Draft::new(draft.language, stamp.today), Some(Effect::Restart)),
        };

        Ok(Transition {
            workflow: Workflow { step: next, draft },
            effect,
        })
    }

    fn selected_department(&self) -> Result<&Department, WorkflowError> {
        self.draft
            .department
            .as_ref()
            .ok_or(WorkflowError::MissingDepartment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> Stamp {
        Stamp {
            today: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            serial: 4321,
        }
    }

    fn home() -> Department {
        Department {
            id: 1,
            name_en: "Home".into(),
            name_hi: "गृह".into(),
        }
    }

    fn revenue() -> Department {
        Department {
            id: 2,
            name_en: "Revenue".into(),
            name_hi: "राजस्व".into(),
        }
    }

    fn police() -> SubDepartment {
        SubDepartment {
            id: "sd-police".into(),
            department_id: 1,
            name_en: "Police".into(),
            name_hi: "पुलिस".into(),
        }
    }

    fn case_in(department: u32) -> Case {
        Case {
            id: "c1".into(),
            case_number: "1234/2023".into(),
            name: "Ram Singh".into(),
            filing_date: "2023-01-15".into(),
            petition_number: None,
            notice_number: None,
            writ_type: None,
            department,
            sub_department: None,
            status: "Pending".into(),
            hearing_date: None,
        }
    }

    fn step(wf: &Workflow, action: Action) -> Transition {
        wf.apply(action, stamp()).unwrap()
    }

    fn at_case_select(notice_type: NoticeType) -> Workflow {
        let wf = Workflow::new(Language::Hi, stamp().today);
        let wf = step(&wf, Action::ChooseType(notice_type)).workflow;
        let wf = step(&wf, Action::SelectDepartment(home())).workflow;
        step(&wf, Action::SelectSubDepartment(police())).workflow
    }

    #[test]
    fn starts_on_type_select_with_fresh_draft() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        assert_eq!(wf.step(), Step::TypeSelect);
        assert_eq!(wf.draft().date, "09/03/2025");
    }

    #[test]
    fn case_linked_types_go_to_department_select() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        for t in [NoticeType::Regular, NoticeType::Contempt] {
            let tr = step(&wf, Action::ChooseType(t));
            assert_eq!(tr.workflow.step(), Step::DepartmentSelect);
            assert_eq!(tr.workflow.draft().notice_type, t);
            assert!(tr.effect.is_none());
        }
    }

    #[test]
    fn custom_skips_to_custom_edit_without_effects() {
        let wf = Workflow::new(Language::En, stamp().today);
        let tr = step(&wf, Action::ChooseType(NoticeType::Custom));
        assert_eq!(tr.workflow.step(), Step::CustomEdit);
        assert!(tr.effect.is_none());
        assert!(tr.workflow.draft().subject.is_empty());
        assert!(tr.workflow.draft().body.is_empty());
        assert!(tr.workflow.draft().department.is_none());
    }

    #[test]
    fn department_selection_requests_sub_departments() {
        let wf = step(
            &Workflow::new(Language::Hi, stamp().today),
            Action::ChooseType(NoticeType::Regular),
        )
        .workflow;
        let tr = step(&wf, Action::SelectDepartment(home()));
        assert_eq!(tr.workflow.step(), Step::SubDepartmentSelect);
        assert_eq!(
            tr.effect,
            Some(Effect::FetchSubDepartments { department_id: 1 })
        );
        // The earlier draft is untouched.
        assert!(wf.draft().department.is_none());
    }

    #[test]
    fn skip_fetches_department_scope_only() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        let wf = step(&wf, Action::ChooseType(NoticeType::Regular)).workflow;
        let wf = step(&wf, Action::SelectDepartment(home())).workflow;
        let tr = step(&wf, Action::SkipSubDepartment);
        assert_eq!(tr.workflow.step(), Step::CaseSelect);
        assert_eq!(
            tr.effect,
            Some(Effect::FetchCases {
                department_id: 1,
                sub_department_id: None
            })
        );
        assert!(tr.workflow.draft().sub_department.is_none());
    }

    #[test]
    fn sub_department_from_other_department_is_rejected() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        let wf = step(&wf, Action::ChooseType(NoticeType::Regular)).workflow;
        let wf = step(&wf, Action::SelectDepartment(revenue())).workflow;
        let err = wf
            .apply(Action::SelectSubDepartment(police()), stamp())
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::SubDepartmentMismatch {
                sub_department: "sd-police".into(),
                owner: 1,
                department: 2,
            }
        );
    }

    #[test]
    fn case_selection_generates_text_and_letter_number() {
        let wf = at_case_select(NoticeType::Regular);
        let tr = step(&wf, Action::SelectCase(case_in(1)));
        let draft = tr.workflow.draft();
        assert_eq!(tr.workflow.step(), Step::ReviewEdit);
        assert_eq!(draft.letter_number, "4321/रिट/2025");
        assert!(draft.subject.contains("रिट याचिका संख्या 1234/2023"));
        assert!(draft.body.contains("5. उप-विभाग: पुलिस"));
        assert_eq!(draft.signatory, "अपर जिलाधिकारी");
        assert_eq!(draft.case.as_ref().unwrap().id, "c1");
    }

    #[test]
    fn contempt_letter_number_uses_contempt_token() {
        let wf = at_case_select(NoticeType::Contempt);
        let tr = step(&wf, Action::SelectCase(case_in(1)));
        assert_eq!(tr.workflow.draft().letter_number, "4321/अवमानना/2025");
    }

    #[test]
    fn case_from_other_department_is_rejected() {
        let wf = at_case_select(NoticeType::Regular);
        let err = wf.apply(Action::SelectCase(case_in(9)), stamp()).unwrap_err();
        assert!(matches!(err, WorkflowError::CaseMismatch { owner: 9, .. }));
    }

    #[test]
    fn invalid_pairs_are_rejected() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        assert_eq!(
            wf.apply(Action::Print, stamp()).unwrap_err(),
            WorkflowError::InvalidTransition {
                step: Step::TypeSelect,
                action: ActionKind::Print,
            }
        );
        let custom = step(&wf, Action::ChooseType(NoticeType::Custom)).workflow;
        assert!(custom.apply(Action::SelectCase(case_in(1)), stamp()).is_err());
        assert!(custom.apply(Action::SkipSubDepartment, stamp()).is_err());
    }

    #[test]
    fn back_from_department_select_is_a_full_reset() {
        let wf = Workflow::new(Language::En, stamp().today);
        let wf = step(&wf, Action::ChooseType(NoticeType::Contempt)).workflow;
        let tr = step(&wf, Action::Back);
        assert_eq!(tr.workflow.step(), Step::TypeSelect);
        assert_eq!(tr.workflow.draft().notice_type, NoticeType::Regular);
        assert_eq!(tr.effect, Some(Effect::Restart));
    }

    #[test]
    fn back_from_sub_department_select_keeps_department() {
        let wf = Workflow::new(Language::Hi, stamp().today);
        let wf = step(&wf, Action::ChooseType(NoticeType::Regular)).workflow;
        let wf = step(&wf, Action::SelectDepartment(home())).workflow;
        let tr = step(&wf, Action::Back);
        assert_eq!(tr.workflow.step(), Step::DepartmentSelect);
        assert!(tr.workflow.draft().sub_department.is_none());
        assert!(tr.effect.is_none());
    }

    #[test]
    fn back_from_case_select_discards_sub_department() {
        let wf = at_case_select(NoticeType::Regular);
        assert!(wf.draft().sub_department.is_some());
        let tr = step(&wf, Action::Back);
        assert_eq!(tr.workflow.step(), Step::SubDepartmentSelect);
        assert!(tr.workflow.draft().sub_department.is_none());
        assert_eq!(tr.workflow.draft().department.as_ref().unwrap().id, 1);
    }

    #[test]
    fn back_from_review_returns_to_case_select() {
        let wf = at_case_select(NoticeType::Regular);
        let wf = step(&wf, Action::SelectCase(case_in(1))).workflow;
        let tr = step(&wf, Action::Back);
        assert_eq!(tr.workflow.step(), Step::CaseSelect);
    }

    #[test]
    fn print_is_a_self_loop_carrying_the_snapshot() {
        let wf = at_case_select(NoticeType::Regular);
        let wf = step(&wf, Action::SelectCase(case_in(1))).workflow;
        let tr = step(&wf, Action::Print);
        assert_eq!(tr.workflow, wf);
        assert_eq!(tr.effect, Some(Effect::Print(wf.draft().clone())));
    }

    #[test]
    fn edits_on_review_and_custom_steps() {
        let wf = Workflow::new(Language::En, stamp().today);
        let wf = step(&wf, Action::ChooseType(NoticeType::Custom)).workflow;
        let wf = step(&wf, Action::Edit(DraftField::Subject, "Hearing notice".into())).workflow;
        assert_eq!(wf.step(), Step::CustomEdit);
        assert_eq!(wf.draft().subject, "Hearing notice");
    }

    #[test]
    fn language_switch_does_not_regenerate() {
        let wf = at_case_select(NoticeType::Regular);
        let wf = step(&wf, Action::SelectCase(case_in(1))).workflow;
        let before = wf.draft().body.clone();
        let wf = step(&wf, Action::SetLanguage(Language::En)).workflow;
        assert_eq!(wf.language(), Language::En);
        assert_eq!(wf.draft().body, before);
        assert_eq!(wf.step(), Step::ReviewEdit);
    }

    #[test]
    fn reset_from_every_step_restores_defaults() {
        let review = {
            let wf = at_case_select(NoticeType::Contempt);
            step(&wf, Action::SelectCase(case_in(1))).workflow
        };
        let custom = step(
            &Workflow::new(Language::Hi, stamp().today),
            Action::ChooseType(NoticeType::Custom),
        )
        .workflow;
        let fresh = Workflow::new(Language::Hi, stamp().today);
        let departments = step(&fresh, Action::ChooseType(NoticeType::Regular)).workflow;
        let sub_departments = step(&departments, Action::SelectDepartment(home())).workflow;
        let all = [
            fresh,
            departments,
            sub_departments,
            at_case_select(NoticeType::Regular),
            review,
            custom,
        ];
        let steps: Vec<Step> = all.iter().map(Workflow::step).collect();
        assert_eq!(
            steps,
            [
                Step::TypeSelect,
                Step::DepartmentSelect,
                Step::SubDepartmentSelect,
                Step::CaseSelect,
                Step::ReviewEdit,
                Step::CustomEdit,
            ]
        );
        for wf in all {
            let tr = step(&wf, Action::Reset);
            assert_eq!(tr.workflow.step(), Step::TypeSelect);
            assert_eq!(tr.workflow.draft(), &Draft::new(Language::Hi, stamp().today));
            assert_eq!(tr.effect, Some(Effect::Restart));
        }
    }

    #[test]
    fn case_selection_on_custom_draft_is_rejected() {
        let wf = Workflow {
            step: Step::CaseSelect,
            draft: Draft::new(Language::En, stamp().today)
                .with_notice_type(NoticeType::Custom)
                .with_department(home()),
        };
        assert_eq!(
            wf.apply(Action::SelectCase(case_in(1)), stamp()),
            Err(WorkflowError::InvalidTransition {
                step: Step::CaseSelect,
                action: ActionKind::SelectCase,
            })
        );
    }

    #[test]
    fn every_table_row_routes() {
        for (from, kind, to) in TRANSITIONS {
            assert_eq!(route(*from, *kind), Some(*to));
            assert!(from.actions().contains(kind));
        }
        assert_eq!(route(Step::CaseSelect, ActionKind::SetLanguage), Some(Step::CaseSelect));
        assert_eq!(route(Step::ReviewEdit, ActionKind::Reset), Some(Step::TypeSelect));
        assert_eq!(route(Step::TypeSelect, ActionKind::Back), None);
    }
}
