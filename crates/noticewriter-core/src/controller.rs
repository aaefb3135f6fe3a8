//! Async orchestration of the drafting workflow.
//!
//! [`Controller`] owns the current [`Workflow`] and the reference lists shown
//! on each step. It runs the [`Effect`] of every transition against a
//! [`CaseSource`] and commits the new workflow only when that effect succeeds.
//! A failed fetch is logged, leaves its list empty, and keeps the user where
//! they were. Nothing is retried.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::dates;
use crate::draft::Draft;
use crate::error::WorkflowError;
use crate::model::{Case, Department, Language, SubDepartment};
use crate::source::CaseSource;
use crate::workflow::{Action, Effect, Stamp, Step, Transition, Workflow};

/// Load state of a reference list.
///
/// There is no in-flight state: `dispatch` holds `&mut self` across its fetch,
/// so nothing can observe or act on the controller until the fetch settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Idle,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Listing<T> {
    /// Loaded entries; empty unless the list is [`Listing::Ready`].
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Listing::Idle)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Listing::Failed(_))
    }

    /// Loaded successfully with zero entries, as opposed to a failed fetch.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Listing::Ready(items) if items.is_empty())
    }

    fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Listing::Ready(items),
            Err(e) => Listing::Failed(e.to_string()),
        }
    }
}

/// What a dispatched action led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transition was committed; the workflow is now on this step.
    Moved(Step),
    /// The fetch the transition needed failed; the workflow stays on this step.
    FetchFailed(Step),
    /// Snapshot to hand to the printer. The workflow is unchanged.
    Print(Draft),
}

pub struct Controller<S> {
    source: S,
    workflow: Workflow,
    departments: Listing<Department>,
    sub_departments: Listing<SubDepartment>,
    cases: Listing<Case>,
    rng: StdRng,
}

impl<S: CaseSource> Controller<S> {
    pub fn new(source: S, language: Language) -> Self {
        Self::with_rng(source, language, StdRng::from_entropy())
    }

    /// Build a controller with a caller-supplied RNG for letter-number serials.
    pub fn with_rng(source: S, language: Language, rng: StdRng) -> Self {
        Self {
            source,
            workflow: Workflow::new(language, dates::today()),
            departments: Listing::Idle,
            sub_departments: Listing::Idle,
            cases: Listing::Idle,
            rng,
        }
    }

    pub fn step(&self) -> Step {
        self.workflow.step()
    }

    pub fn draft(&self) -> &Draft {
        self.workflow.draft()
    }

    pub fn language(&self) -> Language {
        self.workflow.language()
    }

    pub fn departments(&self) -> &Listing<Department> {
        &self.departments
    }

    pub fn sub_departments(&self) -> &Listing<SubDepartment> {
        &self.sub_departments
    }

    pub fn cases(&self) -> &Listing<Case> {
        &self.cases
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the department list. Called once when a workflow starts.
    pub async fn load_departments(&mut self) {
        let result = self.source.departments().await;
        match &result {
            Ok(items) => info!(count = items.len(), "loaded departments"),
            Err(e) => warn!(error = %e, "error fetching departments"),
        }
        self.departments = Listing::from_result(result);
    }

    /// Apply one user action.
    ///
    /// Rejected actions return an error and change nothing. A failed fetch is
    /// not an error: it yields [`Outcome::FetchFailed`].
    pub async fn dispatch(&mut self, action: Action) -> Result<Outcome, WorkflowError> {
        let stamp = Stamp::draw(&mut self.rng);
        let from = self.workflow.step();
        let Transition { workflow, effect } = self.workflow.apply(action, stamp)?;

        match effect {
            None => {}
            Some(Effect::Print(draft)) => {
                info!(step = %from, notice_type = %draft.notice_type, "print requested");
                return Ok(Outcome::Print(draft));
            }
            Some(Effect::FetchSubDepartments { department_id }) => {
                debug!(department = department_id, "fetching sub-departments");
                let result = self.source.sub_departments(department_id).await;
                if let Err(e) = &result {
                    warn!(department = department_id, error = %e, "error fetching sub-departments");
                }
                self.sub_departments = Listing::from_result(result);
                if self.sub_departments.is_failed() {
                    return Ok(Outcome::FetchFailed(from));
                }
            }
            Some(Effect::FetchCases {
                department_id,
                sub_department_id,
            }) => {
                debug!(
                    department = department_id,
                    sub_department = sub_department_id.as_deref().unwrap_or("-"),
                    "fetching cases"
                );
                let result = self
                    .source
                    .cases(department_id, sub_department_id.as_deref())
                    .await;
                match &result {
                    Ok(items) => info!(department = department_id, count = items.len(), "loaded cases"),
                    Err(e) => warn!(department = department_id, error = %e, "error fetching cases"),
                }
                self.cases = Listing::from_result(result);
                if self.cases.is_failed() {
                    return Ok(Outcome::FetchFailed(from));
                }
            }
            Some(Effect::Restart) => {
                self.workflow = workflow;
                self.sub_departments = Listing::Idle;
                self.cases = Listing::Idle;
                info!(from = %from, "workflow reset");
                self.load_departments().await;
                return Ok(Outcome::Moved(self.workflow.step()));
            }
        }

        self.workflow = workflow;
        self.prune_lists();
        if from != self.workflow.step() {
            info!(from = %from, to = %self.workflow.step(), "workflow transition");
        }
        Ok(Outcome::Moved(self.workflow.step()))
    }

    /// Drop lists that belong to steps after the current one.
    fn prune_lists(&mut self) {
        match self.workflow.step() {
            Step::TypeSelect | Step::DepartmentSelect | Step::CustomEdit => {
                self.sub_departments = Listing::Idle;
                self.cases = Listing::Idle;
            }
            Step::SubDepartmentSelect => self.cases = Listing::Idle,
            Step::CaseSelect | Step::ReviewEdit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::draft::DraftField;
    use crate::model::NoticeType;

    #[derive(Debug, thiserror::Error)]
    #[error("service unavailable")]
    struct Unavailable;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Departments,
        SubDepartments(u32),
        Cases(u32, Option<String>),
    }

    #[derive(Default)]
    struct MemorySource {
        departments: Vec<Department>,
        sub_departments: Vec<SubDepartment>,
        cases: Vec<Case>,
        fail_sub_departments: bool,
        fail_cases: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MemorySource {
        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CaseSource for MemorySource {
        type Error = Unavailable;

        async fn departments(&self) -> Result<Vec<Department>, Unavailable> {
            self.record(Call::Departments);
            Ok(self.departments.clone())
        }

        async fn sub_departments(&self, department_id: u32) -> Result<Vec<SubDepartment>, Unavailable> {
            self.record(Call::SubDepartments(department_id));
            if self.fail_sub_departments {
                return Err(Unavailable);
            }
            Ok(self
                .sub_departments
                .iter()
                .filter(|s| s.department_id == department_id)
                .cloned()
                .collect())
        }

        async fn cases(
            &self,
            department_id: u32,
            sub_department_id: Option<&str>,
        ) -> Result<Vec<Case>, Unavailable> {
            self.record(Call::Cases(department_id, sub_department_id.map(str::to_string)));
            if self.fail_cases {
                return Err(Unavailable);
            }
            Ok(self
                .cases
                .iter()
                .filter(|c| c.department == department_id)
                .filter(|c| match sub_department_id {
                    Some(id) => c.sub_department.as_ref().is_some_and(|s| s.id == id),
                    None => true,
                })
                .cloned()
                .collect())
        }
    }

    fn dept(id: u32, en: &str, hi: &str) -> Department {
        Department {
            id,
            name_en: en.into(),
            name_hi: hi.into(),
        }
    }

    fn sub(id: &str, department_id: u32) -> SubDepartment {
        SubDepartment {
            id: id.into(),
            department_id,
            name_en: format!("{id} (en)"),
            name_hi: format!("{id} (hi)"),
        }
    }

    fn case(id: &str, department: u32, sub_department: Option<SubDepartment>) -> Case {
        Case {
            id: id.into(),
            case_number: format!("{id}/2023"),
            name: "Ram Singh".into(),
            filing_date: "2023-01-15".into(),
            petition_number: None,
            notice_number: None,
            writ_type: None,
            department,
            sub_department,
            status: "Pending".into(),
            hearing_date: None,
        }
    }

    fn source() -> MemorySource {
        MemorySource {
            departments: vec![dept(1, "Home", "गृह"), dept(2, "Revenue", "राजस्व")],
            sub_departments: vec![sub("police", 1), sub("fire", 1), sub("tehsil", 2)],
            cases: vec![
                case("11", 1, Some(sub("police", 1))),
                case("12", 1, None),
                case("21", 2, Some(sub("tehsil", 2))),
            ],
            ..Default::default()
        }
    }

    async fn started(source: MemorySource) -> Controller<MemorySource> {
        let mut c = Controller::with_rng(source, Language::Hi, StdRng::seed_from_u64(1));
        c.load_departments().await;
        c
    }

    #[tokio::test]
    async fn loads_departments_at_start() {
        let c = started(source()).await;
        assert_eq!(c.step(), Step::TypeSelect);
        assert_eq!(c.departments().items().len(), 2);
        assert_eq!(c.source().calls(), vec![Call::Departments]);
    }

    #[tokio::test]
    async fn custom_never_fetches() {
        let mut c = Controller::with_rng(source(), Language::En, StdRng::seed_from_u64(1));
        let outcome = c
            .dispatch(Action::ChooseType(NoticeType::Custom))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Moved(Step::CustomEdit));
        assert!(c.source().calls().is_empty());
        assert!(c.draft().subject.is_empty());
    }

    #[tokio::test]
    async fn full_regular_flow_reaches_review() {
        let mut c = started(source()).await;
        c.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        let home = c.departments().items()[0].clone();
        let outcome = c.dispatch(Action::SelectDepartment(home)).await.unwrap();
        assert_eq!(outcome, Outcome::Moved(Step::SubDepartmentSelect));
        assert_eq!(c.sub_departments().items().len(), 2);

        let police = c.sub_departments().items()[0].clone();
        c.dispatch(Action::SelectSubDepartment(police)).await.unwrap();
        assert_eq!(c.step(), Step::CaseSelect);
        assert_eq!(c.cases().items().len(), 1);

        let chosen = c.cases().items()[0].clone();
        c.dispatch(Action::SelectCase(chosen)).await.unwrap();
        assert_eq!(c.step(), Step::ReviewEdit);
        assert!(c.draft().letter_number.contains("/रिट/"));
        assert!(c.draft().subject.contains("रिट याचिका संख्या 11/2023"));
        assert_eq!(
            c.source().calls(),
            vec![
                Call::Departments,
                Call::SubDepartments(1),
                Call::Cases(1, Some("police".into())),
            ]
        );
    }

    #[tokio::test]
    async fn skip_fetches_by_department_only() {
        let mut c = started(source()).await;
        c.dispatch(Action::ChooseType(NoticeType::Contempt)).await.unwrap();
        c.dispatch(Action::SelectDepartment(dept(1, "Home", "गृह"))).await.unwrap();
        c.dispatch(Action::SkipSubDepartment).await.unwrap();
        assert_eq!(c.step(), Step::CaseSelect);
        assert!(c.draft().sub_department.is_none());
        assert_eq!(c.cases().items().len(), 2);
        assert_eq!(c.source().calls().last(), Some(&Call::Cases(1, None)));
    }

    #[tokio::test]
    async fn back_then_other_department_leaves_no_stale_lists() {
        let mut c = started(source()).await;
        c.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        c.dispatch(Action::SelectDepartment(dept(1, "Home", "गृह"))).await.unwrap();
        c.dispatch(Action::SkipSubDepartment).await.unwrap();
        assert!(!c.cases().items().is_empty());

        c.dispatch(Action::Back).await.unwrap();
        assert_eq!(c.step(), Step::SubDepartmentSelect);
        assert!(c.cases().items().is_empty());

        c.dispatch(Action::Back).await.unwrap();
        assert_eq!(c.step(), Step::DepartmentSelect);
        assert!(c.sub_departments().items().is_empty());
        assert!(c.cases().items().is_empty());

        c.dispatch(Action::SelectDepartment(dept(2, "Revenue", "राजस्व")))
            .await
            .unwrap();
        let subs = c.sub_departments().items();
        assert_eq!(subs.len(), 1);
        assert!(subs.iter().all(|s| s.department_id == 2));
        assert!(c.cases().items().is_empty());
        assert!(c.draft().sub_department.is_none());
        assert!(c.draft().case.is_none());
    }

    #[tokio::test]
    async fn failed_sub_department_fetch_keeps_step() {
        let mut c = started(MemorySource {
            fail_sub_departments: true,
            ..source()
        })
        .await;
        c.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        let outcome = c
            .dispatch(Action::SelectDepartment(dept(1, "Home", "गृह")))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::FetchFailed(Step::DepartmentSelect));
        assert_eq!(c.step(), Step::DepartmentSelect);
        assert!(c.draft().department.is_none());
        assert!(c.sub_departments().is_failed());
        assert!(c.sub_departments().items().is_empty());
        assert!(c.cases().is_idle());
    }

    #[tokio::test]
    async fn fetches_settle_before_dispatch_returns() {
        let mut c = started(source()).await;
        assert!(matches!(c.departments(), Listing::Ready(_)));
        c.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        assert!(c.sub_departments().is_idle());
        c.dispatch(Action::SelectDepartment(dept(1, "Home", "गृह")))
            .await
            .unwrap();
        assert!(matches!(c.sub_departments(), Listing::Ready(items) if items.len() == 2));
        c.dispatch(Action::SkipSubDepartment).await.unwrap();
        assert!(matches!(c.cases(), Listing::Ready(items) if items.len() == 2));
    }

    #[tokio::test]
    async fn failed_case_fetch_is_distinct_from_empty_result() {
        let mut failing = started(MemorySource {
            fail_cases: true,
            ..source()
        })
        .await;
        failing.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        failing
            .dispatch(Action::SelectDepartment(dept(1, "Home", "गृह")))
            .await
            .unwrap();
        let outcome = failing.dispatch(Action::SkipSubDepartment).await.unwrap();
        assert_eq!(outcome, Outcome::FetchFailed(Step::SubDepartmentSelect));
        assert!(failing.cases().is_failed());
        assert!(!failing.cases().is_empty_result());

        let mut empty = started(source()).await;
        empty.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        empty
            .dispatch(Action::SelectDepartment(dept(1, "Home", "गृह")))
            .await
            .unwrap();
        empty
            .dispatch(Action::SelectSubDepartment(sub("fire", 1)))
            .await
            .unwrap();
        assert_eq!(empty.step(), Step::CaseSelect);
        assert!(empty.cases().is_empty_result());
        assert!(!empty.cases().is_failed());
    }

    #[tokio::test]
    async fn print_returns_snapshot_without_moving() {
        let mut c = started(source()).await;
        c.dispatch(Action::ChooseType(NoticeType::Custom)).await.unwrap();
        c.dispatch(Action::Edit(DraftField::Body, "Appear on Monday.".into()))
            .await
            .unwrap();
        let outcome = c.dispatch(Action::Print).await.unwrap();
        match outcome {
            Outcome::Print(draft) => assert_eq!(draft.body, "Appear on Monday."),
            other => panic!("expected print, got {other:?}"),
        }
        assert_eq!(c.step(), Step::CustomEdit);
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_clears_lists() {
        let mut c = started(source()).await;
        c.dispatch(Action::ChooseType(NoticeType::Regular)).await.unwrap();
        c.dispatch(Action::SelectDepartment(dept(1, "Home", "गृह"))).await.unwrap();
        c.dispatch(Action::SkipSubDepartment).await.unwrap();
        let first = c.cases().items()[0].clone();
        c.dispatch(Action::SelectCase(first)).await.unwrap();

        c.dispatch(Action::Reset).await.unwrap();
        assert_eq!(c.step(), Step::TypeSelect);
        assert_eq!(c.draft(), &Draft::new(Language::Hi, dates::today()));
        assert!(c.sub_departments().items().is_empty());
        assert!(c.cases().items().is_empty());
        assert_eq!(c.departments().items().len(), 2);
        assert_eq!(c.source().calls().last(), Some(&Call::Departments));
    }

    #[tokio::test]
    async fn rejected_action_changes_nothing() {
        let mut c = started(source()).await;
        let before = c.draft().clone();
        let err = c.dispatch(Action::SkipSubDepartment).await.unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
        assert_eq!(c.step(), Step::TypeSelect);
        assert_eq!(c.draft(), &before);
    }
}
