//! Core types, notice templates, and the drafting workflow.

pub mod controller;
pub mod dates;
pub mod draft;
mod error;
pub mod generate;
pub mod letter;
pub mod locale;
pub mod model;
pub mod render;
pub mod source;
pub mod workflow;

pub use controller::{Controller, Listing, Outcome};
pub use draft::{Draft, DraftField};
pub use error::WorkflowError;
pub use generate::{NoticeText, generate};
pub use locale::Locale;
pub use model::{Case, CaseList, Department, Language, NoticeType, SubDepartment};
pub use render::{PrintLayout, render_notice};
pub use source::CaseSource;
pub use workflow::{Action, ActionKind, Effect, Stamp, Step, Workflow};
