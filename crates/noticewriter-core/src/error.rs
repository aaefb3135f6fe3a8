use thiserror::Error;

use crate::workflow::{ActionKind, Step};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("{action} is not available on the {step} step")]
    InvalidTransition { step: Step, action: ActionKind },

    #[error("no department has been selected")]
    MissingDepartment,

    #[error("sub-department {sub_department} belongs to department {owner}, not {department}")]
    SubDepartmentMismatch {
        sub_department: String,
        owner: u32,
        department: u32,
    },

    #[error("case {case_number} belongs to department {owner}, not {department}")]
    CaseMismatch {
        case_number: String,
        owner: u32,
        department: u32,
    },
}
