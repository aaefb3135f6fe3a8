//! Read-only access to department and case records.

use crate::model::{Case, Department, SubDepartment};

/// Query contract against the records service.
///
/// Implementations never write. The HTTP client and the JSON fixture source
/// live in `noticewriter-gateway`.
pub trait CaseSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn departments(&self) -> impl Future<Output = Result<Vec<Department>, Self::Error>> + Send;

    fn sub_departments(
        &self,
        department_id: u32,
    ) -> impl Future<Output = Result<Vec<SubDepartment>, Self::Error>> + Send;

    /// Cases for a department, narrowed to one sub-department when given.
    fn cases(
        &self,
        department_id: u32,
        sub_department_id: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Case>, Self::Error>> + Send;
}
