//! Offline record source backed by a JSON file.
//!
//! The file mirrors what the service returns:
//!
//! ```json
//! { "departments": [...], "subDepartments": [...], "cases": [...] }
//! ```
//!
//! Missing keys are treated as empty lists. Queries filter the same way the
//! service does: sub-departments by owning department, cases by department
//! and, when given, by sub-department id.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use noticewriter_core::{Case, CaseSource, Department, SubDepartment};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("cannot read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub sub_departments: Vec<SubDepartment>,
    #[serde(default)]
    pub cases: Vec<Case>,
}

pub struct FixtureSource {
    fixture: Fixture,
}

impl FixtureSource {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            departments = source.fixture.departments.len(),
            sub_departments = source.fixture.sub_departments.len(),
            cases = source.fixture.cases.len(),
            "loaded fixture"
        );
        Ok(source)
    }
}

impl CaseSource for FixtureSource {
    type Error = Infallible;

    async fn departments(&self) -> Result<Vec<Department>, Infallible> {
        Ok(self.fixture.departments.clone())
    }

    async fn sub_departments(&self, department_id: u32) -> Result<Vec<SubDepartment>, Infallible> {
        Ok(self
            .fixture
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
    ) -> Result<Vec<Case>, Infallible> {
        let cases: Vec<Case> = self
            .fixture
            .cases
            .iter()
            .filter(|c| c.department == department_id)
            .filter(|c| match sub_department_id {
                Some(id) => c.sub_department.as_ref().is_some_and(|s| s.id == id),
                None => true,
            })
            .cloned()
            .collect();
        debug!(department = department_id, matched = cases.len(), "fixture cases");
        Ok(cases)
    }
}
