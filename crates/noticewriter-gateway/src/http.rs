//! HTTP client for the case-records service's read endpoints.

use noticewriter_core::{Case, CaseList, CaseSource, Department, SubDepartment};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only client for `/departments`, `/sub-departments`, and `/cases`.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:5000`; a trailing slash is dropped.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn departments_request(&self) -> RequestBuilder {
        self.client.get(format!("{}/departments", self.base_url))
    }

    fn sub_departments_request(&self, department_id: u32) -> RequestBuilder {
        self.client
            .get(format!("{}/sub-departments", self.base_url))
            .query(&[("departmentId", department_id.to_string())])
    }

    fn cases_request(&self, department_id: u32, sub_department_id: Option<&str>) -> RequestBuilder {
        let mut params = vec![("department", department_id.to_string())];
        if let Some(id) = sub_department_id {
            params.push(("subDepartment", id.to_string()));
        }
        self.client
            .get(format!("{}/cases", self.base_url))
            .query(&params)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl CaseSource for ApiClient {
    type Error = ApiError;

    async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        info!(base_url = %self.base_url, "fetching departments");
        self.fetch(self.departments_request()).await
    }

    async fn sub_departments(&self, department_id: u32) -> Result<Vec<SubDepartment>, ApiError> {
        info!(department = department_id, "fetching sub-departments");
        self.fetch(self.sub_departments_request(department_id))
            .await
    }

    async fn cases(
        &self,
        department_id: u32,
        sub_department_id: Option<&str>,
    ) -> Result<Vec<Case>, ApiError> {
        info!(
            department = department_id,
            sub_department = sub_department_id.unwrap_or("-"),
            "fetching cases"
        );
        let list: CaseList = self
            .fetch(self.cases_request(department_id, sub_department_id))
            .await?;
        Ok(list.cases)
    }
}
