use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Employee, EmployeeFields, EmployeeId},
    protocol::{employee_path, BATCH_DELETE_PATH, EMPLOYEES_PATH},
};
use tracing::{debug, info, warn};

pub mod config;
pub mod error;
pub mod form;
pub mod roster;
pub mod session;
pub mod status;
pub mod workflow;

pub use config::{load_settings, load_settings_from, ClientSettings};
pub use error::{Operation, RosterError};
pub use session::{RosterSession, RosterViewModel};
pub use workflow::{run_command, RosterCommand, RosterEvent};

pub type RosterResult<T> = std::result::Result<T, RosterError>;

/// Server operations the roster client depends on.
#[async_trait]
pub trait RosterApi: Send + Sync {
    async fn list_employees(&self) -> RosterResult<Vec<Employee>>;
    async fn fetch_employee(&self, id: EmployeeId) -> RosterResult<Employee>;
    async fn create_employee(&self, fields: &EmployeeFields) -> RosterResult<Employee>;
    async fn update_employee(
        &self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> RosterResult<Employee>;
    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()>;
    /// Deletes every id in one `DELETE /api/employees/batch` call.
    async fn delete_employees(&self, ids: &[EmployeeId]) -> RosterResult<()>;
}

pub struct HttpRosterClient {
    http: Client,
    server_url: String,
}

impl HttpRosterClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(
        server_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            server_url: server_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Self::with_timeout(settings.server_url.clone(), settings.request_timeout())
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server_url)
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> RosterResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| RosterError::Transport { operation, source })?;

        let status = response.status();
        debug!(%operation, %status, "roster request completed");
        if !status.is_success() {
            warn!(%operation, %status, "roster request rejected by server");
            return Err(RosterError::Status { operation, status });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> RosterResult<T> {
        self.send(operation, request)
            .await?
            .json()
            .await
            .map_err(|source| RosterError::Decode { operation, source })
    }
}

#[async_trait]
impl RosterApi for HttpRosterClient {
    async fn list_employees(&self) -> RosterResult<Vec<Employee>> {
        self.send_json(
            Operation::ListEmployees,
            self.http.get(self.url(EMPLOYEES_PATH)),
        )
        .await
    }

    async fn fetch_employee(&self, id: EmployeeId) -> RosterResult<Employee> {
        self.send_json(
            Operation::FetchEmployee,
            self.http.get(self.url(&employee_path(id))),
        )
        .await
    }

    async fn create_employee(&self, fields: &EmployeeFields) -> RosterResult<Employee> {
        let created: Employee = self
            .send_json(
                Operation::CreateEmployee,
                self.http.post(self.url(EMPLOYEES_PATH)).json(fields),
            )
            .await?;
        info!(employee_id = created.id.0, "employee created");
        Ok(created)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> RosterResult<Employee> {
        let updated: Employee = self
            .send_json(
                Operation::UpdateEmployee,
                self.http.put(self.url(&employee_path(id))).json(fields),
            )
            .await?;
        info!(employee_id = id.0, "employee updated");
        Ok(updated)
    }

    async fn delete_employee(&self, id: EmployeeId) -> RosterResult<()> {
        self.send(
            Operation::DeleteEmployee,
            self.http.delete(self.url(&employee_path(id))),
        )
        .await?;
        info!(employee_id = id.0, "employee deleted");
        Ok(())
    }

    async fn delete_employees(&self, ids: &[EmployeeId]) -> RosterResult<()> {
        self.send(
            Operation::DeleteEmployees,
            self.http.delete(self.url(BATCH_DELETE_PATH)).json(ids),
        )
        .await?;
        info!(count = ids.len(), "employees deleted in batch");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/fake_api.rs"]
pub(crate) mod fake_api;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
