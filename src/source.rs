//! Employee data sources.
//!
//! The engine does not fetch data itself.  Anything that can list
//! employees and look one up by id implements [`EmployeeSource`]; the
//! API layer holds one behind an `Arc<dyn EmployeeSource>`.

use crate::error::SourceError;
use crate::models::{Employee, Role};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Employee>, SourceError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Employee, SourceError>;
}

/// Drops admin records; only `Role::Employee` rows are listed.
pub fn employees_only(employees: Vec<Employee>) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|e| e.role == Role::Employee)
        .collect()
}

/// A fixed, in-process employee list.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    employees: Vec<Employee>,
}

impl InMemorySource {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

#[async_trait]
impl EmployeeSource for InMemorySource {
    async fn fetch_all(&self) -> Result<Vec<Employee>, SourceError> {
        Ok(self.employees.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, SourceError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

/// Reads the employee directory from a JSON file on every call.
///
/// The file holds either a bare array of employees or an envelope of
/// the form `{"data": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    include_admins: bool,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Listing {
    Bare(Vec<Employee>),
    Envelope { data: Vec<Employee> },
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, include_admins: bool) -> Self {
        Self {
            path: path.into(),
            include_admins,
        }
    }

    async fn load(&self) -> Result<Vec<Employee>, SourceError> {
        let data = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            warn!(path = %self.path.display(), %err, "failed to read employee file");
            SourceError::from(err)
        })?;
        let employees = match serde_json::from_str::<Listing>(&data)? {
            Listing::Bare(data) | Listing::Envelope { data } => data,
        };
        Ok(employees)
    }
}

#[async_trait]
impl EmployeeSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>, SourceError> {
        let mut employees = self.load().await?;
        let loaded = employees.len();
        if !self.include_admins {
            employees = employees_only(employees);
        }
        info!(loaded, listed = employees.len(), "loaded employees");
        Ok(employees)
    }

    /// Admin records are reported as not found unless admins are listed.
    async fn fetch_by_id(&self, id: &str) -> Result<Employee, SourceError> {
        self.load()
            .await?
            .into_iter()
            .find(|e| e.id == id && (self.include_admins || e.role == Role::Employee))
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}
