//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, is_tx_conflict, is_unique_violation};
use serde::Deserialize;
use shared::PageRequest;
use shared::models::{DepartmentSalary, Employee, EmployeeUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Optional filters for [`EmployeeRepository::list`]
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Exact, case-sensitive department match
    pub department: Option<String>,
}

impl EmployeeFilter {
    fn where_clause(&self) -> &'static str {
        if self.department.is_some() {
            " WHERE department = $department"
        } else {
            ""
        }
    }
}

/// Commit-race retries for a single create
const CREATE_ATTEMPTS: usize = 5;

#[derive(Debug, Deserialize)]
struct CountRow {
    total: u64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new employee
    ///
    /// No existence check is done first: the UNIQUE index on `employee_id`
    /// rejects duplicates. A create that loses a commit race is retried
    /// only when no record with its `employee_id` has appeared meanwhile.
    pub async fn create(&self, data: Employee) -> RepoResult<Employee> {
        let employee_id = data.employee_id.clone();

        for attempt in 1..=CREATE_ATTEMPTS {
            match self.insert(data.clone()).await {
                Ok(Some(created)) => {
                    tracing::debug!(employee_id = %employee_id, "Employee created");
                    return Ok(created);
                }
                Ok(None) => {
                    return Err(RepoError::Database("Failed to create employee".to_string()));
                }
                Err(e) if is_unique_violation(&e) => return Err(RepoError::Duplicate(employee_id)),
                Err(e) if is_tx_conflict(&e) => {
                    if self.find_by_employee_id(&employee_id).await?.is_some() {
                        return Err(RepoError::Duplicate(employee_id));
                    }
                    tracing::debug!(employee_id = %employee_id, attempt, "Create conflicted, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(RepoError::Database(format!(
            "Create of employee {} kept conflicting after {} attempts",
            employee_id, CREATE_ATTEMPTS
        )))
    }

    async fn insert(&self, data: Employee) -> Result<Option<Employee>, surrealdb::Error> {
        let mut result = self
            .base
            .db()
            .query("CREATE employee CONTENT $data RETURN AFTER")
            .bind(("data", data))
            .await?;
        result.take(0)
    }

    /// Find employee by its `employee_id`
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE employee_id = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Merge the supplied fields onto an existing employee
    pub async fn update(&self, employee_id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query("UPDATE employee MERGE $patch WHERE employee_id = $employee_id RETURN AFTER")
            .bind(("patch", data))
            .bind(("employee_id", employee_id.to_string()))
            .await?;

        let updated: Vec<Employee> = result.take(0)?;
        let employee = updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(employee_id.to_string()))?;

        tracing::debug!(employee_id = %employee_id, "Employee updated");
        Ok(employee)
    }

    /// Hard delete an employee
    pub async fn delete(&self, employee_id: &str) -> RepoResult<()> {
        let mut result = self
            .base
            .db()
            .query("DELETE employee WHERE employee_id = $employee_id RETURN BEFORE")
            .bind(("employee_id", employee_id.to_string()))
            .await?;

        let deleted: Vec<Employee> = result.take(0)?;
        if deleted.is_empty() {
            return Err(RepoError::NotFound(employee_id.to_string()));
        }

        tracing::debug!(employee_id = %employee_id, "Employee deleted");
        Ok(())
    }

    /// One page of employees, newest `joining_date` first
    ///
    /// Equal joining dates are ordered by `employee_id` so pages are stable.
    /// Returns the page together with the total number of matching records.
    pub async fn list(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> RepoResult<(Vec<Employee>, u64)> {
        let where_clause = filter.where_clause();
        // LIMIT/START are formatted from integers, never from user text
        let sql = format!(
            "SELECT * FROM employee{where_clause} \
             ORDER BY joining_date DESC, employee_id ASC LIMIT {limit} START {start}; \
             SELECT count() AS total FROM employee{where_clause} GROUP ALL;",
            limit = page.size,
            start = page.offset(),
        );

        let mut query = self.base.db().query(sql);
        if let Some(department) = &filter.department {
            query = query.bind(("department", department.clone()));
        }
        let mut result = query.await?;

        let employees: Vec<Employee> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|row| row.total).unwrap_or(0);

        Ok((employees, total))
    }

    /// All employees whose `skills` contain `skill` (exact, case-sensitive)
    pub async fn search_by_skill(&self, skill: &str) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE skills CONTAINS $skill ORDER BY employee_id ASC")
            .bind(("skill", skill.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Mean salary per distinct department, one row each
    pub async fn average_salary_by_department(&self) -> RepoResult<Vec<DepartmentSalary>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT department, math::mean(salary) AS avg_salary FROM employee \
                 GROUP BY department ORDER BY department ASC",
            )
            .await?;
        let rows: Vec<DepartmentSalary> = result.take(0)?;
        Ok(rows)
    }
}
