//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Max length of `employee_id`
pub const MAX_EMPLOYEE_ID_LEN: usize = 20;
/// Max length of `name`
pub const MAX_NAME_LEN: usize = 100;
/// Max length of `department`
pub const MAX_DEPARTMENT_LEN: usize = 100;
/// Max length of each entry in `skills`
pub const MAX_SKILL_LEN: usize = 50;

/// Employee record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    /// Serialized as `YYYY-MM-DD`
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Raw employee payload
///
/// Every field is optional so that one body type serves both create (where
/// missing fields become validation errors) and partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub joining_date: Option<NaiveDate>,
    pub skills: Option<Vec<String>>,
}

/// Validated partial update
///
/// `None` fields are skipped when serialized so the store merges only what
/// the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Average salary of one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: f64,
}
