//! Employee input validation
//!
//! Every rule is checked independently and all failures are collected, so a
//! caller gets the complete error set in one response. Valid input comes back
//! normalized (strings trimmed).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::AppError;
use shared::models::{
    Employee, EmployeeInput, EmployeeUpdate, MAX_DEPARTMENT_LEN, MAX_EMPLOYEE_ID_LEN,
    MAX_NAME_LEN, MAX_SKILL_LEN,
};

use super::time::is_future;

pub const SALARY_NEGATIVE: &str = "salary must be non-negative";
pub const JOINING_DATE_IN_FUTURE: &str = "joining date cannot be in the future";
pub const EMPLOYEE_ID_IMMUTABLE: &str = "employee_id cannot be changed";

/// Field-level validation errors, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Replace this set's messages for every field `other` reports
    fn overridden_by(mut self, other: FieldErrors) -> Self {
        self.0.extend(other.0);
        self
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        errors
            .0
            .into_iter()
            .fold(AppError::validation("Validation failed"), |err, (field, messages)| {
                err.with_detail(field, messages)
            })
    }
}

/// Decode a JSON object field by field
///
/// A field whose value has the wrong type is reported and left unset, so
/// type errors are collected together with the rule checks that follow.
/// `null` counts as absent. Unknown keys are ignored.
pub fn decode_input(mut body: Map<String, Value>) -> (EmployeeInput, FieldErrors) {
    let mut errors = FieldErrors::new();
    let input = EmployeeInput {
        employee_id: decode_field(&mut body, "employee_id", "a string", &mut errors),
        name: decode_field(&mut body, "name", "a string", &mut errors),
        department: decode_field(&mut body, "department", "a string", &mut errors),
        salary: decode_field(&mut body, "salary", "a number", &mut errors),
        joining_date: decode_field(
            &mut body,
            "joining_date",
            "a date in YYYY-MM-DD format",
            &mut errors,
        ),
        skills: decode_field(&mut body, "skills", "a list of strings", &mut errors),
    };
    (input, errors)
}

fn decode_field<T: DeserializeOwned>(
    body: &mut Map<String, Value>,
    field: &str,
    expected: &str,
    errors: &mut FieldErrors,
) -> Option<T> {
    match body.remove(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(_) => {
                errors.add(field, format!("{field} must be {expected}"));
                None
            }
        },
    }
}

/// Decode and validate a create body
pub fn parse_create(body: Map<String, Value>, today: NaiveDate) -> Result<Employee, FieldErrors> {
    let (input, type_errors) = decode_input(body);
    with_type_errors(validate_create(input, today), type_errors)
}

/// Decode and validate a partial update body
pub fn parse_update(
    employee_id: &str,
    body: Map<String, Value>,
    today: NaiveDate,
) -> Result<EmployeeUpdate, FieldErrors> {
    let (input, type_errors) = decode_input(body);
    with_type_errors(validate_update(employee_id, input, today), type_errors)
}

// A mistyped field is unset after decoding; its type error replaces the
// "is required" that validation reports for it.
fn with_type_errors<T>(
    result: Result<T, FieldErrors>,
    type_errors: FieldErrors,
) -> Result<T, FieldErrors> {
    match result {
        Ok(value) if type_errors.is_empty() => Ok(value),
        Ok(_) => Err(type_errors),
        Err(errors) => Err(errors.overridden_by(type_errors)),
    }
}

/// Validate a create payload into a full record
///
/// Missing required fields are reported alongside rule violations. `skills`
/// is optional and defaults to empty.
pub fn validate_create(input: EmployeeInput, today: NaiveDate) -> Result<Employee, FieldErrors> {
    let mut errors = FieldErrors::new();

    let employee_id = required(&mut errors, "employee_id", input.employee_id)
        .and_then(|v| check_text(&mut errors, "employee_id", &v, MAX_EMPLOYEE_ID_LEN));
    let name = required(&mut errors, "name", input.name)
        .and_then(|v| check_text(&mut errors, "name", &v, MAX_NAME_LEN));
    let department = required(&mut errors, "department", input.department)
        .and_then(|v| check_text(&mut errors, "department", &v, MAX_DEPARTMENT_LEN));
    let salary = required(&mut errors, "salary", input.salary)
        .and_then(|v| check_salary(&mut errors, v));
    let joining_date = required(&mut errors, "joining_date", input.joining_date)
        .and_then(|v| check_joining_date(&mut errors, v, today));
    let skills = check_skills(&mut errors, input.skills.unwrap_or_default());

    match (employee_id, name, department, salary, joining_date, skills) {
        (
            Some(employee_id),
            Some(name),
            Some(department),
            Some(salary),
            Some(joining_date),
            Some(skills),
        ) if errors.is_empty() => Ok(Employee {
            employee_id,
            name,
            department,
            salary,
            joining_date,
            skills,
        }),
        _ => Err(errors),
    }
}

/// Validate a partial update; only supplied fields are checked
///
/// `employee_id` is the identity key: repeating the current value is
/// accepted and ignored, any other value is an error.
pub fn validate_update(
    employee_id: &str,
    input: EmployeeInput,
    today: NaiveDate,
) -> Result<EmployeeUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input
        .employee_id
        .as_deref()
        .is_some_and(|new_id| new_id.trim() != employee_id)
    {
        errors.add("employee_id", EMPLOYEE_ID_IMMUTABLE);
    }

    let name = input
        .name
        .and_then(|v| check_text(&mut errors, "name", &v, MAX_NAME_LEN));
    let department = input
        .department
        .and_then(|v| check_text(&mut errors, "department", &v, MAX_DEPARTMENT_LEN));
    let salary = input.salary.and_then(|v| check_salary(&mut errors, v));
    let joining_date = input
        .joining_date
        .and_then(|v| check_joining_date(&mut errors, v, today));
    let skills = input.skills.and_then(|v| check_skills(&mut errors, v));

    errors.finish(|| EmployeeUpdate {
        name,
        department,
        salary,
        joining_date,
        skills,
    })
}

fn required<T>(errors: &mut FieldErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, format!("{field} is required"));
    }
    value
}

/// Trimmed, non-empty and at most `max_len` characters
fn check_text(errors: &mut FieldErrors, field: &str, value: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{field} must not be empty"));
        return None;
    }
    let len = trimmed.chars().count();
    if len > max_len {
        errors.add(
            field,
            format!("{field} must be at most {max_len} characters ({len} given)"),
        );
        return None;
    }
    Some(trimmed.to_string())
}

fn check_salary(errors: &mut FieldErrors, salary: f64) -> Option<f64> {
    // NaN fails the comparison as well
    if salary >= 0.0 {
        Some(salary)
    } else {
        errors.add("salary", SALARY_NEGATIVE);
        None
    }
}

fn check_joining_date(
    errors: &mut FieldErrors,
    joining_date: NaiveDate,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if is_future(joining_date, today) {
        errors.add("joining_date", JOINING_DATE_IN_FUTURE);
        None
    } else {
        Some(joining_date)
    }
}

fn check_skills(errors: &mut FieldErrors, skills: Vec<String>) -> Option<Vec<String>> {
    let before = errors.len();
    let skills: Vec<String> = skills
        .iter()
        .filter_map(|skill| check_text(errors, "skills", skill, MAX_SKILL_LEN))
        .collect();
    (errors.len() == before).then_some(skills)
}
