//! Internal Diesel row structs for the `employees` table.
//!
//! These types never leave the persistence layer. Conversion to domain
//! records validates the stored values instead of trusting them.

use diesel::prelude::*;

use crate::domain::{Employee, EmployeeDetails, EmployeeId, EmployeeValidationError};

use super::schema::employees;

/// Row read from the employees table, by DSL query or raw SQL.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let details = EmployeeDetails::try_from_parts(row.first_name, row.last_name, row.email)?;
        Ok(Self::new(EmployeeId::new(row.id), details))
    }
}

/// Insertable row; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a EmployeeDetails> for NewEmployeeRow<'a> {
    fn from(details: &'a EmployeeDetails) -> Self {
        Self {
            first_name: details.first_name.as_ref(),
            last_name: details.last_name.as_ref(),
            email: details.email.as_ref().map(AsRef::as_ref),
        }
    }
}

/// Full replacement of the editable columns. A `None` email clears the
/// column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct EmployeeUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a Employee> for EmployeeUpdate<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            first_name: employee.first_name().as_ref(),
            last_name: employee.last_name().as_ref(),
            email: employee.email().map(AsRef::as_ref),
        }
    }
}
