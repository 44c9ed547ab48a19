//! PostgreSQL-backed `EmployeeRepository` using Diesel.
//!
//! Every operation checks out one pooled connection and runs a single
//! statement, except `save` on a missing id, which issues the update and
//! then an insert on the same connection.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{EmailAddress, Employee, EmployeeDetails, EmployeeId, PersonName};

use super::employee_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Raw lookup used by [`NameLookupStyle::RawSql`]. PostgreSQL only supports
/// positional parameters, so the names bind as `$1` and `$2`.
const FIND_BY_NAME_SQL: &str = "SELECT id, first_name, last_name, email FROM employees \
     WHERE first_name = $1 AND last_name = $2 ORDER BY id LIMIT 1";

/// How [`DieselEmployeeRepository::find_by_name`] builds its statement.
///
/// Both styles return the same row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameLookupStyle {
    /// Diesel query DSL.
    #[default]
    QueryBuilder,
    /// Hand-written SQL with bound parameters.
    RawSql,
}

/// Unrecognised [`NameLookupStyle`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name lookup style `{0}` (expected `query-builder` or `raw-sql`)")]
pub struct ParseNameLookupStyleError(String);

impl FromStr for NameLookupStyle {
    type Err = ParseNameLookupStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query-builder" | "query_builder" => Ok(Self::QueryBuilder),
            "raw-sql" | "raw_sql" => Ok(Self::RawSql),
            other => Err(ParseNameLookupStyleError(other.to_owned())),
        }
    }
}

/// Diesel implementation of the [`EmployeeRepository`] port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
    name_lookup: NameLookupStyle,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            name_lookup: NameLookupStyle::default(),
        }
    }

    /// Select how name lookups are issued.
    pub fn with_name_lookup_style(mut self, style: NameLookupStyle) -> Self {
        self.name_lookup = style;
        self
    }

    pub fn name_lookup_style(&self) -> NameLookupStyle {
        self.name_lookup
    }
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeePersistenceError> {
    let id = row.id;
    Employee::try_from(row).map_err(|err| {
        warn!(employee_id = id, error = %err, "stored employee row failed validation");
        EmployeePersistenceError::query(format!("invalid stored employee {id}: {err}"))
    })
}

fn email_of(details: &EmployeeDetails) -> Option<&str> {
    details.email.as_ref().map(AsRef::as_ref)
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(details))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, email_of(details)))?;

        row_to_employee(row)
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_employee).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = employees::table
            .filter(employees::email.eq(email.as_ref()))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_employee).transpose()
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError> {
        let email = employee.email().map(AsRef::as_ref);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(employees::table.find(employee.id().get()))
            .set(EmployeeUpdate::from(employee))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, email))?;

        let row = match updated {
            Some(row) => row,
            None => {
                let details = employee.details();
                diesel::insert_into(employees::table)
                    .values(NewEmployeeRow::from(&details))
                    .returning(EmployeeRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(|err| map_diesel_error(err, email))?
            }
        };

        row_to_employee(row)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(())
    }

    async fn find_by_name(
        &self,
        first_name: &PersonName,
        last_name: &PersonName,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = match self.name_lookup {
            NameLookupStyle::QueryBuilder => employees::table
                .filter(employees::first_name.eq(first_name.as_ref()))
                .filter(employees::last_name.eq(last_name.as_ref()))
                .order(employees::id.asc())
                .limit(1)
                .select(EmployeeRow::as_select())
                .load(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, None))?,
            NameLookupStyle::RawSql => diesel::sql_query(FIND_BY_NAME_SQL)
                .bind::<Text, _>(first_name.as_ref())
                .bind::<Text, _>(last_name.as_ref())
                .load(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, None))?,
        };

        rows.into_iter().next().map(row_to_employee).transpose()
    }
}
