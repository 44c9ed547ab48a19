//! Process-local employee store.
//!
//! Used when no database URL is configured and by HTTP tests. Ids start at 1
//! and are never reused. The email uniqueness constraint mirrors the
//! `employees_email_key` index so both adapters reject the same writes.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{EmailAddress, Employee, EmployeeDetails, EmployeeId, PersonName};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl Table {
    fn email_taken(&self, email: Option<&EmailAddress>, except: Option<i64>) -> bool {
        let Some(email) = email else {
            return false;
        };
        self.rows
            .iter()
            .any(|(id, row)| Some(*id) != except && row.email() == Some(email))
    }

    fn insert(&mut self, details: EmployeeDetails) -> Result<Employee, EmployeePersistenceError> {
        if self.email_taken(details.email.as_ref(), None) {
            return Err(duplicate(details.email.as_ref()));
        }
        let id = self.next_id;
        self.next_id += 1;
        let employee = Employee::new(EmployeeId::new(id), details);
        self.rows.insert(id, employee.clone());
        Ok(employee)
    }
}

fn duplicate(email: Option<&EmailAddress>) -> EmployeePersistenceError {
    EmployeePersistenceError::duplicate_email(email.map(ToString::to_string).unwrap_or_default())
}

/// In-memory [`EmployeeRepository`].
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table>,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, EmployeePersistenceError> {
        self.table
            .lock()
            .map_err(|_| EmployeePersistenceError::query("employee table lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        self.lock()?.insert(details.clone())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        Ok(self.lock()?.rows.get(&id.get()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|row| row.email() == Some(email))
            .cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError> {
        let mut table = self.lock()?;
        let id = employee.id().get();
        if !table.rows.contains_key(&id) {
            return table.insert(employee.details());
        }
        if table.email_taken(employee.email(), Some(id)) {
            return Err(duplicate(employee.email()));
        }
        table.rows.insert(id, employee.clone());
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeePersistenceError> {
        self.lock()?.rows.remove(&id.get());
        Ok(())
    }

    async fn find_by_name(
        &self,
        first_name: &PersonName,
        last_name: &PersonName,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|row| row.first_name() == first_name && row.last_name() == last_name)
            .cloned())
    }
}
