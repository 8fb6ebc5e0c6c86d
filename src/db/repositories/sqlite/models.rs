use diesel::prelude::*;

use super::schema::employees;
use crate::models::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub position: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId::new(row.id),
            name: row.name,
            surname: row.surname,
            position: row.position,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    pub name: String,
    pub surname: String,
    pub position: String,
}

impl From<&NewEmployee> for NewEmployeeRow {
    fn from(new: &NewEmployee) -> Self {
        NewEmployeeRow {
            name: new.name.clone(),
            surname: new.surname.clone(),
            position: new.position.clone(),
        }
    }
}

/// Changeset for partial updates. `None` fields are skipped by Diesel,
/// which is exactly the PATCH semantics.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub struct EmployeeChangeset {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub position: Option<String>,
}

impl From<&EmployeeUpdate> for EmployeeChangeset {
    fn from(update: &EmployeeUpdate) -> Self {
        EmployeeChangeset {
            name: update.name.clone(),
            surname: update.surname.clone(),
            position: update.position.clone(),
        }
    }
}
