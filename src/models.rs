//! Domain types for the employee service.
//!
//! `Employee` is the only persisted entity. The companion types `NewEmployee`
//! and `EmployeeUpdate` carry validated input for create/replace and for
//! partial updates respectively, so handlers never poke at raw JSON maps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee identifier (database primary key).
///
/// Assigned by the repository on create and never reused after deletion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "http-server", derive(utoipa::ToSchema), schema(value_type = i64))]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        EmployeeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted employee record.
///
/// Field declaration order is the JSON serialization order:
/// `id, name, surname, position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "http-server", derive(utoipa::ToSchema))]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub surname: String,
    pub position: String,
}

/// Validated input for creating an employee or fully replacing one.
///
/// All fields are guaranteed non-empty; validation happens at the HTTP
/// boundary before this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub position: String,
}

/// Partial update for an employee.
///
/// A `None` field is left unchanged; a `Some` field overwrites the stored
/// value verbatim. Presence is what matters, not the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub position: Option<String>,
}

impl EmployeeUpdate {
    /// True when no field is supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.position.is_none()
    }

    /// Apply the supplied fields to an existing record.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(surname) = &self.surname {
            employee.surname = surname.clone();
        }
        if let Some(position) = &self.position {
            employee.position = position.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: EmployeeId::new(1),
            name: "Ivan".to_string(),
            surname: "Ivanov".to_string(),
            position: "Developer".to_string(),
        }
    }

    #[test]
    fn test_employee_serialization_field_order() {
        let json = serde_json::to_string(&sample_employee()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Ivan","surname":"Ivanov","position":"Developer"}"#
        );
    }

    #[test]
    fn test_employee_id_is_transparent_in_json() {
        let employee = sample_employee();
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["id"], serde_json::json!(1));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(EmployeeUpdate::default().is_empty());

        let update = EmployeeUpdate {
            position: Some("Team Lead".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut employee = sample_employee();
        let update = EmployeeUpdate {
            position: Some("Team Lead".to_string()),
            ..Default::default()
        };

        update.apply_to(&mut employee);

        assert_eq!(employee.name, "Ivan");
        assert_eq!(employee.surname, "Ivanov");
        assert_eq!(employee.position, "Team Lead");
    }

    #[test]
    fn test_update_applies_present_value_verbatim() {
        // Presence decides: an explicitly supplied empty string overwrites.
        let mut employee = sample_employee();
        let update = EmployeeUpdate {
            name: Some(String::new()),
            ..Default::default()
        };

        update.apply_to(&mut employee);

        assert_eq!(employee.name, "");
        assert_eq!(employee.surname, "Ivanov");
    }
}
