//! Repository-level tests against the in-memory backend.

use employees_api::db::repositories::LocalRepository;
use employees_api::db::repository::{EmployeeRepository, RepositoryError};
use employees_api::models::{EmployeeId, EmployeeUpdate, NewEmployee};

fn new_employee(name: &str, surname: &str, position: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        surname: surname.to_string(),
        position: position.to_string(),
    }
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let repo = LocalRepository::new();

    let created = repo
        .create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();
    let fetched = repo.get(created.id).await.unwrap();

    assert_eq!(created, fetched);
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let repo = LocalRepository::new();

    for name in ["Anna", "Boris", "Vera"] {
        repo.create(&new_employee(name, "Petrova", "Analyst"))
            .await
            .unwrap();
    }

    let employees = repo.list().await.unwrap();
    assert_eq!(employees.len(), 3);
    let ids: Vec<i64> = employees.iter().map(|e| e.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_replace_overwrites_all_fields() {
    let repo = LocalRepository::new();
    let created = repo
        .create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();

    let replaced = repo
        .replace(created.id, &new_employee("Ivan", "Ivanov", "Senior Developer"))
        .await
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.position, "Senior Developer");
    assert_eq!(repo.get(created.id).await.unwrap(), replaced);
}

#[tokio::test]
async fn test_replace_missing_is_not_found() {
    let repo = LocalRepository::new();
    let err = repo
        .replace(
            EmployeeId::new(10),
            &new_employee("Ivan", "Ivanov", "Developer"),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_patch_leaves_unsupplied_fields_alone() {
    let repo = LocalRepository::new();
    let created = repo
        .create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();

    let update = EmployeeUpdate {
        position: Some("Team Lead".to_string()),
        ..Default::default()
    };
    let patched = repo.patch(created.id, &update).await.unwrap();

    assert_eq!(patched.name, "Ivan");
    assert_eq!(patched.surname, "Ivanov");
    assert_eq!(patched.position, "Team Lead");
}

#[tokio::test]
async fn test_patch_missing_is_not_found() {
    let repo = LocalRepository::new();
    let update = EmployeeUpdate {
        name: Some("Ivan".to_string()),
        ..Default::default()
    };
    let err = repo.patch(EmployeeId::new(1), &update).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_removes_record() {
    let repo = LocalRepository::new();
    let created = repo
        .create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(!repo.has_employee(created.id));
    let err = repo.get(created.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_all_returns_removed_count() {
    let repo = LocalRepository::new();
    repo.create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();
    repo.create(&new_employee("Pyotr", "Petrov", "Tester"))
        .await
        .unwrap();

    assert_eq!(repo.delete_all().await.unwrap(), 2);
    assert_eq!(repo.employee_count(), 0);

    // Zero removed is a valid outcome, not an error
    assert_eq!(repo.delete_all().await.unwrap(), 0);
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let repo = LocalRepository::new();

    let first = repo
        .create(&new_employee("Ivan", "Ivanov", "Developer"))
        .await
        .unwrap();
    repo.delete(first.id).await.unwrap();
    repo.delete_all().await.unwrap();

    let second = repo
        .create(&new_employee("Pyotr", "Petrov", "Tester"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}
