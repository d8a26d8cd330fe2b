//! Integration tests for the SeaORM user repository

use domain_users::*;
use test_utils::{TestDatabase, TestDataBuilder};

#[tokio::test]
async fn test_create_and_find_by_email() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("sql_create_find");

    let user = User::new(
        builder.name("user", "ada"),
        builder.email("ada"),
        &builder.password(),
    )
    .unwrap();
    repo.create(user.clone()).await.unwrap();

    let found = repo.find_by_email(&builder.email("ada")).await.unwrap();
    assert_eq!(found, user);
    assert!(found.compare_password(&builder.password()).is_ok());
}

#[tokio::test]
async fn test_find_by_email_missing() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.connection());

    let err = repo.find_by_email("nobody@example.test").await.unwrap_err();
    assert!(matches!(err, UserError::NotFound(email) if email == "nobody@example.test"));
}

#[tokio::test]
async fn test_duplicate_email_violates_unique_index() {
    let db = TestDatabase::new().await;
    let repo = SqlUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("sql_duplicate");

    let first = User::new("First", builder.email("dup"), "pw-one").unwrap();
    let second = User::new("Second", builder.email("dup"), "pw-two").unwrap();

    repo.create(first.clone()).await.unwrap();
    let err = repo.create(second).await.unwrap_err();
    assert!(matches!(err, UserError::DuplicateEmail(_)));

    // The original row is untouched
    let found = repo.find_by_email(&builder.email("dup")).await.unwrap();
    assert_eq!(found.id, first.id);
}
