// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{date, seed_course, seed_subject, seed_teacher, setup_db};
use school::domain::models::teacher::{Gender, Teacher};
use school::domain::repositories::{
    repository_error::RepositoryError, teacher_repository::TeacherRepository,
};
use school::domain::services::validation_service::ValidationError;
use school::infrastructure::repositories::teacher_repo_impl::TeacherRepositoryImpl;
use uuid::Uuid;

fn teacher() -> Teacher {
    Teacher::new("Marie", "Curie", date(1967, 11, 7), "marie.curie@school.test")
}

#[tokio::test]
async fn test_create_and_read_back_all_fields() {
    let db = setup_db().await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let mut marie = teacher();
    marie.tax_id = Some("12345678Z".to_string());
    marie.gender = Some(Gender::Female);
    marie.salary = 32_000;
    marie.phone = Some("600123123".to_string());
    marie.photo = Some(vec![0x89, 0x50, 0x4e, 0x47]);
    repo.create(&marie).await.unwrap();

    let stored = repo.find_by_id(marie.id).await.unwrap().unwrap();
    assert_eq!(stored, marie);
    assert_eq!(stored.display_name(), "Curie, Marie");
    assert_eq!(stored.age(date(2025, 11, 6)), 57);
    assert_eq!(stored.age(date(2025, 11, 7)), 58);
}

#[tokio::test]
async fn test_invalid_contact_data_is_rejected() {
    let db = setup_db().await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let mut bad_phone = teacher();
    bad_phone.phone = Some("600-123-123".to_string());
    assert!(matches!(
        repo.create(&bad_phone).await.unwrap_err(),
        RepositoryError::Validation(ValidationError::InvalidPhone)
    ));

    let mut bad_email = teacher();
    bad_email.email = "not-an-address".to_string();
    assert!(matches!(
        repo.create(&bad_email).await.unwrap_err(),
        RepositoryError::Validation(ValidationError::InvalidEmail)
    ));

    let mut bad_salary = teacher();
    bad_salary.salary = -1;
    assert!(matches!(
        repo.create(&bad_salary).await.unwrap_err(),
        RepositoryError::Validation(ValidationError::InvalidSalary)
    ));

    assert!(repo.list(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_country_is_invalid_reference() {
    let db = setup_db().await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let mut marie = teacher();
    marie.country_id = Some(Uuid::new_v4());
    let err = repo.create(&marie).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::InvalidReference {
            entity: "country",
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_orders_by_last_then_first_name() {
    let db = setup_db().await;
    seed_teacher(&db, "Pierre", "Curie").await;
    seed_teacher(&db, "Alan", "Turing").await;
    seed_teacher(&db, "Irene", "Curie").await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let names: Vec<String> = repo
        .list(false)
        .await
        .unwrap()
        .iter()
        .map(Teacher::display_name)
        .collect();

    assert_eq!(names, vec!["Curie, Irene", "Curie, Pierre", "Turing, Alan"]);
}

/// 替换科目集合时重复ID只保存一次
#[tokio::test]
async fn test_set_subjects_replaces_previous_set() {
    let db = setup_db().await;
    let marie = seed_teacher(&db, "Marie", "Curie").await;
    let chemistry = seed_subject(&db, "Chemistry", 60).await;
    let physics = seed_subject(&db, "Physics", 60).await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    repo.set_subjects(marie.id, &[physics.id, chemistry.id, physics.id])
        .await
        .unwrap();
    assert_eq!(
        repo.subject_ids(marie.id).await.unwrap(),
        vec![chemistry.id, physics.id]
    );

    repo.set_subjects(marie.id, &[physics.id]).await.unwrap();
    assert_eq!(repo.subject_ids(marie.id).await.unwrap(), vec![physics.id]);

    repo.set_subjects(marie.id, &[]).await.unwrap();
    assert!(repo.subject_ids(marie.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_subjects_with_unknown_subject_keeps_old_set() {
    let db = setup_db().await;
    let marie = seed_teacher(&db, "Marie", "Curie").await;
    let physics = seed_subject(&db, "Physics", 60).await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    repo.set_subjects(marie.id, &[physics.id]).await.unwrap();
    let err = repo
        .set_subjects(marie.id, &[Uuid::new_v4()])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::InvalidReference {
            entity: "subject",
            ..
        }
    ));
    assert_eq!(repo.subject_ids(marie.id).await.unwrap(), vec![physics.id]);
}

#[tokio::test]
async fn test_delete_is_restricted_while_managing_courses() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    let err = repo.delete(course.manager_id).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::DeleteRestricted {
            entity: "teacher",
            referenced_by: "course",
        }
    ));
    assert!(repo.find_by_id(course.manager_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_removes_subject_assignments() {
    let db = setup_db().await;
    let marie = seed_teacher(&db, "Marie", "Curie").await;
    let physics = seed_subject(&db, "Physics", 60).await;
    let repo = TeacherRepositoryImpl::new(db.clone());

    repo.set_subjects(marie.id, &[physics.id]).await.unwrap();
    repo.delete(marie.id).await.unwrap();

    assert!(repo.find_by_id(marie.id).await.unwrap().is_none());
    assert!(matches!(
        repo.subject_ids(marie.id).await.unwrap_err(),
        RepositoryError::NotFound
    ));
}
