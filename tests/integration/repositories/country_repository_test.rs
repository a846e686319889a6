// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_teacher, setup_db};
use school::domain::models::country::Country;
use school::domain::repositories::{
    country_repository::CountryRepository, repository_error::RepositoryError,
    teacher_repository::TeacherRepository,
};
use school::domain::services::validation_service::ValidationError;
use school::infrastructure::repositories::{
    country_repo_impl::CountryRepositoryImpl, teacher_repo_impl::TeacherRepositoryImpl,
};
use uuid::Uuid;

fn country(code: &str, name: &str) -> Country {
    Country {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_find_by_code_ignores_case() {
    let db = setup_db().await;
    let repo = CountryRepositoryImpl::new(db.clone());

    let saved = repo.create(&country("es", "Spain")).await.unwrap();
    assert_eq!(saved.code, "ES");

    let found = repo.find_by_code("Es").await.unwrap().unwrap();
    assert_eq!(found.id, saved.id);
    assert!(repo.find_by_code("FR").await.unwrap().is_none());
}

#[tokio::test]
async fn test_code_longer_than_two_letters_is_rejected() {
    let db = setup_db().await;
    let repo = CountryRepositoryImpl::new(db.clone());

    let err = repo.create(&country("ESP", "Spain")).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::FieldTooLong { field: "code", max: 2 })
    ));
}

/// 删除国家时教师的国家字段被清空，教师保留
#[tokio::test]
async fn test_delete_clears_teacher_country() {
    let db = setup_db().await;
    let countries = CountryRepositoryImpl::new(db.clone());
    let teachers = TeacherRepositoryImpl::new(db.clone());

    let spain = countries.create(&country("ES", "Spain")).await.unwrap();
    let mut teacher = seed_teacher(&db, "Severo", "Ochoa").await;
    teacher.country_id = Some(spain.id);
    teachers.update(&teacher).await.unwrap();

    countries.delete(spain.id).await.unwrap();

    let stored = teachers.find_by_id(teacher.id).await.unwrap().unwrap();
    assert_eq!(stored.country_id, None);
    assert!(countries.list().await.unwrap().is_empty());
}
