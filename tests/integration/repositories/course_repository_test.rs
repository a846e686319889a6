// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{date, seed_course, seed_subject, seed_teacher, seed_thematic, setup_db};
use school::domain::models::{
    course::Course, course_edition::CourseEdition, course_subject::CourseSubject,
};
use school::domain::repositories::{
    course_edition_repository::CourseEditionRepository, course_repository::CourseRepository,
    course_subject_repository::CourseSubjectRepository, repository_error::RepositoryError,
};
use school::domain::services::validation_service::ValidationError;
use school::infrastructure::repositories::{
    course_edition_repo_impl::CourseEditionRepositoryImpl, course_repo_impl::CourseRepositoryImpl,
    course_subject_repo_impl::CourseSubjectRepositoryImpl,
};
use uuid::Uuid;

/// 课时非正数的课程不会被写入
#[tokio::test]
async fn test_create_rejects_non_positive_hours() {
    let db = setup_db().await;
    let manager = seed_teacher(&db, "Grace", "Hopper").await;
    let thematic = seed_thematic(&db, "Computing", None).await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let course = Course::new("Compilers", 0, manager.id, thematic.id);
    let err = repo.create(&course).await.unwrap_err();

    match err {
        RepositoryError::Validation(ValidationError::InvalidHours(msg)) => {
            assert_eq!(msg, "Course hours must be positive");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(repo.find_by_id(course.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_requires_existing_manager() {
    let db = setup_db().await;
    let thematic = seed_thematic(&db, "Computing", None).await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let ghost = Uuid::new_v4();
    let err = repo
        .create(&Course::new("Compilers", 40, ghost, thematic.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::InvalidReference { entity: "teacher", id } if id == ghost
    ));
}

#[tokio::test]
async fn test_update_and_lookups() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let mut changed = course.clone();
    changed.summary = Some("Linear and abstract".to_string());
    changed.hours = 90;
    repo.update(&changed).await.unwrap();

    let stored = repo.find_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(stored, changed);

    let managed = repo.find_by_manager(course.manager_id).await.unwrap();
    assert_eq!(managed.len(), 1);
    let by_thematic = repo.find_by_thematic(course.thematic_id).await.unwrap();
    assert_eq!(by_thematic[0].id, course.id);
}

#[tokio::test]
async fn test_update_missing_course_is_not_found() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let mut stranger = course.clone();
    stranger.id = Uuid::new_v4();
    let err = repo.update(&stranger).await.unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn test_list_hides_inactive_courses() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let mut archived = Course::new("Latin", 30, course.manager_id, course.thematic_id);
    archived.active = false;
    repo.create(&archived).await.unwrap();

    let active = repo.list(false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, course.id);

    let all = repo.list(true).await.unwrap();
    assert_eq!(all.len(), 2);
}

/// 删除课程时其版本与科目关联一并删除，科目本身保留
#[tokio::test]
async fn test_delete_cascades_to_editions_and_links() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let subject = seed_subject(&db, "Matrices", 20).await;

    let editions = CourseEditionRepositoryImpl::new(db.clone());
    let links = CourseSubjectRepositoryImpl::new(db.clone());
    let courses = CourseRepositoryImpl::new(db.clone());

    let edition = CourseEdition::new(course.id, "2025-2026", date(2025, 9, 1), None);
    editions.create(&edition).await.unwrap();
    let link = CourseSubject::new(course.id, subject.id, 1);
    links.create(&link).await.unwrap();

    courses.delete(course.id).await.unwrap();

    assert!(courses.find_by_id(course.id).await.unwrap().is_none());
    assert!(editions.find_by_id(edition.id).await.unwrap().is_none());
    assert!(links.find_by_id(link.id).await.unwrap().is_none());
    assert!(links.find_by_subject(subject.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_course_is_not_found() {
    let db = setup_db().await;
    let repo = CourseRepositoryImpl::new(db.clone());

    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn test_edition_date_range_is_checked() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = CourseEditionRepositoryImpl::new(db.clone());

    let backwards = CourseEdition::new(
        course.id,
        "Broken",
        date(2025, 9, 1),
        Some(date(2025, 8, 31)),
    );
    let err = repo.create(&backwards).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::InvalidDateRange)
    ));

    let same_day = CourseEdition::new(
        course.id,
        "Intensive",
        date(2025, 9, 1),
        Some(date(2025, 9, 1)),
    );
    repo.create(&same_day).await.unwrap();
}

#[tokio::test]
async fn test_editions_are_ordered_by_start_date() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = CourseEditionRepositoryImpl::new(db.clone());

    let later = CourseEdition::new(course.id, "2026-2027", date(2026, 9, 1), None);
    let earlier = CourseEdition::new(course.id, "2025-2026", date(2025, 9, 1), None);
    repo.create(&later).await.unwrap();
    repo.create(&earlier).await.unwrap();

    let found = repo.find_by_course(course.id).await.unwrap();
    let names: Vec<&str> = found.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["2025-2026", "2026-2027"]);
}

#[tokio::test]
async fn test_edition_requires_existing_course() {
    let db = setup_db().await;
    let repo = CourseEditionRepositoryImpl::new(db.clone());

    let orphan = CourseEdition::new(Uuid::new_v4(), "2025-2026", date(2025, 9, 1), None);
    let err = repo.create(&orphan).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::InvalidReference {
            entity: "course",
            ..
        }
    ));
}

#[tokio::test]
async fn test_course_subject_number_must_be_positive() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let subject = seed_subject(&db, "Matrices", 20).await;
    let repo = CourseSubjectRepositoryImpl::new(db.clone());

    let err = repo
        .create(&CourseSubject::new(course.id, subject.id, 0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::InvalidNumber)
    ));
}

/// 同一课程可以多次关联同一科目
#[tokio::test]
async fn test_same_subject_can_be_linked_twice() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let subject = seed_subject(&db, "Matrices", 20).await;
    let repo = CourseSubjectRepositoryImpl::new(db.clone());

    repo.create(&CourseSubject::new(course.id, subject.id, 2))
        .await
        .unwrap();
    repo.create(&CourseSubject::new(course.id, subject.id, 1))
        .await
        .unwrap();

    let links = repo.find_by_course(course.id).await.unwrap();
    let numbers: Vec<i32> = links.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(repo.find_by_subject(subject.id).await.unwrap().len(), 2);
}
