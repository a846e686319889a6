// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_course, seed_subject, seed_teacher, setup_db};
use school::domain::models::{course_subject::CourseSubject, subject::Subject};
use school::domain::repositories::{
    course_subject_repository::CourseSubjectRepository, repository_error::RepositoryError,
    subject_repository::SubjectRepository, teacher_repository::TeacherRepository,
};
use school::domain::services::validation_service::ValidationError;
use school::infrastructure::repositories::{
    course_subject_repo_impl::CourseSubjectRepositoryImpl, subject_repo_impl::SubjectRepositoryImpl,
    teacher_repo_impl::TeacherRepositoryImpl,
};

#[tokio::test]
async fn test_create_rejects_non_positive_hours() {
    let db = setup_db().await;
    let repo = SubjectRepositoryImpl::new(db.clone());

    let err = repo.create(&Subject::new("Geometry", -4)).await.unwrap_err();

    match err {
        RepositoryError::Validation(ValidationError::InvalidHours(msg)) => {
            assert_eq!(msg, "Subject hours must be positive");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(repo.list(true).await.unwrap().is_empty());
}

/// 被课程引用的科目不能删除，解除引用后可以删除
#[tokio::test]
async fn test_delete_is_restricted_while_referenced() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let subject = seed_subject(&db, "Matrices", 20).await;
    let subjects = SubjectRepositoryImpl::new(db.clone());
    let links = CourseSubjectRepositoryImpl::new(db.clone());

    let link = CourseSubject::new(course.id, subject.id, 1);
    links.create(&link).await.unwrap();

    let err = subjects.delete(subject.id).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::DeleteRestricted {
            entity: "subject",
            referenced_by: "course_subject",
        }
    ));
    assert!(subjects.find_by_id(subject.id).await.unwrap().is_some());

    links.delete(link.id).await.unwrap();
    subjects.delete(subject.id).await.unwrap();
    assert!(subjects.find_by_id(subject.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_teacher_assignments() {
    let db = setup_db().await;
    let teacher = seed_teacher(&db, "Emmy", "Noether").await;
    let keep = seed_subject(&db, "Rings", 30).await;
    let removed = seed_subject(&db, "Fields", 30).await;
    let teachers = TeacherRepositoryImpl::new(db.clone());
    let subjects = SubjectRepositoryImpl::new(db.clone());

    teachers
        .set_subjects(teacher.id, &[keep.id, removed.id])
        .await
        .unwrap();
    subjects.delete(removed.id).await.unwrap();

    assert_eq!(teachers.subject_ids(teacher.id).await.unwrap(), vec![keep.id]);
}
