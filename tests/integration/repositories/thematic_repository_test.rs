// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_course, seed_thematic, setup_db};
use school::domain::models::thematic::Thematic;
use school::domain::repositories::{
    repository_error::RepositoryError, thematic_repository::ThematicRepository,
};
use school::domain::services::validation_service::ValidationError;
use school::infrastructure::repositories::thematic_repo_impl::ThematicRepositoryImpl;
use uuid::Uuid;

#[tokio::test]
async fn test_self_parent_is_cyclic() {
    let db = setup_db().await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    let mut looped = Thematic::new("Loop", None);
    looped.parent_id = Some(looped.id);
    let err = repo.create(&looped).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::CyclicThematic)
    ));
    assert!(repo.find_by_id(looped.id).await.unwrap().is_none());
}

/// 把根节点挂到自己的孙节点下会形成环
#[tokio::test]
async fn test_reparenting_under_descendant_is_cyclic() {
    let db = setup_db().await;
    let science = seed_thematic(&db, "Science", None).await;
    let physics = seed_thematic(&db, "Physics", Some(science.id)).await;
    let optics = seed_thematic(&db, "Optics", Some(physics.id)).await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    let mut moved = science.clone();
    moved.parent_id = Some(optics.id);
    let err = repo.update(&moved).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::CyclicThematic)
    ));
    let stored = repo.find_by_id(science.id).await.unwrap().unwrap();
    assert_eq!(stored.parent_id, None);
}

#[tokio::test]
async fn test_unknown_parent_is_invalid_reference() {
    let db = setup_db().await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    let orphan = Thematic::new("Orphan", Some(Uuid::new_v4()));
    let err = repo.create(&orphan).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::InvalidReference {
            entity: "thematic",
            ..
        }
    ));
}

#[tokio::test]
async fn test_children_and_ancestors() {
    let db = setup_db().await;
    let science = seed_thematic(&db, "Science", None).await;
    let physics = seed_thematic(&db, "Physics", Some(science.id)).await;
    let chemistry = seed_thematic(&db, "Chemistry", Some(science.id)).await;
    let optics = seed_thematic(&db, "Optics", Some(physics.id)).await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    let children: Vec<Uuid> = repo
        .find_children(science.id)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(children, vec![chemistry.id, physics.id]);

    let chain: Vec<Uuid> = repo
        .ancestors(optics.id)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(chain, vec![physics.id, science.id]);

    assert!(repo.ancestors(science.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_is_restricted_by_courses() {
    let db = setup_db().await;
    let course = seed_course(&db, "Algebra").await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    let err = repo.delete(course.thematic_id).await.unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::DeleteRestricted {
            entity: "thematic",
            referenced_by: "course",
        }
    ));
}

/// 删除主题后其子主题成为根主题
#[tokio::test]
async fn test_delete_detaches_children() {
    let db = setup_db().await;
    let science = seed_thematic(&db, "Science", None).await;
    let physics = seed_thematic(&db, "Physics", Some(science.id)).await;
    let repo = ThematicRepositoryImpl::new(db.clone());

    repo.delete(science.id).await.unwrap();

    let stored = repo.find_by_id(physics.id).await.unwrap().unwrap();
    assert_eq!(stored.parent_id, None);
    assert!(matches!(
        repo.delete(science.id).await.unwrap_err(),
        RepositoryError::NotFound
    ));
}
