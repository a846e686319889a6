// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::course_edition_request::CourseEditionRequestDto;
use crate::domain::models::course_edition::CourseEdition;
use crate::domain::repositories::course_edition_repository::CourseEditionRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::presentation::errors::AppError;

pub async fn create_edition<R: CourseEditionRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<CourseEditionRequestDto>,
) -> Result<(StatusCode, Json<CourseEdition>), AppError> {
    payload.validate()?;
    let edition = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(edition)))
}

pub async fn get_edition<R: CourseEditionRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseEdition>, AppError> {
    let edition = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(edition))
}

pub async fn update_edition<R: CourseEditionRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CourseEditionRequestDto>,
) -> Result<Json<CourseEdition>, AppError> {
    payload.validate()?;
    Ok(Json(repo.update(&payload.into_domain(id)).await?))
}

pub async fn delete_edition<R: CourseEditionRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_editions<R: CourseEditionRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<CourseEdition>>, AppError> {
    Ok(Json(repo.list().await?))
}
