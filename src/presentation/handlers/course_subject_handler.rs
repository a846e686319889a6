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

use crate::application::dto::course_subject_request::CourseSubjectRequestDto;
use crate::domain::models::course_subject::CourseSubject;
use crate::domain::repositories::course_subject_repository::CourseSubjectRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::presentation::errors::AppError;

pub async fn create_course_subject<R: CourseSubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<CourseSubjectRequestDto>,
) -> Result<(StatusCode, Json<CourseSubject>), AppError> {
    payload.validate()?;
    let link = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn get_course_subject<R: CourseSubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseSubject>, AppError> {
    let link = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(link))
}

pub async fn update_course_subject<R: CourseSubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CourseSubjectRequestDto>,
) -> Result<Json<CourseSubject>, AppError> {
    payload.validate()?;
    Ok(Json(repo.update(&payload.into_domain(id)).await?))
}

pub async fn delete_course_subject<R: CourseSubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_course_subjects<R: CourseSubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<CourseSubject>>, AppError> {
    Ok(Json(repo.list().await?))
}
