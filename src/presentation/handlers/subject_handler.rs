// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::ListQuery;
use crate::application::dto::subject_request::SubjectRequestDto;
use crate::domain::models::subject::Subject;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::subject_repository::SubjectRepository;
use crate::presentation::errors::AppError;

pub async fn create_subject<R: SubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<SubjectRequestDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    payload.validate()?;
    let subject = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

pub async fn get_subject<R: SubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Subject>, AppError> {
    let subject = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(subject))
}

pub async fn update_subject<R: SubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubjectRequestDto>,
) -> Result<Json<Subject>, AppError> {
    payload.validate()?;
    let subject = repo.update(&payload.into_domain(id)).await?;
    Ok(Json(subject))
}

/// 删除科目；仍被课程引用时返回 409
pub async fn delete_subject<R: SubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_subjects<R: SubjectRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Subject>>, AppError> {
    Ok(Json(repo.list(query.include_inactive).await?))
}
