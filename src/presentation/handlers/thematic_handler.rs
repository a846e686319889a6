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

use crate::application::dto::thematic_request::ThematicRequestDto;
use crate::domain::models::thematic::Thematic;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::thematic_repository::ThematicRepository;
use crate::presentation::errors::AppError;

/// 创建主题；父链成环时返回 400
pub async fn create_thematic<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<ThematicRequestDto>,
) -> Result<(StatusCode, Json<Thematic>), AppError> {
    payload.validate()?;
    let thematic = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(thematic)))
}

pub async fn get_thematic<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Thematic>, AppError> {
    let thematic = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(thematic))
}

pub async fn update_thematic<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ThematicRequestDto>,
) -> Result<Json<Thematic>, AppError> {
    payload.validate()?;
    let thematic = repo.update(&payload.into_domain(id)).await?;
    Ok(Json(thematic))
}

pub async fn delete_thematic<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_thematics<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Thematic>>, AppError> {
    Ok(Json(repo.list().await?))
}

pub async fn list_thematic_children<R: ThematicRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Thematic>>, AppError> {
    if repo.find_by_id(id).await?.is_none() {
        return Err(RepositoryError::NotFound.into());
    }
    Ok(Json(repo.find_children(id).await?))
}
