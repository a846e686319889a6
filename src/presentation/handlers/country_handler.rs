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

use crate::application::dto::country_request::CountryRequestDto;
use crate::domain::models::country::Country;
use crate::domain::repositories::country_repository::CountryRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::presentation::errors::AppError;

pub async fn create_country<R: CountryRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<CountryRequestDto>,
) -> Result<(StatusCode, Json<Country>), AppError> {
    payload.validate()?;
    let country = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

pub async fn get_country<R: CountryRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Country>, AppError> {
    let country = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(country))
}

pub async fn update_country<R: CountryRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CountryRequestDto>,
) -> Result<Json<Country>, AppError> {
    payload.validate()?;
    Ok(Json(repo.update(&payload.into_domain(id)).await?))
}

/// 删除国家，引用它的教师国家字段被清空
pub async fn delete_country<R: CountryRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_countries<R: CountryRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Country>>, AppError> {
    Ok(Json(repo.list().await?))
}
