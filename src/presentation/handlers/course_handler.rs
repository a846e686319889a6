// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use super::ListQuery;
use crate::{
    application::dto::course_request::CourseRequestDto,
    domain::{
        models::{course::Course, course_edition::CourseEdition, course_subject::CourseSubject},
        repositories::{
            course_edition_repository::CourseEditionRepository,
            course_repository::CourseRepository,
            course_subject_repository::CourseSubjectRepository,
            repository_error::RepositoryError,
        },
    },
    presentation::errors::AppError,
};

/// 创建课程
pub async fn create_course<R: CourseRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<CourseRequestDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    payload.validate()?;
    let course = repo.create(&payload.into_domain(Uuid::new_v4())).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// 获取课程详情
pub async fn get_course<R: CourseRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = repo.find_by_id(id).await?.ok_or(RepositoryError::NotFound)?;
    Ok(Json(course))
}

/// 整体替换课程
pub async fn update_course<R: CourseRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CourseRequestDto>,
) -> Result<Json<Course>, AppError> {
    payload.validate()?;
    let course = repo.update(&payload.into_domain(id)).await?;
    Ok(Json(course))
}

/// 删除课程，连同其版本与科目关联
pub async fn delete_course<R: CourseRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_courses<R: CourseRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repo.list(query.include_inactive).await?;
    debug!("Listing {} courses", courses.len());
    Ok(Json(courses))
}

/// 列出课程的所有版本
pub async fn list_course_editions<R, E>(
    Extension(course_repo): Extension<Arc<R>>,
    Extension(edition_repo): Extension<Arc<E>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CourseEdition>>, AppError>
where
    R: CourseRepository + 'static,
    E: CourseEditionRepository + 'static,
{
    if course_repo.find_by_id(id).await?.is_none() {
        return Err(RepositoryError::NotFound.into());
    }
    Ok(Json(edition_repo.find_by_course(id).await?))
}

/// 列出课程的科目关联，按序号排序
pub async fn list_course_subjects<R, CS>(
    Extension(course_repo): Extension<Arc<R>>,
    Extension(link_repo): Extension<Arc<CS>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CourseSubject>>, AppError>
where
    R: CourseRepository + 'static,
    CS: CourseSubjectRepository + 'static,
{
    if course_repo.find_by_id(id).await?.is_none() {
        return Err(RepositoryError::NotFound.into());
    }
    Ok(Json(link_repo.find_by_course(id).await?))
}
