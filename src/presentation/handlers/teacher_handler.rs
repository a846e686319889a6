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
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::ListQuery;
use crate::{
    application::{
        dto::{
            teacher_request::{SetSubjectsDto, TeacherRequestDto},
            teacher_response::TeacherResponseDto,
        },
        use_cases::teacher_profile_use_case::TeacherProfileUseCase,
    },
    domain::{
        models::course::Course,
        repositories::{
            course_repository::CourseRepository, repository_error::RepositoryError,
            teacher_repository::TeacherRepository,
        },
    },
    presentation::errors::AppError,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 创建教师
pub async fn create_teacher<TR, CR>(
    Extension(teacher_repo): Extension<Arc<TR>>,
    Extension(course_repo): Extension<Arc<CR>>,
    Json(payload): Json<TeacherRequestDto>,
) -> Result<(StatusCode, Json<TeacherResponseDto>), AppError>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    payload.validate()?;
    let teacher = teacher_repo
        .create(&payload.into_domain(Uuid::new_v4()))
        .await?;

    let use_case = TeacherProfileUseCase::new(teacher_repo, course_repo);
    let profile = use_case.profile(teacher, today()).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// 获取教师详情，附带年龄与显示名
pub async fn get_teacher<TR, CR>(
    Extension(teacher_repo): Extension<Arc<TR>>,
    Extension(course_repo): Extension<Arc<CR>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherResponseDto>, AppError>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    let use_case = TeacherProfileUseCase::new(teacher_repo, course_repo);
    Ok(Json(use_case.get(id, today()).await?))
}

/// 整体替换教师
pub async fn update_teacher<TR, CR>(
    Extension(teacher_repo): Extension<Arc<TR>>,
    Extension(course_repo): Extension<Arc<CR>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeacherRequestDto>,
) -> Result<Json<TeacherResponseDto>, AppError>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    payload.validate()?;
    let teacher = teacher_repo.update(&payload.into_domain(id)).await?;

    let use_case = TeacherProfileUseCase::new(teacher_repo, course_repo);
    Ok(Json(use_case.profile(teacher, today()).await?))
}

/// 删除教师；仍负责课程时返回 409
pub async fn delete_teacher<TR: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<TR>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_teachers<TR, CR>(
    Extension(teacher_repo): Extension<Arc<TR>>,
    Extension(course_repo): Extension<Arc<CR>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TeacherResponseDto>>, AppError>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    let use_case = TeacherProfileUseCase::new(teacher_repo, course_repo);
    Ok(Json(use_case.list(query.include_inactive, today()).await?))
}

/// 列出教师负责的课程
pub async fn list_teacher_courses<TR, CR>(
    Extension(teacher_repo): Extension<Arc<TR>>,
    Extension(course_repo): Extension<Arc<CR>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Course>>, AppError>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    if teacher_repo.find_by_id(id).await?.is_none() {
        return Err(RepositoryError::NotFound.into());
    }
    Ok(Json(course_repo.find_by_manager(id).await?))
}

/// 替换教师可授科目集合，返回替换后的科目ID
pub async fn set_teacher_subjects<TR: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<TR>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetSubjectsDto>,
) -> Result<Json<Vec<Uuid>>, AppError> {
    repo.set_subjects(id, &payload.subject_ids).await?;
    Ok(Json(repo.subject_ids(id).await?))
}
