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

use crate::{
    application::dto::teacher_response::TeacherResponseDto,
    domain::{
        models::teacher::Teacher,
        repositories::{
            course_repository::CourseRepository, repository_error::RepositoryError,
            teacher_repository::TeacherRepository,
        },
    },
};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

/// 教师读取用例
///
/// 组合教师记录、派生字段以及负责课程和可授科目两项反向查询
pub struct TeacherProfileUseCase<TR, CR> {
    teacher_repo: Arc<TR>,
    course_repo: Arc<CR>,
}

impl<TR, CR> TeacherProfileUseCase<TR, CR>
where
    TR: TeacherRepository + 'static,
    CR: CourseRepository + 'static,
{
    pub fn new(teacher_repo: Arc<TR>, course_repo: Arc<CR>) -> Self {
        Self {
            teacher_repo,
            course_repo,
        }
    }

    pub async fn get(
        &self,
        id: Uuid,
        today: NaiveDate,
    ) -> Result<TeacherResponseDto, RepositoryError> {
        let teacher = self
            .teacher_repo
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        self.profile(teacher, today).await
    }

    pub async fn list(
        &self,
        include_inactive: bool,
        today: NaiveDate,
    ) -> Result<Vec<TeacherResponseDto>, RepositoryError> {
        let teachers = self.teacher_repo.list(include_inactive).await?;

        let mut profiles = Vec::with_capacity(teachers.len());
        for teacher in teachers {
            profiles.push(self.profile(teacher, today).await?);
        }
        Ok(profiles)
    }

    /// 为已保存的教师生成读取视图
    pub async fn profile(
        &self,
        teacher: Teacher,
        today: NaiveDate,
    ) -> Result<TeacherResponseDto, RepositoryError> {
        let course_ids = self
            .course_repo
            .find_by_manager(teacher.id)
            .await?
            .into_iter()
            .map(|course| course.id)
            .collect();
        let subject_ids = self.teacher_repo.subject_ids(teacher.id).await?;

        Ok(TeacherResponseDto {
            age: teacher.age(today),
            display_name: teacher.display_name(),
            teacher,
            course_ids,
            subject_ids,
        })
    }
}
