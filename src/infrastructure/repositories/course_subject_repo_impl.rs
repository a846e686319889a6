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

use super::reference_check::{ensure_exists, ensure_found};
use crate::domain::models::course_subject::CourseSubject;
use crate::domain::repositories::course_subject_repository::CourseSubjectRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    course as course_entity, course_subject as course_subject_entity, subject as subject_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// 课程科目仓库实现
///
/// 同一课程可以多次关联同一科目，存储层不做唯一性约束
#[derive(Clone)]
pub struct CourseSubjectRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CourseSubjectRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn check_before_write(&self, link: &CourseSubject) -> Result<(), RepositoryError> {
        link.check_constraints()
            .inspect_err(|e| warn!("Rejected course subject {}: {}", link.id, e))?;

        ensure_exists::<course_entity::Entity, _>(self.db.as_ref(), link.course_id, "course")
            .await?;
        ensure_exists::<subject_entity::Entity, _>(self.db.as_ref(), link.subject_id, "subject")
            .await
    }
}

impl From<course_subject_entity::Model> for CourseSubject {
    fn from(model: course_subject_entity::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            subject_id: model.subject_id,
            number: model.number,
        }
    }
}

impl From<&CourseSubject> for course_subject_entity::ActiveModel {
    fn from(link: &CourseSubject) -> Self {
        Self {
            id: Set(link.id),
            course_id: Set(link.course_id),
            subject_id: Set(link.subject_id),
            number: Set(link.number),
        }
    }
}

#[async_trait]
impl CourseSubjectRepository for CourseSubjectRepositoryImpl {
    async fn create(&self, link: &CourseSubject) -> Result<CourseSubject, RepositoryError> {
        self.check_before_write(link).await?;

        let model: course_subject_entity::ActiveModel = link.into();
        model.insert(self.db.as_ref()).await?;
        info!(
            "Linked subject {} to course {} as #{}",
            link.subject_id, link.course_id, link.number
        );
        Ok(link.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseSubject>, RepositoryError> {
        let model = course_subject_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, link: &CourseSubject) -> Result<CourseSubject, RepositoryError> {
        ensure_found::<course_subject_entity::Entity, _>(self.db.as_ref(), link.id).await?;
        self.check_before_write(link).await?;

        let model: course_subject_entity::ActiveModel = link.into();
        model.update(self.db.as_ref()).await?;
        Ok(link.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = course_subject_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        info!("Deleted course subject {}", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CourseSubject>, RepositoryError> {
        let models = course_subject_entity::Entity::find()
            .order_by_asc(course_subject_entity::Column::CourseId)
            .order_by_asc(course_subject_entity::Column::Number)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<CourseSubject>, RepositoryError> {
        let models = course_subject_entity::Entity::find()
            .filter(course_subject_entity::Column::CourseId.eq(course_id))
            .order_by_asc(course_subject_entity::Column::Number)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<CourseSubject>, RepositoryError> {
        let models = course_subject_entity::Entity::find()
            .filter(course_subject_entity::Column::SubjectId.eq(subject_id))
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
