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
use crate::domain::models::course_edition::CourseEdition;
use crate::domain::repositories::course_edition_repository::CourseEditionRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    course as course_entity, course_edition as course_edition_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// 课程版本仓库实现
#[derive(Clone)]
pub struct CourseEditionRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CourseEditionRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn check_before_write(&self, edition: &CourseEdition) -> Result<(), RepositoryError> {
        edition
            .check_constraints()
            .inspect_err(|e| warn!("Rejected course edition {}: {}", edition.id, e))?;
        ensure_exists::<course_entity::Entity, _>(self.db.as_ref(), edition.course_id, "course")
            .await
    }
}

impl From<course_edition_entity::Model> for CourseEdition {
    fn from(model: course_edition_entity::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            name: model.name,
            date_start: model.date_start,
            date_end: model.date_end,
        }
    }
}

impl From<&CourseEdition> for course_edition_entity::ActiveModel {
    fn from(edition: &CourseEdition) -> Self {
        Self {
            id: Set(edition.id),
            course_id: Set(edition.course_id),
            name: Set(edition.name.clone()),
            date_start: Set(edition.date_start),
            date_end: Set(edition.date_end),
        }
    }
}

#[async_trait]
impl CourseEditionRepository for CourseEditionRepositoryImpl {
    async fn create(&self, edition: &CourseEdition) -> Result<CourseEdition, RepositoryError> {
        self.check_before_write(edition).await?;

        let model: course_edition_entity::ActiveModel = edition.into();
        model.insert(self.db.as_ref()).await?;
        info!(
            "Created edition {} ({}) of course {}",
            edition.id, edition.name, edition.course_id
        );
        Ok(edition.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseEdition>, RepositoryError> {
        let model = course_edition_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, edition: &CourseEdition) -> Result<CourseEdition, RepositoryError> {
        ensure_found::<course_edition_entity::Entity, _>(self.db.as_ref(), edition.id).await?;
        self.check_before_write(edition).await?;

        let model: course_edition_entity::ActiveModel = edition.into();
        model.update(self.db.as_ref()).await?;
        Ok(edition.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = course_edition_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        info!("Deleted course edition {}", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CourseEdition>, RepositoryError> {
        let models = course_edition_entity::Entity::find()
            .order_by_asc(course_edition_entity::Column::DateStart)
            .order_by_asc(course_edition_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<CourseEdition>, RepositoryError> {
        let models = course_edition_entity::Entity::find()
            .filter(course_edition_entity::Column::CourseId.eq(course_id))
            .order_by_asc(course_edition_entity::Column::DateStart)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
