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

use super::reference_check::ensure_found;
use crate::domain::models::subject::Subject;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::subject_repository::SubjectRepository;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    course_subject as course_subject_entity, subject as subject_entity,
    teacher_subject as teacher_subject_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// 科目仓库实现
#[derive(Clone)]
pub struct SubjectRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SubjectRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<subject_entity::Model> for Subject {
    fn from(model: subject_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            hours: model.hours,
            active: model.active,
        }
    }
}

impl From<&Subject> for subject_entity::ActiveModel {
    fn from(subject: &Subject) -> Self {
        Self {
            id: Set(subject.id),
            name: Set(subject.name.clone()),
            hours: Set(subject.hours),
            active: Set(subject.active),
        }
    }
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryImpl {
    async fn create(&self, subject: &Subject) -> Result<Subject, RepositoryError> {
        subject
            .check_constraints()
            .inspect_err(|e| warn!("Rejected subject {}: {}", subject.id, e))?;

        let model: subject_entity::ActiveModel = subject.into();
        model.insert(self.db.as_ref()).await?;
        info!("Created subject {} ({})", subject.id, subject.name);
        Ok(subject.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subject>, RepositoryError> {
        let model = subject_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, subject: &Subject) -> Result<Subject, RepositoryError> {
        ensure_found::<subject_entity::Entity, _>(self.db.as_ref(), subject.id).await?;
        subject
            .check_constraints()
            .inspect_err(|e| warn!("Rejected subject {}: {}", subject.id, e))?;

        let model: subject_entity::ActiveModel = subject.into();
        model.update(self.db.as_ref()).await?;
        Ok(subject.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<subject_entity::Entity, _>(&txn, id).await?;

        let references = course_subject_entity::Entity::find()
            .filter(course_subject_entity::Column::SubjectId.eq(id))
            .count(&txn)
            .await?;
        if references > 0 {
            warn!(
                "Refusing to delete subject {}: referenced by {} course subjects",
                id, references
            );
            return Err(RepositoryError::DeleteRestricted {
                entity: "subject",
                referenced_by: "course_subject",
            });
        }

        teacher_subject_entity::Entity::delete_many()
            .filter(teacher_subject_entity::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        subject_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!("Deleted subject {}", id);
        Ok(())
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Subject>, RepositoryError> {
        let mut query = subject_entity::Entity::find();
        if !include_inactive {
            query = query.filter(subject_entity::Column::Active.eq(true));
        }

        let models = query
            .order_by_asc(subject_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
