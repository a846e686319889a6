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
use crate::domain::models::course::Course;
use crate::domain::repositories::course_repository::CourseRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    course as course_entity, course_edition as course_edition_entity,
    course_subject as course_subject_entity, teacher as teacher_entity,
    thematic as thematic_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// 课程仓库实现
#[derive(Clone)]
pub struct CourseRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryImpl {
    /// 创建新的课程仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 写入前检查：约束规则与必填引用
    async fn check_before_write(&self, course: &Course) -> Result<(), RepositoryError> {
        course
            .check_constraints()
            .inspect_err(|e| warn!("Rejected course {}: {}", course.id, e))?;

        ensure_exists::<teacher_entity::Entity, _>(self.db.as_ref(), course.manager_id, "teacher")
            .await?;
        ensure_exists::<thematic_entity::Entity, _>(
            self.db.as_ref(),
            course.thematic_id,
            "thematic",
        )
        .await
    }
}

impl From<course_entity::Model> for Course {
    fn from(model: course_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            hours: model.hours,
            active: model.active,
            summary: model.summary,
            manager_id: model.manager_id,
            thematic_id: model.thematic_id,
        }
    }
}

impl From<&Course> for course_entity::ActiveModel {
    fn from(course: &Course) -> Self {
        Self {
            id: Set(course.id),
            name: Set(course.name.clone()),
            hours: Set(course.hours),
            active: Set(course.active),
            summary: Set(course.summary.clone()),
            manager_id: Set(course.manager_id),
            thematic_id: Set(course.thematic_id),
        }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryImpl {
    async fn create(&self, course: &Course) -> Result<Course, RepositoryError> {
        self.check_before_write(course).await?;

        let model: course_entity::ActiveModel = course.into();
        model.insert(self.db.as_ref()).await?;
        info!("Created course {} ({})", course.id, course.name);
        Ok(course.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError> {
        let model = course_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, course: &Course) -> Result<Course, RepositoryError> {
        ensure_found::<course_entity::Entity, _>(self.db.as_ref(), course.id).await?;
        self.check_before_write(course).await?;

        let model: course_entity::ActiveModel = course.into();
        model.update(self.db.as_ref()).await?;
        Ok(course.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<course_entity::Entity, _>(&txn, id).await?;

        // Cascade: editions and subject links go with the course
        let editions = course_edition_entity::Entity::delete_many()
            .filter(course_edition_entity::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        let links = course_subject_entity::Entity::delete_many()
            .filter(course_subject_entity::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        course_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(
            "Deleted course {} with {} editions and {} subject links",
            id, editions.rows_affected, links.rows_affected
        );
        Ok(())
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Course>, RepositoryError> {
        let mut query = course_entity::Entity::find();
        if !include_inactive {
            query = query.filter(course_entity::Column::Active.eq(true));
        }

        let models = query
            .order_by_asc(course_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_manager(&self, teacher_id: Uuid) -> Result<Vec<Course>, RepositoryError> {
        let models = course_entity::Entity::find()
            .filter(course_entity::Column::ManagerId.eq(teacher_id))
            .order_by_asc(course_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_thematic(&self, thematic_id: Uuid) -> Result<Vec<Course>, RepositoryError> {
        let models = course_entity::Entity::find()
            .filter(course_entity::Column::ThematicId.eq(thematic_id))
            .order_by_asc(course_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
