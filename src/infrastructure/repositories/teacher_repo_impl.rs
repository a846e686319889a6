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
use crate::domain::models::teacher::{Gender, Teacher};
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::teacher_repository::TeacherRepository;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    country as country_entity, course as course_entity, subject as subject_entity,
    teacher as teacher_entity, teacher_subject as teacher_subject_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 教师仓库实现
///
/// 基于SeaORM实现的教师数据访问层，教师与科目的多对多关系
/// 保存在 teacher_subjects 关联表中
#[derive(Clone)]
pub struct TeacherRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TeacherRepositoryImpl {
    /// 创建新的教师仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn check_before_write(&self, teacher: &Teacher) -> Result<(), RepositoryError> {
        teacher
            .check_constraints()
            .inspect_err(|e| warn!("Rejected teacher {}: {}", teacher.id, e))?;

        if let Some(country_id) = teacher.country_id {
            ensure_exists::<country_entity::Entity, _>(self.db.as_ref(), country_id, "country")
                .await?;
        }
        Ok(())
    }
}

fn to_domain(model: teacher_entity::Model) -> Result<Teacher, RepositoryError> {
    let gender = match model.gender.as_deref() {
        None => None,
        Some(raw) => Some(raw.parse::<Gender>().map_err(|_| {
            RepositoryError::Database(DbErr::Custom(format!(
                "Invalid teacher gender: {}",
                raw
            )))
        })?),
    };

    Ok(Teacher {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        birthdate: model.birthdate,
        tax_id: model.tax_id,
        gender,
        salary: model.salary,
        email: model.email,
        phone: model.phone,
        active: model.active,
        photo: model.photo,
        country_id: model.country_id,
    })
}

impl From<&Teacher> for teacher_entity::ActiveModel {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: Set(teacher.id),
            first_name: Set(teacher.first_name.clone()),
            last_name: Set(teacher.last_name.clone()),
            birthdate: Set(teacher.birthdate),
            tax_id: Set(teacher.tax_id.clone()),
            gender: Set(teacher.gender.map(|g| g.to_string())),
            salary: Set(teacher.salary),
            email: Set(teacher.email.clone()),
            phone: Set(teacher.phone.clone()),
            active: Set(teacher.active),
            photo: Set(teacher.photo.clone()),
            country_id: Set(teacher.country_id),
        }
    }
}

#[async_trait]
impl TeacherRepository for TeacherRepositoryImpl {
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError> {
        self.check_before_write(teacher).await?;

        let model: teacher_entity::ActiveModel = teacher.into();
        model.insert(self.db.as_ref()).await?;
        info!("Created teacher {} ({})", teacher.id, teacher.display_name());
        Ok(teacher.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError> {
        teacher_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn update(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError> {
        ensure_found::<teacher_entity::Entity, _>(self.db.as_ref(), teacher.id).await?;
        self.check_before_write(teacher).await?;

        let model: teacher_entity::ActiveModel = teacher.into();
        model.update(self.db.as_ref()).await?;
        Ok(teacher.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<teacher_entity::Entity, _>(&txn, id).await?;

        let managed = course_entity::Entity::find()
            .filter(course_entity::Column::ManagerId.eq(id))
            .count(&txn)
            .await?;
        if managed > 0 {
            warn!("Refusing to delete teacher {}: manages {} courses", id, managed);
            return Err(RepositoryError::DeleteRestricted {
                entity: "teacher",
                referenced_by: "course",
            });
        }

        teacher_subject_entity::Entity::delete_many()
            .filter(teacher_subject_entity::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        teacher_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!("Deleted teacher {}", id);
        Ok(())
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Teacher>, RepositoryError> {
        let mut query = teacher_entity::Entity::find();
        if !include_inactive {
            query = query.filter(teacher_entity::Column::Active.eq(true));
        }

        query
            .order_by_asc(teacher_entity::Column::LastName)
            .order_by_asc(teacher_entity::Column::FirstName)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn subject_ids(&self, teacher_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        let teacher =
            ensure_found::<teacher_entity::Entity, _>(self.db.as_ref(), teacher_id).await?;

        let subjects = teacher
            .find_related(subject_entity::Entity)
            .order_by_asc(subject_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(subjects.into_iter().map(|s| s.id).collect())
    }

    async fn set_subjects(
        &self,
        teacher_id: Uuid,
        subject_ids: &[Uuid],
    ) -> Result<(), RepositoryError> {
        let mut seen = HashSet::new();
        let unique: Vec<Uuid> = subject_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let txn = self.db.begin().await?;
        ensure_found::<teacher_entity::Entity, _>(&txn, teacher_id).await?;
        for subject_id in &unique {
            ensure_exists::<subject_entity::Entity, _>(&txn, *subject_id, "subject").await?;
        }

        teacher_subject_entity::Entity::delete_many()
            .filter(teacher_subject_entity::Column::TeacherId.eq(teacher_id))
            .exec(&txn)
            .await?;

        if !unique.is_empty() {
            let rows = unique
                .iter()
                .map(|subject_id| teacher_subject_entity::ActiveModel {
                    teacher_id: Set(teacher_id),
                    subject_id: Set(*subject_id),
                });
            teacher_subject_entity::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        debug!("Teacher {} now teaches {} subjects", teacher_id, unique.len());
        Ok(())
    }
}
