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
use crate::domain::models::thematic::Thematic;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::thematic_repository::ThematicRepository;
use crate::domain::services::validation_service::{validate_thematic_hierarchy, Constrained};
use crate::infrastructure::database::entities::{
    course as course_entity, thematic as thematic_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// 主题仓库实现
///
/// 写入前加载全部主题的父引用，叠加候选主题后检查父链是否有环
#[derive(Clone)]
pub struct ThematicRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ThematicRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn parent_map<C: ConnectionTrait>(
        conn: &C,
    ) -> Result<HashMap<Uuid, Option<Uuid>>, RepositoryError> {
        let models = thematic_entity::Entity::find().all(conn).await?;
        Ok(models.into_iter().map(|m| (m.id, m.parent_id)).collect())
    }

    async fn check_before_write<C: ConnectionTrait>(
        conn: &C,
        thematic: &Thematic,
    ) -> Result<(), RepositoryError> {
        thematic
            .check_constraints()
            .inspect_err(|e| warn!("Rejected thematic {}: {}", thematic.id, e))?;

        let parents = Self::parent_map(conn).await?;
        validate_thematic_hierarchy(thematic.id, thematic.parent_id, |id| {
            parents.get(&id).copied().flatten()
        })
        .inspect_err(|e| warn!("Rejected thematic {}: {}", thematic.id, e))?;

        if let Some(parent_id) = thematic.parent_id {
            if !parents.contains_key(&parent_id) {
                return Err(RepositoryError::InvalidReference {
                    entity: "thematic",
                    id: parent_id,
                });
            }
        }
        Ok(())
    }
}

impl From<thematic_entity::Model> for Thematic {
    fn from(model: thematic_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            parent_id: model.parent_id,
        }
    }
}

impl From<&Thematic> for thematic_entity::ActiveModel {
    fn from(thematic: &Thematic) -> Self {
        Self {
            id: Set(thematic.id),
            name: Set(thematic.name.clone()),
            parent_id: Set(thematic.parent_id),
        }
    }
}

#[async_trait]
impl ThematicRepository for ThematicRepositoryImpl {
    async fn create(&self, thematic: &Thematic) -> Result<Thematic, RepositoryError> {
        let txn = self.db.begin().await?;
        Self::check_before_write(&txn, thematic).await?;

        let model: thematic_entity::ActiveModel = thematic.into();
        model.insert(&txn).await?;
        txn.commit().await?;

        info!("Created thematic {} ({})", thematic.id, thematic.name);
        Ok(thematic.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Thematic>, RepositoryError> {
        let model = thematic_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, thematic: &Thematic) -> Result<Thematic, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<thematic_entity::Entity, _>(&txn, thematic.id).await?;
        Self::check_before_write(&txn, thematic).await?;

        let model: thematic_entity::ActiveModel = thematic.into();
        model.update(&txn).await?;
        txn.commit().await?;
        Ok(thematic.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<thematic_entity::Entity, _>(&txn, id).await?;

        let courses = course_entity::Entity::find()
            .filter(course_entity::Column::ThematicId.eq(id))
            .count(&txn)
            .await?;
        if courses > 0 {
            warn!("Refusing to delete thematic {}: used by {} courses", id, courses);
            return Err(RepositoryError::DeleteRestricted {
                entity: "thematic",
                referenced_by: "course",
            });
        }

        // Children become roots
        thematic_entity::Entity::update_many()
            .set(thematic_entity::ActiveModel {
                parent_id: Set(None),
                ..Default::default()
            })
            .filter(thematic_entity::Column::ParentId.eq(id))
            .exec(&txn)
            .await?;
        thematic_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!("Deleted thematic {}", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Thematic>, RepositoryError> {
        let models = thematic_entity::Entity::find()
            .order_by_asc(thematic_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Thematic>, RepositoryError> {
        let models = thematic_entity::Entity::find()
            .filter(thematic_entity::Column::ParentId.eq(parent_id))
            .order_by_asc(thematic_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn ancestors(&self, id: Uuid) -> Result<Vec<Thematic>, RepositoryError> {
        let all: HashMap<Uuid, thematic_entity::Model> = thematic_entity::Entity::find()
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let start = all.get(&id).ok_or(RepositoryError::NotFound)?;
        let mut visited = HashSet::from([id]);
        let mut chain = Vec::new();
        let mut current = start.parent_id;

        while let Some(ancestor_id) = current {
            if !visited.insert(ancestor_id) {
                break;
            }
            match all.get(&ancestor_id) {
                Some(ancestor) => {
                    current = ancestor.parent_id;
                    chain.push(ancestor.clone().into());
                }
                None => break,
            }
        }

        Ok(chain)
    }
}
