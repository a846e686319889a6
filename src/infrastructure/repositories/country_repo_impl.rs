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
use crate::domain::models::country::Country;
use crate::domain::repositories::country_repository::CountryRepository;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::services::validation_service::Constrained;
use crate::infrastructure::database::entities::{
    country as country_entity, teacher as teacher_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct CountryRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CountryRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<country_entity::Model> for Country {
    fn from(model: country_entity::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
        }
    }
}

// Codes are stored upper-case
impl From<&Country> for country_entity::ActiveModel {
    fn from(country: &Country) -> Self {
        Self {
            id: Set(country.id),
            code: Set(country.code.to_uppercase()),
            name: Set(country.name.clone()),
        }
    }
}

#[async_trait]
impl CountryRepository for CountryRepositoryImpl {
    async fn create(&self, country: &Country) -> Result<Country, RepositoryError> {
        country
            .check_constraints()
            .inspect_err(|e| warn!("Rejected country {}: {}", country.id, e))?;

        let model: country_entity::ActiveModel = country.into();
        let saved = model.insert(self.db.as_ref()).await?;
        info!("Created country {} ({})", saved.code, saved.name);
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, RepositoryError> {
        let model = country_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, RepositoryError> {
        let model = country_entity::Entity::find()
            .filter(country_entity::Column::Code.eq(code.to_uppercase()))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, country: &Country) -> Result<Country, RepositoryError> {
        ensure_found::<country_entity::Entity, _>(self.db.as_ref(), country.id).await?;
        country
            .check_constraints()
            .inspect_err(|e| warn!("Rejected country {}: {}", country.id, e))?;

        let model: country_entity::ActiveModel = country.into();
        let saved = model.update(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_found::<country_entity::Entity, _>(&txn, id).await?;

        let cleared = teacher_entity::Entity::update_many()
            .set(teacher_entity::ActiveModel {
                country_id: Set(None),
                ..Default::default()
            })
            .filter(teacher_entity::Column::CountryId.eq(id))
            .exec(&txn)
            .await?;
        country_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(
            "Deleted country {}, cleared it from {} teachers",
            id, cleared.rows_affected
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Country>, RepositoryError> {
        let models = country_entity::Entity::find()
            .order_by_asc(country_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
