// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::country::Country;
use async_trait::async_trait;
use uuid::Uuid;

/// 国家仓库特质
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn create(&self, country: &Country) -> Result<Country, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, RepositoryError>;
    /// 按 ISO 代码查找，大小写不敏感
    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, RepositoryError>;
    async fn update(&self, country: &Country) -> Result<Country, RepositoryError>;
    /// 删除国家，引用它的教师国家字段被清空
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<Country>, RepositoryError>;
}
