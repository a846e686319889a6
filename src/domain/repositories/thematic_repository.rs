// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::thematic::Thematic;
use async_trait::async_trait;
use uuid::Uuid;

/// 主题仓库特质
///
/// 创建和更新时检查父链是否有环。
#[async_trait]
pub trait ThematicRepository: Send + Sync {
    /// 创建主题
    async fn create(&self, thematic: &Thematic) -> Result<Thematic, RepositoryError>;
    /// 根据ID查找主题
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Thematic>, RepositoryError>;
    /// 更新主题
    async fn update(&self, thematic: &Thematic) -> Result<Thematic, RepositoryError>;
    /// 删除主题；仍有课程引用时返回 `DeleteRestricted`，子主题的父引用被清空
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出所有主题
    async fn list(&self) -> Result<Vec<Thematic>, RepositoryError>;
    /// 查找直接子主题
    async fn find_children(&self, parent_id: Uuid) -> Result<Vec<Thematic>, RepositoryError>;
    /// 从父主题到根主题的祖先链
    async fn ancestors(&self, id: Uuid) -> Result<Vec<Thematic>, RepositoryError>;
}
