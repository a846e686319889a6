// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::subject::Subject;
use async_trait::async_trait;
use uuid::Uuid;

/// 科目仓库特质
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// 创建科目
    async fn create(&self, subject: &Subject) -> Result<Subject, RepositoryError>;
    /// 根据ID查找科目
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subject>, RepositoryError>;
    /// 更新科目
    async fn update(&self, subject: &Subject) -> Result<Subject, RepositoryError>;
    /// 删除科目；仍被课程科目引用时返回 `DeleteRestricted`
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出科目，默认不包含已停用的科目
    async fn list(&self, include_inactive: bool) -> Result<Vec<Subject>, RepositoryError>;
}
