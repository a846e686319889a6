// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::course_edition::CourseEdition;
use async_trait::async_trait;
use uuid::Uuid;

/// 课程版本仓库特质
#[async_trait]
pub trait CourseEditionRepository: Send + Sync {
    /// 创建课程版本
    async fn create(&self, edition: &CourseEdition) -> Result<CourseEdition, RepositoryError>;
    /// 根据ID查找课程版本
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseEdition>, RepositoryError>;
    /// 更新课程版本
    async fn update(&self, edition: &CourseEdition) -> Result<CourseEdition, RepositoryError>;
    /// 删除课程版本
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出所有课程版本
    async fn list(&self) -> Result<Vec<CourseEdition>, RepositoryError>;
    /// 查找某课程的所有版本，按开始日期排序
    async fn find_by_course(&self, course_id: Uuid)
        -> Result<Vec<CourseEdition>, RepositoryError>;
}
