// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::teacher::Teacher;
use async_trait::async_trait;
use uuid::Uuid;

/// 教师仓库特质
///
/// 除基本的增删改查外，还管理教师与科目之间的多对多关系。
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// 创建教师
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError>;
    /// 根据ID查找教师
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError>;
    /// 更新教师
    async fn update(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError>;
    /// 删除教师；仍负责课程时返回 `DeleteRestricted`
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出教师，默认不包含已停用的教师
    async fn list(&self, include_inactive: bool) -> Result<Vec<Teacher>, RepositoryError>;
    /// 教师所教科目的ID列表
    async fn subject_ids(&self, teacher_id: Uuid) -> Result<Vec<Uuid>, RepositoryError>;
    /// 用给定集合替换教师所教的科目
    ///
    /// # 参数
    ///
    /// * `teacher_id` - 教师ID
    /// * `subject_ids` - 新的科目ID集合，重复项会被忽略
    async fn set_subjects(
        &self,
        teacher_id: Uuid,
        subject_ids: &[Uuid],
    ) -> Result<(), RepositoryError>;
}
