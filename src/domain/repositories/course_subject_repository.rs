// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::course_subject::CourseSubject;
use async_trait::async_trait;
use uuid::Uuid;

/// 课程科目仓库特质
#[async_trait]
pub trait CourseSubjectRepository: Send + Sync {
    /// 创建课程科目关联
    async fn create(&self, link: &CourseSubject) -> Result<CourseSubject, RepositoryError>;
    /// 根据ID查找课程科目关联
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseSubject>, RepositoryError>;
    /// 更新课程科目关联
    async fn update(&self, link: &CourseSubject) -> Result<CourseSubject, RepositoryError>;
    /// 删除课程科目关联
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出所有课程科目关联
    async fn list(&self) -> Result<Vec<CourseSubject>, RepositoryError>;
    /// 查找某课程的所有科目关联，按序号排序
    async fn find_by_course(&self, course_id: Uuid)
        -> Result<Vec<CourseSubject>, RepositoryError>;
    /// 查找引用某科目的所有关联
    async fn find_by_subject(&self, subject_id: Uuid)
        -> Result<Vec<CourseSubject>, RepositoryError>;
}
