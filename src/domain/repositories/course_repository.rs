// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use crate::domain::models::course::Course;
use async_trait::async_trait;
use uuid::Uuid;

/// 课程仓库特质
///
/// 定义课程数据访问接口。写入前执行约束检查，
/// 删除课程时级联删除其课程版本与课程科目。
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// 创建课程
    ///
    /// # 参数
    ///
    /// * `course` - 要创建的课程实体
    ///
    /// # 返回值
    ///
    /// * `Ok(Course)` - 成功创建后返回课程
    /// * `Err(RepositoryError::Validation)` - 课程未通过约束检查
    /// * `Err(RepositoryError::InvalidReference)` - 负责教师或主题不存在
    async fn create(&self, course: &Course) -> Result<Course, RepositoryError>;

    /// 根据ID查找课程
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError>;

    /// 更新课程
    async fn update(&self, course: &Course) -> Result<Course, RepositoryError>;

    /// 删除课程，同时删除其课程版本与课程科目
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 列出课程，默认不包含已停用的课程
    async fn list(&self, include_inactive: bool) -> Result<Vec<Course>, RepositoryError>;

    /// 查找某教师负责的所有课程
    async fn find_by_manager(&self, teacher_id: Uuid) -> Result<Vec<Course>, RepositoryError>;

    /// 查找某主题下的所有课程
    async fn find_by_thematic(&self, thematic_id: Uuid) -> Result<Vec<Course>, RepositoryError>;
}
