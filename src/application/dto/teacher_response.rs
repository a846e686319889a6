// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::Teacher;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 教师读取视图
///
/// 在存储字段之外附带派生字段与反向查询结果
#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherResponseDto {
    #[serde(flatten)]
    pub teacher: Teacher,
    /// 相对当前日期的周岁
    pub age: u32,
    pub display_name: String,
    /// 该教师负责的课程
    pub course_ids: Vec<Uuid>,
    /// 该教师可授的科目
    pub subject_ids: Vec<Uuid>,
}
