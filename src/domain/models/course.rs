// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 课程实体
///
/// 课程属于一个主题（必填），由一名教师负责管理（必填）。
/// 课程版本（CourseEdition）与课程科目（CourseSubject）随课程级联删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// 课程唯一标识符
    pub id: Uuid,
    /// 课程名称，最长 60 个字符
    pub name: String,
    /// 课时数，必须为正数
    pub hours: i32,
    /// 是否启用
    pub active: bool,
    /// 课程简介
    pub summary: Option<String>,
    /// 负责教师ID
    pub manager_id: Uuid,
    /// 所属主题ID
    pub thematic_id: Uuid,
}

impl Course {
    /// 创建一个启用状态的新课程，自动生成ID
    pub fn new(name: impl Into<String>, hours: i32, manager_id: Uuid, thematic_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            hours,
            active: true,
            summary: None,
            manager_id,
            thematic_id,
        }
    }
}
