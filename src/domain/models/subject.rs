// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 科目实体
///
/// 科目通过 CourseSubject 关联到课程；只要仍被引用，科目就不能被删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// 科目唯一标识符
    pub id: Uuid,
    /// 科目名称，最长 60 个字符
    pub name: String,
    /// 课时数，必须为正数
    pub hours: i32,
    /// 是否启用
    pub active: bool,
}

impl Subject {
    pub fn new(name: impl Into<String>, hours: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            hours,
            active: true,
        }
    }
}
