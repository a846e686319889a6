// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::course::Course;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建或替换课程的请求体
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CourseRequestDto {
    #[validate(length(max = 60))]
    pub name: String,
    pub hours: i32,
    pub active: Option<bool>,
    pub summary: Option<String>,
    pub manager_id: Uuid,
    pub thematic_id: Uuid,
}

impl CourseRequestDto {
    /// 转换为领域模型，`active` 缺省为 `true`
    pub fn into_domain(self, id: Uuid) -> Course {
        Course {
            id,
            name: self.name,
            hours: self.hours,
            active: self.active.unwrap_or(true),
            summary: self.summary,
            manager_id: self.manager_id,
            thematic_id: self.thematic_id,
        }
    }
}
