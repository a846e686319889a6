// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 课程版本实体
///
/// 表示课程的一次开课，删除课程时随之删除。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEdition {
    /// 版本唯一标识符
    pub id: Uuid,
    /// 所属课程ID
    pub course_id: Uuid,
    /// 版本名称，例如 "2025-2026"
    pub name: String,
    /// 开始日期
    pub date_start: NaiveDate,
    /// 结束日期（可选），不得早于开始日期
    pub date_end: Option<NaiveDate>,
}

impl CourseEdition {
    pub fn new(
        course_id: Uuid,
        name: impl Into<String>,
        date_start: NaiveDate,
        date_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            name: name.into(),
            date_start,
            date_end,
        }
    }
}
