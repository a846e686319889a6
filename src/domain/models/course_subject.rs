// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 课程-科目关联实体
///
/// 删除课程时级联删除；被引用的科目禁止删除。
/// 同一 (course, subject) 组合可以出现多次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSubject {
    /// 关联唯一标识符
    pub id: Uuid,
    /// 课程ID
    pub course_id: Uuid,
    /// 科目ID
    pub subject_id: Uuid,
    /// 科目在课程中的序号，必须为正数
    pub number: i32,
}

impl CourseSubject {
    pub fn new(course_id: Uuid, subject_id: Uuid, number: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            subject_id,
            number,
        }
    }
}
