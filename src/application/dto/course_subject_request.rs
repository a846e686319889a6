// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::course_subject::CourseSubject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CourseSubjectRequestDto {
    pub course_id: Uuid,
    pub subject_id: Uuid,
    pub number: i32,
}

impl CourseSubjectRequestDto {
    pub fn into_domain(self, id: Uuid) -> CourseSubject {
        CourseSubject {
            id,
            course_id: self.course_id,
            subject_id: self.subject_id,
            number: self.number,
        }
    }
}
