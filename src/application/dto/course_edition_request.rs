// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::course_edition::CourseEdition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CourseEditionRequestDto {
    pub course_id: Uuid,
    pub name: String,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
}

impl CourseEditionRequestDto {
    pub fn into_domain(self, id: Uuid) -> CourseEdition {
        CourseEdition {
            id,
            course_id: self.course_id,
            name: self.name,
            date_start: self.date_start,
            date_end: self.date_end,
        }
    }
}
