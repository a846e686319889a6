// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::subject::Subject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SubjectRequestDto {
    #[validate(length(max = 60))]
    pub name: String,
    pub hours: i32,
    pub active: Option<bool>,
}

impl SubjectRequestDto {
    pub fn into_domain(self, id: Uuid) -> Subject {
        Subject {
            id,
            name: self.name,
            hours: self.hours,
            active: self.active.unwrap_or(true),
        }
    }
}
