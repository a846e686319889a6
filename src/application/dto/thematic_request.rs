// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::thematic::Thematic;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ThematicRequestDto {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

impl ThematicRequestDto {
    pub fn into_domain(self, id: Uuid) -> Thematic {
        Thematic {
            id,
            name: self.name,
            parent_id: self.parent_id,
        }
    }
}
