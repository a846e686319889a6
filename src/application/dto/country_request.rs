// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::country::Country;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CountryRequestDto {
    /// ISO 3166-1 alpha-2 代码
    #[validate(length(equal = 2))]
    pub code: String,
    pub name: String,
}

impl CountryRequestDto {
    pub fn into_domain(self, id: Uuid) -> Country {
        Country {
            id,
            code: self.code,
            name: self.name,
        }
    }
}
