// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::{Gender, Teacher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建或替换教师的请求体
///
/// 邮件格式与电话格式由领域验证器检查，这里只限制长度
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TeacherRequestDto {
    #[validate(length(max = 30))]
    pub first_name: String,
    #[validate(length(max = 40))]
    pub last_name: String,
    pub birthdate: NaiveDate,
    #[validate(length(max = 14))]
    pub tax_id: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub salary: i64,
    #[validate(length(max = 60))]
    pub email: String,
    pub phone: Option<String>,
    pub active: Option<bool>,
    pub photo: Option<Vec<u8>>,
    pub country_id: Option<Uuid>,
}

impl TeacherRequestDto {
    pub fn into_domain(self, id: Uuid) -> Teacher {
        Teacher {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            tax_id: self.tax_id,
            gender: self.gender,
            salary: self.salary,
            email: self.email,
            phone: self.phone,
            active: self.active.unwrap_or(true),
            photo: self.photo,
            country_id: self.country_id,
        }
    }
}

/// 替换教师可授科目集合的请求体
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SetSubjectsDto {
    pub subject_ids: Vec<Uuid>,
}
