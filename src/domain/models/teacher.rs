// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::computed_fields;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 教师实体
///
/// 表示一名教师的基本信息。教师可以负责多门课程（作为课程负责人），
/// 并通过多对多关系教授多个科目。年龄与显示名称是派生值，不单独存储。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// 教师唯一标识符
    pub id: Uuid,
    /// 名，最长 30 个字符
    pub first_name: String,
    /// 姓，最长 40 个字符
    pub last_name: String,
    /// 出生日期
    pub birthdate: NaiveDate,
    /// 税号（可选），最长 14 个字符
    pub tax_id: Option<String>,
    /// 性别（可选）
    pub gender: Option<Gender>,
    /// 薪资，不得为负数
    pub salary: i64,
    /// 电子邮件地址，最长 60 个字符
    pub email: String,
    /// 电话（可选），只能包含数字
    pub phone: Option<String>,
    /// 是否启用
    pub active: bool,
    /// 照片（可选），原始图片字节
    pub photo: Option<Vec<u8>>,
    /// 所在国家ID（可选）
    pub country_id: Option<Uuid>,
}

impl Teacher {
    /// 创建一个启用状态的新教师，自动生成ID，薪资为 0
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            tax_id: None,
            gender: None,
            salary: 0,
            email: email.into(),
            phone: None,
            active: true,
            photo: None,
            country_id: None,
        }
    }

    /// 截至 `today` 的周岁年龄
    pub fn age(&self, today: NaiveDate) -> u32 {
        computed_fields::age(Some(self.birthdate), today)
    }

    /// 显示名称，格式为 "姓, 名"
    pub fn display_name(&self) -> String {
        computed_fields::display_label(
            non_blank(&self.first_name),
            non_blank(&self.last_name),
        )
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// 性别枚举
///
/// 固定的下拉选项，数据库中以小写键存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}
