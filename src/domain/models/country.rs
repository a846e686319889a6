// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 国家实体
///
/// 教师可选择关联一个国家；删除国家时教师上的引用被清空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: Uuid,
    /// ISO 3166-1 alpha-2 代码
    pub code: String,
    pub name: String,
}
