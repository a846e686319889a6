// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 主题实体
///
/// 主题构成一棵树：每个主题可以有一个父主题。
/// 父链中不允许出现环（任何主题都不能成为自己的祖先）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thematic {
    /// 主题唯一标识符
    pub id: Uuid,
    /// 主题名称
    pub name: String,
    /// 父主题ID（可选）
    pub parent_id: Option<Uuid>,
}

impl Thematic {
    pub fn new(name: impl Into<String>, parent_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id,
        }
    }
}
