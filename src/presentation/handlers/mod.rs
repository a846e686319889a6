// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器对一种实体做增删改查，仓库实现通过 `Extension` 注入
pub mod country_handler;
pub mod course_edition_handler;
pub mod course_handler;
pub mod course_subject_handler;
pub mod subject_handler;
pub mod teacher_handler;
pub mod thematic_handler;

use serde::Deserialize;

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// 是否包含已停用的记录
    #[serde(default)]
    pub include_inactive: bool,
}
