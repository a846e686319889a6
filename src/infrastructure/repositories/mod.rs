// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于 SeaORM 的具体实现。
/// 写入前执行约束检查与引用检查，删除时执行级联或限制策略。
pub mod country_repo_impl;
pub mod course_edition_repo_impl;
pub mod course_repo_impl;
pub mod course_subject_repo_impl;
mod reference_check;
pub mod subject_repo_impl;
pub mod teacher_repo_impl;
pub mod thematic_repo_impl;
