// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含需要协调多个仓库的业务流程
pub mod teacher_profile_use_case;
