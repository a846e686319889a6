// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod country_request;
pub mod course_edition_request;
pub mod course_request;
pub mod course_subject_request;
pub mod subject_request;
pub mod teacher_request;
pub mod teacher_response;
pub mod thematic_request;
