// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了学校管理系统的核心业务实体，包括：
/// - 课程（course）：由教师负责、归属于某个主题的课程
/// - 科目（subject）：可被多个课程引用的教学科目
/// - 教师（teacher）：课程负责人与科目授课教师
/// - 主题（thematic）：课程的分类树
/// - 课程版本（course_edition）：课程的一次开课
/// - 课程科目（course_subject）：课程与科目的关联
/// - 国家（country）：教师的可选国籍
///
/// 实体之间只通过ID相互引用，不嵌入对象。
pub mod country;
pub mod course;
pub mod course_edition;
pub mod course_subject;
pub mod subject;
pub mod teacher;
pub mod thematic;
