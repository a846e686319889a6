// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 所有仓库在写入前调用验证服务，未通过检查的实体不会被写入；
/// 删除时的级联与限制策略也由仓库实现显式执行。
pub mod country_repository;
pub mod course_edition_repository;
pub mod course_repository;
pub mod course_subject_repository;
pub mod repository_error;
pub mod subject_repository;
pub mod teacher_repository;
pub mod thematic_repository;
