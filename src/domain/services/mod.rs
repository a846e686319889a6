// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 计算字段（computed_fields）：教师年龄与显示名称等派生值
/// - 验证服务（validation_service）：实体写入前必须满足的约束规则
///
/// 两者都是纯函数，不访问存储，也不修改传入的实体。
pub mod computed_fields;
pub mod validation_service;
