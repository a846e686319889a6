// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::validation_service::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 实体未通过约束检查，未写入
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// 必填引用指向不存在的记录
    #[error("Referenced {entity} {id} does not exist")]
    InvalidReference { entity: &'static str, id: Uuid },
    /// 记录仍被引用，禁止删除
    #[error("Cannot delete {entity}: still referenced by {referenced_by}")]
    DeleteRestricted {
        entity: &'static str,
        referenced_by: &'static str,
    },
}
