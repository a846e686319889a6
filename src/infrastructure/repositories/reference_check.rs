// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::repository_error::RepositoryError;
use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

/// 确认被引用的记录存在
///
/// # 参数
///
/// * `conn` - 数据库连接或事务
/// * `id` - 被引用记录的主键
/// * `entity` - 被引用实体的名称，出现在错误信息中
///
/// # 返回值
///
/// * `Ok(())` - 记录存在
/// * `Err(RepositoryError::InvalidReference)` - 记录不存在
pub(crate) async fn ensure_exists<E, C>(
    conn: &C,
    id: Uuid,
    entity: &'static str,
) -> Result<(), RepositoryError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
    C: ConnectionTrait,
{
    match E::find_by_id(id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(RepositoryError::InvalidReference { entity, id }),
    }
}

/// 确认待更新或删除的记录存在
pub(crate) async fn ensure_found<E, C>(conn: &C, id: Uuid) -> Result<E::Model, RepositoryError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
    C: ConnectionTrait,
{
    E::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(RepositoryError::NotFound)
}
