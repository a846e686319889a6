// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// 课程数据库实体模型
///
/// 对应数据库中的 courses 表
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub hours: i32,
    pub active: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub manager_id: Uuid,
    pub thematic_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::ManagerId",
        to = "super::teacher::Column::Id",
        on_delete = "Restrict"
    )]
    Manager,
    #[sea_orm(
        belongs_to = "super::thematic::Entity",
        from = "Column::ThematicId",
        to = "super::thematic::Column::Id",
        on_delete = "Restrict"
    )]
    Thematic,
    #[sea_orm(has_many = "super::course_edition::Entity")]
    CourseEditions,
    #[sea_orm(has_many = "super::course_subject::Entity")]
    CourseSubjects,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl Related<super::thematic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thematic.def()
    }
}

impl Related<super::course_edition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseEditions.def()
    }
}

impl Related<super::course_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseSubjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
