// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// 教师数据库实体模型
///
/// 对应数据库中的 teachers 表；性别以小写键存储
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: ChronoDate,
    pub tax_id: Option<String>,
    pub gender: Option<String>,
    pub salary: i64,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    #[sea_orm(column_type = "Blob", nullable)]
    pub photo: Option<Vec<u8>>,
    pub country_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_delete = "SetNull"
    )]
    Country,
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
    #[sea_orm(has_many = "super::teacher_subject::Entity")]
    TeacherSubjects,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::teacher_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherSubjects.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_subject::Relation::Subject.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_subject::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
