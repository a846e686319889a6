use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create countries table
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::Code).string_len(2).not_null().unique_key())
                    .col(ColumnDef::new(Countries::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::FirstName).string_len(30).not_null())
                    .col(ColumnDef::new(Teachers::LastName).string_len(40).not_null())
                    .col(ColumnDef::new(Teachers::Birthdate).date().not_null())
                    .col(ColumnDef::new(Teachers::TaxId).string_len(14))
                    .col(ColumnDef::new(Teachers::Gender).string())
                    .col(ColumnDef::new(Teachers::Salary).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Teachers::Email).string_len(60).not_null())
                    .col(ColumnDef::new(Teachers::Phone).string())
                    .col(ColumnDef::new(Teachers::Active).boolean().not_null().default(true))
                    .col(ColumnDef::new(Teachers::Photo).blob())
                    .col(ColumnDef::new(Teachers::CountryId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_country")
                            .from(Teachers::Table, Teachers::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create subjects table
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(60).not_null())
                    .col(ColumnDef::new(Subjects::Hours).integer().not_null())
                    .col(ColumnDef::new(Subjects::Active).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        // Create teacher_subjects join table
        manager
            .create_table(
                Table::create()
                    .table(TeacherSubjects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeacherSubjects::TeacherId).uuid().not_null())
                    .col(ColumnDef::new(TeacherSubjects::SubjectId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(TeacherSubjects::TeacherId)
                            .col(TeacherSubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_subjects_teacher")
                            .from(TeacherSubjects::Table, TeacherSubjects::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_subjects_subject")
                            .from(TeacherSubjects::Table, TeacherSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create thematics table
        manager
            .create_table(
                Table::create()
                    .table(Thematics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Thematics::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Thematics::Name).string().not_null())
                    .col(ColumnDef::new(Thematics::ParentId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thematics_parent")
                            .from(Thematics::Table, Thematics::ParentId)
                            .to(Thematics::Table, Thematics::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string_len(60).not_null())
                    .col(ColumnDef::new(Courses::Hours).integer().not_null())
                    .col(ColumnDef::new(Courses::Active).boolean().not_null().default(true))
                    .col(ColumnDef::new(Courses::Summary).text())
                    .col(ColumnDef::new(Courses::ManagerId).uuid().not_null())
                    .col(ColumnDef::new(Courses::ThematicId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_manager")
                            .from(Courses::Table, Courses::ManagerId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_thematic")
                            .from(Courses::Table, Courses::ThematicId)
                            .to(Thematics::Table, Thematics::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_editions table
        manager
            .create_table(
                Table::create()
                    .table(CourseEditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseEditions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseEditions::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseEditions::Name).string().not_null())
                    .col(ColumnDef::new(CourseEditions::DateStart).date().not_null())
                    .col(ColumnDef::new(CourseEditions::DateEnd).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_editions_course")
                            .from(CourseEditions::Table, CourseEditions::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_subjects table
        // (course_id, subject_id) is intentionally not unique
        manager
            .create_table(
                Table::create()
                    .table(CourseSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseSubjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseSubjects::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseSubjects::SubjectId).uuid().not_null())
                    .col(ColumnDef::new(CourseSubjects::Number).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_subjects_course")
                            .from(CourseSubjects::Table, CourseSubjects::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_subjects_subject")
                            .from(CourseSubjects::Table, CourseSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseEditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Thematics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    FirstName,
    LastName,
    Birthdate,
    TaxId,
    Gender,
    Salary,
    Email,
    Phone,
    Active,
    Photo,
    CountryId,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
    Hours,
    Active,
}

#[derive(DeriveIden)]
enum TeacherSubjects {
    Table,
    TeacherId,
    SubjectId,
}

#[derive(DeriveIden)]
enum Thematics {
    Table,
    Id,
    Name,
    ParentId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    Hours,
    Active,
    Summary,
    ManagerId,
    ThematicId,
}

#[derive(DeriveIden)]
enum CourseEditions {
    Table,
    Id,
    CourseId,
    Name,
    DateStart,
    DateEnd,
}

#[derive(DeriveIden)]
enum CourseSubjects {
    Table,
    Id,
    CourseId,
    SubjectId,
    Number,
}
