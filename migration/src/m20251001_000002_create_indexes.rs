use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse lookups: courses by manager / thematic
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_manager_id")
                    .table(Courses::Table)
                    .col(Courses::ManagerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_thematic_id")
                    .table(Courses::Table)
                    .col(Courses::ThematicId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_editions_course_id")
                    .table(CourseEditions::Table)
                    .col(CourseEditions::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_subjects_course_subject")
                    .table(CourseSubjects::Table)
                    .col(CourseSubjects::CourseId)
                    .col(CourseSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        // Delete-restrict lookups on subjects scan this one
        manager
            .create_index(
                Index::create()
                    .name("idx_course_subjects_subject_id")
                    .table(CourseSubjects::Table)
                    .col(CourseSubjects::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_thematics_parent_id")
                    .table(Thematics::Table)
                    .col(Thematics::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_thematics_parent_id",
            "idx_course_subjects_subject_id",
            "idx_course_subjects_course_subject",
            "idx_course_editions_course_id",
            "idx_courses_thematic_id",
            "idx_courses_manager_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    ManagerId,
    ThematicId,
}

#[derive(DeriveIden)]
enum CourseEditions {
    Table,
    CourseId,
}

#[derive(DeriveIden)]
enum CourseSubjects {
    Table,
    CourseId,
    SubjectId,
}

#[derive(DeriveIden)]
enum Thematics {
    Table,
    ParentId,
}
