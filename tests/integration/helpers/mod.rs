// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::NaiveDate;
use school::config::settings::DatabaseSettings;
use school::domain::models::{
    course::Course, subject::Subject, teacher::Teacher, thematic::Thematic,
};
use school::domain::repositories::{
    course_repository::CourseRepository, subject_repository::SubjectRepository,
    teacher_repository::TeacherRepository, thematic_repository::ThematicRepository,
};
use school::infrastructure::database::connection;
use school::infrastructure::repositories::{
    course_repo_impl::CourseRepositoryImpl, subject_repo_impl::SubjectRepositoryImpl,
    teacher_repo_impl::TeacherRepositoryImpl, thematic_repo_impl::ThematicRepositoryImpl,
};
use school::presentation::routes;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 创建应用了全部迁移的内存数据库
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: Some(5),
        idle_timeout: None,
        sqlx_logging: false,
    };

    let db = connection::connect_and_migrate(&settings)
        .await
        .expect("Failed to set up in-memory database");
    Arc::new(db)
}

/// 基于内存数据库的完整应用
pub async fn create_test_server() -> TestServer {
    let db = setup_db().await;
    TestServer::new(routes::app(db)).expect("Failed to start test server")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub async fn seed_teacher(db: &Arc<DatabaseConnection>, first: &str, last: &str) -> Teacher {
    let repo = TeacherRepositoryImpl::new(db.clone());
    let email = format!("{}.{}@school.test", first, last).to_lowercase();
    repo.create(&Teacher::new(first, last, date(1980, 5, 17), email))
        .await
        .expect("Failed to seed teacher")
}

pub async fn seed_thematic(
    db: &Arc<DatabaseConnection>,
    name: &str,
    parent_id: Option<uuid::Uuid>,
) -> Thematic {
    let repo = ThematicRepositoryImpl::new(db.clone());
    repo.create(&Thematic::new(name, parent_id))
        .await
        .expect("Failed to seed thematic")
}

pub async fn seed_subject(db: &Arc<DatabaseConnection>, name: &str, hours: i32) -> Subject {
    let repo = SubjectRepositoryImpl::new(db.clone());
    repo.create(&Subject::new(name, hours))
        .await
        .expect("Failed to seed subject")
}

/// 创建课程及其必需的负责教师和主题
pub async fn seed_course(db: &Arc<DatabaseConnection>, name: &str) -> Course {
    let manager = seed_teacher(db, "Ada", "Lovelace").await;
    let thematic = seed_thematic(db, "Science", None).await;
    let repo = CourseRepositoryImpl::new(db.clone());
    repo.create(&Course::new(name, 120, manager.id, thematic.id))
        .await
        .expect("Failed to seed course")
}
