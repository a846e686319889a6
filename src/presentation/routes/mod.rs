// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::{
    country_repo_impl::CountryRepositoryImpl, course_edition_repo_impl::CourseEditionRepositoryImpl,
    course_repo_impl::CourseRepositoryImpl, course_subject_repo_impl::CourseSubjectRepositoryImpl,
    subject_repo_impl::SubjectRepositoryImpl, teacher_repo_impl::TeacherRepositoryImpl,
    thematic_repo_impl::ThematicRepositoryImpl,
};
use crate::presentation::handlers::{
    country_handler, course_edition_handler, course_handler, course_subject_handler,
    subject_handler, teacher_handler, thematic_handler,
};
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 仓库实现由调用方以 `Extension<Arc<...Impl>>` 层注入
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    Router::new()
        .merge(public_routes)
        .merge(course_routes())
        .merge(subject_routes())
        .merge(teacher_routes())
        .merge(thematic_routes())
        .merge(course_edition_routes())
        .merge(course_subject_routes())
        .merge(country_routes())
}

/// 创建完整的应用
///
/// 在 [`routes`] 之上注入所有仓库实现并挂载请求追踪层
pub fn app(db: Arc<DatabaseConnection>) -> Router {
    routes()
        .layer(Extension(Arc::new(CourseRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(SubjectRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(TeacherRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(ThematicRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(CourseEditionRepositoryImpl::new(
            db.clone(),
        ))))
        .layer(Extension(Arc::new(CourseSubjectRepositoryImpl::new(
            db.clone(),
        ))))
        .layer(Extension(Arc::new(CountryRepositoryImpl::new(db))))
        .layer(TraceLayer::new_for_http())
}

fn course_routes() -> Router {
    type R = CourseRepositoryImpl;

    Router::new()
        .route(
            "/v1/courses",
            post(course_handler::create_course::<R>).get(course_handler::list_courses::<R>),
        )
        .route(
            "/v1/courses/{id}",
            get(course_handler::get_course::<R>)
                .put(course_handler::update_course::<R>)
                .delete(course_handler::delete_course::<R>),
        )
        .route(
            "/v1/courses/{id}/editions",
            get(course_handler::list_course_editions::<R, CourseEditionRepositoryImpl>),
        )
        .route(
            "/v1/courses/{id}/subjects",
            get(course_handler::list_course_subjects::<R, CourseSubjectRepositoryImpl>),
        )
}

fn subject_routes() -> Router {
    type R = SubjectRepositoryImpl;

    Router::new()
        .route(
            "/v1/subjects",
            post(subject_handler::create_subject::<R>).get(subject_handler::list_subjects::<R>),
        )
        .route(
            "/v1/subjects/{id}",
            get(subject_handler::get_subject::<R>)
                .put(subject_handler::update_subject::<R>)
                .delete(subject_handler::delete_subject::<R>),
        )
}

fn teacher_routes() -> Router {
    type TR = TeacherRepositoryImpl;
    type CR = CourseRepositoryImpl;

    Router::new()
        .route(
            "/v1/teachers",
            post(teacher_handler::create_teacher::<TR, CR>)
                .get(teacher_handler::list_teachers::<TR, CR>),
        )
        .route(
            "/v1/teachers/{id}",
            get(teacher_handler::get_teacher::<TR, CR>)
                .put(teacher_handler::update_teacher::<TR, CR>)
                .delete(teacher_handler::delete_teacher::<TR>),
        )
        .route(
            "/v1/teachers/{id}/courses",
            get(teacher_handler::list_teacher_courses::<TR, CR>),
        )
        .route(
            "/v1/teachers/{id}/subjects",
            put(teacher_handler::set_teacher_subjects::<TR>),
        )
}

fn thematic_routes() -> Router {
    type R = ThematicRepositoryImpl;

    Router::new()
        .route(
            "/v1/thematics",
            post(thematic_handler::create_thematic::<R>).get(thematic_handler::list_thematics::<R>),
        )
        .route(
            "/v1/thematics/{id}",
            get(thematic_handler::get_thematic::<R>)
                .put(thematic_handler::update_thematic::<R>)
                .delete(thematic_handler::delete_thematic::<R>),
        )
        .route(
            "/v1/thematics/{id}/children",
            get(thematic_handler::list_thematic_children::<R>),
        )
}

fn course_edition_routes() -> Router {
    type R = CourseEditionRepositoryImpl;

    Router::new()
        .route(
            "/v1/course-editions",
            post(course_edition_handler::create_edition::<R>)
                .get(course_edition_handler::list_editions::<R>),
        )
        .route(
            "/v1/course-editions/{id}",
            get(course_edition_handler::get_edition::<R>)
                .put(course_edition_handler::update_edition::<R>)
                .delete(course_edition_handler::delete_edition::<R>),
        )
}

fn course_subject_routes() -> Router {
    type R = CourseSubjectRepositoryImpl;

    Router::new()
        .route(
            "/v1/course-subjects",
            post(course_subject_handler::create_course_subject::<R>)
                .get(course_subject_handler::list_course_subjects::<R>),
        )
        .route(
            "/v1/course-subjects/{id}",
            get(course_subject_handler::get_course_subject::<R>)
                .put(course_subject_handler::update_course_subject::<R>)
                .delete(course_subject_handler::delete_course_subject::<R>),
        )
}

fn country_routes() -> Router {
    type R = CountryRepositoryImpl;

    Router::new()
        .route(
            "/v1/countries",
            post(country_handler::create_country::<R>).get(country_handler::list_countries::<R>),
        )
        .route(
            "/v1/countries/{id}",
            get(country_handler::get_country::<R>)
                .put(country_handler::update_country::<R>)
                .delete(country_handler::delete_country::<R>),
        )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
