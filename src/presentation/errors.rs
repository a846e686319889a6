// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::services::validation_service::ValidationError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

/// 错误响应的组成部分：状态码、规则名、出错字段和消息
struct Rejection {
    status: StatusCode,
    rule: Option<&'static str>,
    field: Option<String>,
    message: String,
}

impl Rejection {
    fn validation(err: &ValidationError, message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            rule: Some(err.rule()),
            field: Some(err.field().to_string()),
            message,
        }
    }

    fn plain(status: StatusCode, rule: Option<&'static str>, message: String) -> Self {
        Self {
            status,
            rule,
            field: None,
            message,
        }
    }
}

/// 将请求体校验失败映射为规则名，按字段名排序后取第一个失败
fn request_rejection(errors: &validator::ValidationErrors) -> Rejection {
    let mut failures: Vec<(String, &validator::ValidationError)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| errs.first().map(|e| (field.to_string(), e)))
        .collect();
    failures.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, failure)) = failures.into_iter().next() else {
        return Rejection::plain(
            StatusCode::BAD_REQUEST,
            Some("invalid_request"),
            "Invalid request body".to_string(),
        );
    };

    let max = failure.params.get("max").and_then(|v| v.as_u64());
    let (rule, message) = match (failure.code.as_ref(), max) {
        ("length", Some(max)) => (
            "field_too_long",
            format!("Field '{}' cannot exceed {} characters", field, max),
        ),
        ("length", None) => (
            "invalid_length",
            format!("Field '{}' has an invalid length", field),
        ),
        _ => ("invalid_request", format!("Field '{}' is invalid", field)),
    };

    Rejection {
        status: StatusCode::BAD_REQUEST,
        rule: Some(rule),
        field: Some(field),
        message,
    }
}

impl AppError {
    fn rejection(&self) -> Rejection {
        let message = self.0.to_string();
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return match err {
                RepositoryError::Validation(v) => Rejection::validation(v, message),
                RepositoryError::NotFound => Rejection::plain(StatusCode::NOT_FOUND, None, message),
                RepositoryError::DeleteRestricted { .. } => {
                    Rejection::plain(StatusCode::CONFLICT, None, message)
                }
                RepositoryError::InvalidReference { .. } => Rejection::plain(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Some("invalid_reference"),
                    message,
                ),
                RepositoryError::Database(_) => {
                    Rejection::plain(StatusCode::INTERNAL_SERVER_ERROR, None, message)
                }
            };
        }
        if let Some(err) = self.0.downcast_ref::<ValidationError>() {
            return Rejection::validation(err, message);
        }
        if let Some(errors) = self.0.downcast_ref::<validator::ValidationErrors>() {
            return request_rejection(errors);
        }
        Rejection::plain(StatusCode::INTERNAL_SERVER_ERROR, None, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let rejection = self.rejection();

        if rejection.status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let mut body = json!({ "error": rejection.message });
        if let Some(rule) = rejection.rule {
            body["rule"] = json!(rule);
        }
        if let Some(field) = rejection.field {
            body["field"] = json!(field);
        }
        (rejection.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
