// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{
    country::Country, course::Course, course_edition::CourseEdition, course_subject::CourseSubject,
    subject::Subject, teacher::Teacher, thematic::Thematic,
};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

pub const COURSE_NAME_MAX_LEN: usize = 60;
pub const SUBJECT_NAME_MAX_LEN: usize = 60;
pub const TEACHER_FIRST_NAME_MAX_LEN: usize = 30;
pub const TEACHER_LAST_NAME_MAX_LEN: usize = 40;
pub const TEACHER_TAX_ID_MAX_LEN: usize = 14;
pub const TEACHER_EMAIL_MAX_LEN: usize = 60;
pub const COUNTRY_CODE_LEN: usize = 2;

/// 验证错误类型
///
/// 每个变体对应一条被违反的约束规则
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 课时数不是正数
    #[error("{0}")]
    InvalidHours(String),
    /// 课程科目序号不是正数
    #[error("Course subject number must be positive")]
    InvalidNumber,
    /// 薪资为负数
    #[error("Teacher salary cannot be negative")]
    InvalidSalary,
    /// 电话包含非数字字符
    #[error("Phone must contain only digits")]
    InvalidPhone,
    /// 电子邮件格式无效
    #[error("Invalid email address")]
    InvalidEmail,
    /// 结束日期早于开始日期
    #[error("End date cannot be before start date")]
    InvalidDateRange,
    /// 主题父链存在环
    #[error("Thematic hierarchy cannot be recursive")]
    CyclicThematic,
    /// 必填字段为空
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },
    /// 字段超出最大长度
    #[error("Field '{field}' cannot exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// 规则名称，用于 API 错误响应
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::InvalidHours(_) => "invalid_hours",
            ValidationError::InvalidNumber => "invalid_number",
            ValidationError::InvalidSalary => "invalid_salary",
            ValidationError::InvalidPhone => "invalid_phone",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidDateRange => "invalid_date_range",
            ValidationError::CyclicThematic => "cyclic_thematic",
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::FieldTooLong { .. } => "field_too_long",
        }
    }

    /// 违反规则的字段
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidHours(_) => "hours",
            ValidationError::InvalidNumber => "number",
            ValidationError::InvalidSalary => "salary",
            ValidationError::InvalidPhone => "phone",
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidDateRange => "date_end",
            ValidationError::CyclicThematic => "parent_id",
            ValidationError::MissingField { field } => field,
            ValidationError::FieldTooLong { field, .. } => field,
        }
    }
}

/// 约束检查特质
///
/// 实体在写入存储前必须通过的检查。检查不修改实体。
pub trait Constrained {
    /// 返回第一个被违反的规则
    fn check_constraints(&self) -> Result<(), ValidationError>;
}

impl Constrained for Course {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        validate_course(self)
    }
}

impl Constrained for Subject {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        validate_subject(self)
    }
}

impl Constrained for Teacher {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        validate_teacher(self)
    }
}

impl Constrained for CourseSubject {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        validate_course_subject(self)
    }
}

impl Constrained for CourseEdition {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        validate_course_edition(self)
    }
}

/// 主题自身字段的检查；父链检查见 [`validate_thematic_hierarchy`]
impl Constrained for Thematic {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

impl Constrained for Country {
    fn check_constraints(&self) -> Result<(), ValidationError> {
        required("code", &self.code)?;
        max_len("code", &self.code, COUNTRY_CODE_LEN)?;
        required("name", &self.name)
    }
}

/// 批量检查
///
/// 依次检查每条记录，返回第一个失败；全部通过时返回 `Ok(())`
pub fn validate_all<'a, T, I>(records: I) -> Result<(), ValidationError>
where
    T: Constrained + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .try_for_each(|record| record.check_constraints())
}

pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    required("name", &course.name)?;
    max_len("name", &course.name, COURSE_NAME_MAX_LEN)?;
    if course.hours <= 0 {
        return Err(ValidationError::InvalidHours(
            "Course hours must be positive".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_subject(subject: &Subject) -> Result<(), ValidationError> {
    required("name", &subject.name)?;
    max_len("name", &subject.name, SUBJECT_NAME_MAX_LEN)?;
    if subject.hours <= 0 {
        return Err(ValidationError::InvalidHours(
            "Subject hours must be positive".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_course_subject(course_subject: &CourseSubject) -> Result<(), ValidationError> {
    if course_subject.number <= 0 {
        return Err(ValidationError::InvalidNumber);
    }
    Ok(())
}

pub fn validate_teacher(teacher: &Teacher) -> Result<(), ValidationError> {
    required("first_name", &teacher.first_name)?;
    max_len("first_name", &teacher.first_name, TEACHER_FIRST_NAME_MAX_LEN)?;
    required("last_name", &teacher.last_name)?;
    max_len("last_name", &teacher.last_name, TEACHER_LAST_NAME_MAX_LEN)?;
    if let Some(tax_id) = &teacher.tax_id {
        max_len("tax_id", tax_id, TEACHER_TAX_ID_MAX_LEN)?;
    }

    if teacher.salary < 0 {
        return Err(ValidationError::InvalidSalary);
    }

    if let Some(phone) = teacher.phone.as_deref() {
        validate_phone(phone)?;
    }

    required("email", &teacher.email)?;
    max_len("email", &teacher.email, TEACHER_EMAIL_MAX_LEN)?;
    validate_email(&teacher.email)
}

/// 电话为空时视为未填写；非空时每个字符都必须是 ASCII 数字
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_course_edition(edition: &CourseEdition) -> Result<(), ValidationError> {
    required("name", &edition.name)?;
    match edition.date_end {
        Some(end) if end < edition.date_start => Err(ValidationError::InvalidDateRange),
        _ => Ok(()),
    }
}

/// 检查主题父链是否有环
///
/// 从候选主题的父主题出发沿父引用向上走，直到链终止。
/// 回到起点，或再次访问链上已出现过的主题，都视为环。
///
/// # 参数
///
/// * `id` - 候选主题ID
/// * `parent_id` - 候选主题（待写入）的父主题ID
/// * `parent_of` - 查询已存储主题的父主题ID
pub fn validate_thematic_hierarchy<F>(
    id: Uuid,
    parent_id: Option<Uuid>,
    parent_of: F,
) -> Result<(), ValidationError>
where
    F: Fn(Uuid) -> Option<Uuid>,
{
    let mut visited = HashSet::from([id]);
    let mut current = parent_id;

    while let Some(ancestor) = current {
        if !visited.insert(ancestor) {
            return Err(ValidationError::CyclicThematic);
        }
        current = parent_of(ancestor);
    }

    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}
