// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use school::domain::models::{
    course::Course, course_edition::CourseEdition, course_subject::CourseSubject,
    teacher::Teacher,
};
use school::domain::services::validation_service::{validate_all, Constrained, ValidationError};
use uuid::Uuid;

/// 教师批量检查在第一个格式错误的电话处停止
#[test]
fn test_teacher_batch_stops_at_bad_phone() {
    let birthdate = NaiveDate::from_ymd_opt(1980, 5, 1).unwrap();
    let valid = Teacher::new("Ada", "Lovelace", birthdate, "ada@school.test");
    let mut bad_phone = Teacher::new("Grace", "Hopper", birthdate, "grace@school.test");
    bad_phone.phone = Some("555-0100".to_string());
    let mut bad_salary = Teacher::new("Alan", "Turing", birthdate, "alan@school.test");
    bad_salary.salary = -5;

    let err = validate_all(&[valid.clone(), bad_phone, bad_salary]).unwrap_err();

    assert_eq!(err, ValidationError::InvalidPhone);
    assert_eq!(err.rule(), "invalid_phone");
    assert_eq!(err.field(), "phone");
    assert!(validate_all(&[valid]).is_ok());
}

#[test]
fn test_mixed_entities_share_the_constraint_trait() {
    let course_id = Uuid::new_v4();
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

    let records: Vec<Box<dyn Constrained>> = vec![
        Box::new(Course::new("Physics", 60, Uuid::new_v4(), Uuid::new_v4())),
        Box::new(CourseEdition::new(course_id, "2025", start, None)),
        Box::new(CourseSubject::new(course_id, Uuid::new_v4(), 3)),
    ];

    assert!(records.iter().all(|r| r.check_constraints().is_ok()));
}
