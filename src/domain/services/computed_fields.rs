// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 派生字段计算
//!
//! 纯函数，输入相同则输出相同。何时重新计算由调用方（仓库读取路径、
//! HTTP 响应组装）决定。

use chrono::NaiveDate;

/// 名字不完整的教师所使用的显示名称
pub const INCOMPLETE_TEACHER_LABEL: &str = "New teacher";

/// 计算周岁年龄
///
/// # 参数
///
/// * `birthdate` - 出生日期，缺失时年龄为 0
/// * `today` - 计算基准日
///
/// # 返回值
///
/// 从出生日期到 `today` 经过的完整年数；今年生日未到则不计入。
/// 出生日期晚于 `today` 时返回 0。
pub fn age(birthdate: Option<NaiveDate>, today: NaiveDate) -> u32 {
    birthdate
        .and_then(|born| today.years_since(born))
        .unwrap_or(0)
}

/// 生成显示名称
///
/// 名和姓都存在时返回 `"{last_name}, {first_name}"`，
/// 否则返回 [`INCOMPLETE_TEACHER_LABEL`]。
pub fn display_label(first_name: Option<&str>, last_name: Option<&str>) -> String {
    match (first_name, last_name) {
        (Some(first), Some(last)) => format!("{}, {}", last, first),
        _ => INCOMPLETE_TEACHER_LABEL.to_string(),
    }
}
