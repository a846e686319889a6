// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 从仓库自带的 config/default.toml 加载配置
use school::config::settings::Settings;

#[test]
fn test_config_loading_from_default_toml() {
    let settings = Settings::new().expect("Failed to load configuration");

    assert!(!settings.database.url.is_empty());
    assert!(settings.server.port > 0);
    assert!(!settings.database.sqlx_logging);
}
