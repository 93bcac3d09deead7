//! Admin Commands
//!
//! App config and config backup management.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{AppConfig, BackupInfo};

/// Public config read, available pre-login for the nav header
pub async fn app_config() -> Result<AppConfig, String> {
    super::get_json("/config").await
}

pub async fn update_config(config: &AppConfig) -> Result<(), String> {
    super::put_json_empty("/admin/config", config).await
}

pub async fn reload_config() -> Result<(), String> {
    super::post_empty("/admin/config/reload").await
}

pub async fn create_backup() -> Result<(), String> {
    super::post_empty("/admin/config/backup").await
}

pub async fn list_backups() -> Result<Vec<BackupInfo>, String> {
    super::get_json("/admin/config/backups").await
}

pub async fn restore_backup(filename: &str) -> Result<(), String> {
    let encoded = utf8_percent_encode(filename, NON_ALPHANUMERIC);
    super::post_empty(&format!("/admin/config/restore/{}", encoded)).await
}
