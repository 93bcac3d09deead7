//! Audit Log Commands

use crate::models::AuditLog;

/// Most recent audit entries for the dashboard activity feed
pub async fn recent_logs(limit: u32) -> Result<Vec<AuditLog>, String> {
    super::get_json(&format!("/audit/?limit={}", limit)).await
}
