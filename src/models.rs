//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Session user (matches backend `/auth/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(default)]
    pub email_notifications: bool,
    pub created_at: String,
}

/// Flat group record (list endpoints)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<u32>,
    pub lead_id: Option<u32>,
    pub lead_name: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub has_project: bool,
}

/// A node of the group hierarchy as returned by the tree endpoint.
///
/// `members` and `children` are independent axes: a group can hold both
/// subgroups and direct members. Absent lists deserialize as empty.
/// Id 0 is reserved for the synthetic display root and never appears in
/// backend data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub lead_id: Option<u32>,
    pub lead_name: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub children: Vec<GroupNode>,
    #[serde(default)]
    pub has_project: bool,
}

/// Direct member entry inside a [`GroupNode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub user_id: u32,
    pub user_name: String,
    pub user_email: String,
}

/// Membership row for a single group (detail view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: u32,
    pub user_id: u32,
    pub group_id: u32,
    pub joined_at: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Meeting data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub meeting_time: String,
    pub group_id: Option<u32>,
    pub is_private: bool,
    pub tags: Option<String>,
    pub summary: Option<String>,
    pub created_by: u32,
    pub created_at: String,
    pub creator_name: Option<String>,
    pub group_name: Option<String>,
}

/// Payload for creating a meeting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeetingCreate {
    pub title: String,
    pub description: Option<String>,
    pub meeting_time: String,
    pub group_id: Option<u32>,
    pub is_private: bool,
}

/// Inventory item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Payload for creating or updating an inventory item
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// A user's research plan with its tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchPlan {
    pub user_id: u32,
    pub problem_statement: Option<String>,
    pub research_progress: Option<String>,
    pub github_link: Option<String>,
    pub manuscript_link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub comments: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub tasks: Vec<ResearchTask>,
}

/// Single task on a research plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchTask {
    pub id: u32,
    pub plan_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Group project (same shape as a research plan, keyed by group)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupProject {
    pub group_id: u32,
    pub problem_statement: Option<String>,
    pub research_progress: Option<String>,
    pub github_link: Option<String>,
    pub manuscript_link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub comments: Option<String>,
    pub updated_at: String,
    #[serde(default)]
    pub tasks: Vec<GroupTask>,
}

/// Single task on a group project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTask {
    pub id: u32,
    pub project_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Payload for creating or updating a plan/project task
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Audit log entry shown in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: u32,
    pub user_id: Option<u32>,
    pub user_name: Option<String>,
    pub action: String,
    pub details: Option<String>,
    pub created_at: String,
}

/// Admin-configured application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_lab_name")]
    pub lab_name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lab_name: default_lab_name(),
            timezone: default_timezone(),
        }
    }
}

fn default_lab_name() -> String {
    "Lab Manager".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Config backup listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupInfo {
    pub filename: String,
    pub created_at: String,
    pub size: u64,
}

/// Bearer token returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}
