//! Group Commands
//!
//! Group CRUD, membership, and group project endpoints.

use serde::Serialize;

use crate::models::{Group, GroupNode, GroupProject, Membership, TaskCreate};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct GroupCreateArgs<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<u32>,
}

#[derive(Serialize)]
struct AddMemberArgs {
    user_id: u32,
}

#[derive(Serialize)]
pub struct ProjectUpdateArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_progress: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manuscript_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<&'a str>,
}

// ========================
// Commands
// ========================

pub async fn list_groups() -> Result<Vec<Group>, String> {
    super::get_json("/groups/").await
}

/// Full hierarchy with members, for the tree views
pub async fn group_tree() -> Result<Vec<GroupNode>, String> {
    super::get_json("/groups/tree").await
}

pub async fn get_group(id: u32) -> Result<Group, String> {
    super::get_json(&format!("/groups/{}", id)).await
}

pub async fn create_group(args: &GroupCreateArgs<'_>) -> Result<Group, String> {
    super::post_json("/groups/", args).await
}

pub async fn update_group(id: u32, args: &GroupCreateArgs<'_>) -> Result<Group, String> {
    super::put_json(&format!("/groups/{}", id), args).await
}

pub async fn delete_group(id: u32) -> Result<(), String> {
    super::delete(&format!("/groups/{}", id)).await
}

pub async fn group_members(group_id: u32) -> Result<Vec<Membership>, String> {
    super::get_json(&format!("/groups/{}/members", group_id)).await
}

pub async fn add_member(group_id: u32, user_id: u32) -> Result<(), String> {
    super::post_json_empty(&format!("/groups/{}/members", group_id), &AddMemberArgs { user_id })
        .await
}

pub async fn remove_member(group_id: u32, user_id: u32) -> Result<(), String> {
    super::delete(&format!("/groups/{}/members/{}", group_id, user_id)).await
}

pub async fn group_project(group_id: u32) -> Result<GroupProject, String> {
    super::get_json(&format!("/groups/{}/project", group_id)).await
}

pub async fn update_group_project(
    group_id: u32,
    args: &ProjectUpdateArgs<'_>,
) -> Result<GroupProject, String> {
    super::put_json(&format!("/groups/{}/project", group_id), args).await
}

pub async fn create_group_task(group_id: u32, task: &TaskCreate) -> Result<(), String> {
    super::post_json_empty(&format!("/groups/{}/project/tasks", group_id), task).await
}

pub async fn update_group_task(group_id: u32, task_id: u32, task: &TaskCreate) -> Result<(), String> {
    super::put_json_empty(&format!("/groups/{}/project/tasks/{}", group_id, task_id), task).await
}

pub async fn delete_group_task(group_id: u32, task_id: u32) -> Result<(), String> {
    super::delete(&format!("/groups/{}/project/tasks/{}", group_id, task_id)).await
}
