//! Research Plan Commands
//!
//! Per-user research plans and their tasks.

use serde::Serialize;

use crate::models::{ResearchPlan, TaskCreate};

#[derive(Serialize)]
pub struct PlanUpdateArgs<'a> {
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

/// Another user's plan (read-only view)
pub async fn research_plan(user_id: u32) -> Result<ResearchPlan, String> {
    super::get_json(&format!("/research/{}", user_id)).await
}

pub async fn my_plan() -> Result<ResearchPlan, String> {
    super::get_json("/research/me").await
}

pub async fn update_my_plan(args: &PlanUpdateArgs<'_>) -> Result<ResearchPlan, String> {
    super::put_json("/research/me", args).await
}

pub async fn create_research_task(task: &TaskCreate) -> Result<(), String> {
    super::post_json_empty("/research/me/tasks", task).await
}

pub async fn update_research_task(task_id: u32, task: &TaskCreate) -> Result<(), String> {
    super::put_json_empty(&format!("/research/me/tasks/{}", task_id), task).await
}

pub async fn delete_research_task(task_id: u32) -> Result<(), String> {
    super::delete(&format!("/research/me/tasks/{}", task_id)).await
}
