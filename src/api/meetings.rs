//! Meeting Commands

use serde::Serialize;

use crate::models::{Meeting, MeetingCreate};

#[derive(Serialize)]
struct RsvpArgs<'a> {
    response: &'a str,
}

pub async fn list_meetings() -> Result<Vec<Meeting>, String> {
    super::get_json("/meetings/").await
}

pub async fn create_meeting(meeting: &MeetingCreate) -> Result<Meeting, String> {
    super::post_json("/meetings/", meeting).await
}

pub async fn delete_meeting(id: u32) -> Result<(), String> {
    super::delete(&format!("/meetings/{}", id)).await
}

/// RSVP to a meeting; `response` is "join" or "wont_join"
pub async fn respond_to_meeting(id: u32, response: &str) -> Result<(), String> {
    super::post_json_empty(&format!("/meetings/{}/respond", id), &RsvpArgs { response }).await
}
