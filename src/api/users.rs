//! User Commands

use crate::models::User;

pub async fn list_users() -> Result<Vec<User>, String> {
    super::get_json("/users/").await
}
