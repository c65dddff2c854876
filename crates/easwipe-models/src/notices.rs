use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{NoticeId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeType {
    Info,
    Urgent,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub author_name: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    #[serde(default)]
    pub read_by: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// Records that `user` has read the notice. Returns `false` if it was
    /// already marked.
    pub fn mark_read(&mut self, user: &UserId) -> bool {
        if self.read_by.contains(user) {
            return false;
        }
        self.read_by.push(user.clone());
        true
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNoticeDto {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 10000, message = "Content is required"))]
    pub content: String,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
}
