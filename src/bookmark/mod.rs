use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::user::UserId;

pub mod db;
pub mod endpoints;
pub mod manager;
pub mod set;
pub use endpoints::*;
pub use set::BookmarkSet;

/// A user's saved campaign. The (user, campaign) pair is the identity; there
/// is no separate id and writing the same pair twice is a no-op.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Bookmark {
    pub user_id: UserId,
    pub campaign_id: CampaignId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
