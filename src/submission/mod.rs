use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::error::Error;
use crate::ipkit::AssetId;
use crate::typedid::{TypedId, TypedIdMarker};
use crate::user::UserId;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LENGTH: usize = 20;

pub type SubmissionId = TypedId<Submission>;

/// A creator's composed artwork plus metadata, submitted against exactly one
/// campaign for review. Submissions are never hard-deleted by ordinary flows.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: SubmissionId,
    pub title: String,
    pub description: String,
    pub artwork_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub canvas_data: Option<CanvasData>,
    pub tags: Vec<String>,
    pub campaign_id: CampaignId,
    pub creator_id: UserId,
    pub status: SubmissionStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub is_public: bool,
    pub view_count: u64,
    pub like_count: u64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TypedIdMarker for Submission {
    fn tag() -> &'static str {
        "SUB"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    Withdrawn,
}

impl SubmissionStatus {
    /// Lenient parse for list filters.
    pub fn parse(value: &str) -> Option<SubmissionStatus> {
        match value {
            "pending" => Some(SubmissionStatus::Pending),
            "approved" => Some(SubmissionStatus::Approved),
            "rejected" => Some(SubmissionStatus::Rejected),
            "withdrawn" => Some(SubmissionStatus::Withdrawn),
            _ => None,
        }
    }

    /// A creator may only withdraw work that is still pending or was sent
    /// back to them. Withdrawn is terminal from the creator's perspective.
    pub fn creator_can_withdraw(self) -> bool {
        matches!(self, SubmissionStatus::Pending | SubmissionStatus::Rejected)
    }
}

/// The structured record of placed elements composing a submission's artwork.
/// The server never rasterizes this; it only validates and stores it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CanvasData {
    pub elements: Vec<CanvasElement>,
    pub canvas_size: CanvasSize,
    pub version: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CanvasElement {
    pub id: String,
    pub asset_id: AssetId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub z_index: i32,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Trim, case-fold, and de-duplicate preserving first occurrence. Idempotent:
/// normalizing already-normalized tags is a no-op.
pub fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>, Error> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if tag.chars().count() > MAX_TAG_LENGTH {
            return Err(Error::TagTooLong { tag });
        }
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    if normalized.len() > MAX_TAGS {
        return Err(Error::TooManyTags {
            count: normalized.len(),
        });
    }

    Ok(normalized)
}
