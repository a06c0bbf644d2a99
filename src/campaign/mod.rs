use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brand::BrandId;
use crate::ipkit::IpKitId;
use crate::typedid::{TypedId, TypedIdMarker};
use crate::user::UserId;

pub mod db;
pub mod endpoints;
pub mod listing;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

/// A brand-initiated call for creator submissions against one IP kit, bounded
/// by a status lifecycle and an optional date window. The number of
/// submissions is never stored here; it is always derived from the submission
/// collection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub guidelines: String,
    pub ip_kit_id: IpKitId,
    pub brand_id: BrandId,
    pub status: CampaignStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_submissions: Option<u32>,
    pub reward_amount: Option<f64>,
    pub reward_currency: RewardCurrency,
    pub brief_document: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_by: Option<UserId>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CPN"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Closed,
}

impl CampaignStatus {
    /// The full lifecycle table. `Closed` is terminal.
    pub fn allowed_transitions(self) -> &'static [CampaignStatus] {
        match self {
            CampaignStatus::Draft => &[CampaignStatus::Active],
            CampaignStatus::Active => &[CampaignStatus::Paused, CampaignStatus::Closed],
            CampaignStatus::Paused => &[CampaignStatus::Active, CampaignStatus::Closed],
            CampaignStatus::Closed => &[],
        }
    }

    pub fn can_transition_to(self, requested: CampaignStatus) -> bool {
        self.allowed_transitions().contains(&requested)
    }

    /// Lenient: unknown tokens yield `None` so list filters treat them as a
    /// no-op instead of an error.
    pub fn parse(value: &str) -> Option<CampaignStatus> {
        match value {
            "draft" => Some(CampaignStatus::Draft),
            "active" => Some(CampaignStatus::Active),
            "paused" => Some(CampaignStatus::Paused),
            "closed" => Some(CampaignStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum RewardCurrency {
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Default for RewardCurrency {
    fn default() -> RewardCurrency {
        RewardCurrency::USD
    }
}

/// The discovery-view row: a campaign joined with its brand name, the asset
/// count of its IP kit, and the derived submission count. This is the shape
/// the listing filters and sorts operate on.
#[derive(Clone, Debug, Serialize)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub brand_name: String,
    pub status: CampaignStatus,
    pub featured: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub asset_count: usize,
    pub submission_count: u64,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
