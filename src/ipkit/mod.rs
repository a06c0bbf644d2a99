use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};
use crate::brand::BrandId;
use crate::user::UserId;

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type IpKitId = TypedId<IpKit>;
pub type AssetId = TypedId<Asset>;

/// A named, versioned collection of brand-owned creative assets that creators
/// may compose derivative artwork from.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IpKit {
    #[serde(rename = "_id")]
    pub id: IpKitId,
    pub name: String,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub brand_id: BrandId,
    pub is_published: bool,
    pub version: u32,
    pub assets: Vec<Asset>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TypedIdMarker for IpKit {
    fn tag() -> &'static str {
        "KIT"
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Asset {
    pub id: AssetId,
    pub filename: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub category: AssetCategory,
    pub tags: Vec<String>,
    pub metadata: AssetMetadata,
    pub uploaded_by: Option<UserId>,
}

impl TypedIdMarker for Asset {
    fn tag() -> &'static str {
        "AST"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Characters,
    Backgrounds,
    Logos,
    Titles,
    Props,
    Other,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssetMetadata {
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    pub mime_type: String,
}
