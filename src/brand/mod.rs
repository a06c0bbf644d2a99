use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};
use crate::user::UserId;

pub mod db;

pub type BrandId = TypedId<Brand>;

/// The IP owner running campaigns. Brands are provisioned out of band (see
/// `seed`); the HTTP surface only ever reads them.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: BrandId,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub owner_id: UserId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TypedIdMarker for Brand {
    fn tag() -> &'static str {
        "BRD"
    }
}
