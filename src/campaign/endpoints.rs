use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, put, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::ipkit::{Asset, IpKitId};
use crate::listing::{PageParams, Pagination, SortDirection};
use crate::user::UserId;

use super::listing::{
    AssetCountBucket, CampaignFilters, CampaignSort, CampaignSortField, Category, DeadlineBucket,
    StatusFilter,
};
use super::manager::{self, CampaignDetail, CampaignDraft};
use super::{Campaign, CampaignId, CampaignStatus, CampaignSummary, RewardCurrency};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateCampaignBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub ip_kit_id: Option<IpKitId>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_submissions: Option<u32>,
    pub reward_amount: Option<f64>,
    pub reward_currency: Option<RewardCurrency>,
    pub brief_document: Option<String>,
    pub status: Option<CampaignStatus>,
    pub created_by: Option<UserId>,
}

impl CreateCampaignBody {
    fn into_draft(self) -> CampaignDraft {
        CampaignDraft {
            title: self.title,
            description: self.description,
            guidelines: self.guidelines,
            ip_kit_id: self.ip_kit_id,
            start_date: self.start_date,
            end_date: self.end_date,
            max_submissions: self.max_submissions,
            reward_amount: self.reward_amount,
            reward_currency: self.reward_currency,
            brief_document: self.brief_document,
            status: self.status,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCampaignBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub ip_kit_id: Option<IpKitId>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_submissions: Option<u32>,
    pub reward_amount: Option<f64>,
    pub reward_currency: Option<RewardCurrency>,
    pub brief_document: Option<String>,
    pub status: CampaignStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CampaignListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<String>,
    #[serde(rename = "assetCount")]
    pub asset_count: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
    pub featured: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub guidelines: String,
    pub ip_kit_id: IpKitId,
    pub brand_name: String,
    pub status: CampaignStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_submissions: Option<u32>,
    pub reward_amount: Option<f64>,
    pub reward_currency: RewardCurrency,
    pub brief_document: Option<String>,
    pub submission_count: u64,
    pub assets: Vec<Asset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(detail: CampaignDetail) -> CampaignBody {
        CampaignBody {
            id: detail.campaign.id,
            title: detail.campaign.title,
            description: detail.campaign.description,
            guidelines: detail.campaign.guidelines,
            ip_kit_id: detail.campaign.ip_kit_id,
            brand_name: detail.brand_name,
            status: detail.campaign.status,
            start_date: detail.campaign.start_date,
            end_date: detail.campaign.end_date,
            max_submissions: detail.campaign.max_submissions,
            reward_amount: detail.campaign.reward_amount,
            reward_currency: detail.campaign.reward_currency,
            brief_document: detail.campaign.brief_document,
            submission_count: detail.submission_count,
            assets: detail.assets,
            created_at: detail.campaign.created_at,
            updated_at: detail.campaign.updated_at,
        }
    }
}

/// Slim shape returned by the mutating endpoints, wrapped as `{campaign: ...}`.
#[derive(Clone, Debug, Serialize)]
pub struct CampaignCreatedBody {
    pub id: CampaignId,
    pub title: String,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignCreatedBody {
    fn render(campaign: Campaign) -> CampaignCreatedBody {
        CampaignCreatedBody {
            id: campaign.id,
            title: campaign.title,
            status: campaign.status,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CampaignEnvelope<T> {
    pub campaign: T,
}

#[derive(Clone, Debug, Serialize)]
pub struct CampaignListBody {
    pub campaigns: Vec<CampaignSummary>,
    pub pagination: Pagination,
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();
    let created_by = body.created_by;

    let campaign =
        manager::create_campaign(db.get_ref().as_ref(), body.into_draft(), created_by).await?;

    Ok(HttpResponse::Created().json(CampaignEnvelope {
        campaign: CampaignCreatedBody::render(campaign),
    }))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns(
    db: Data<Box<dyn Database>>,
    query: Query<CampaignListQuery>,
) -> Result<Json<CampaignListBody>, Error> {
    let query = query.into_inner();

    let filters = CampaignFilters {
        search: query.search,
        status: StatusFilter::parse(query.status.as_deref()),
        category: query.category.as_deref().and_then(Category::parse),
        deadline: query.deadline.as_deref().and_then(DeadlineBucket::parse),
        asset_count: query
            .asset_count
            .as_deref()
            .and_then(AssetCountBucket::parse),
        featured: matches!(query.featured.as_deref(), Some("true")),
    };
    let sort = CampaignSort {
        field: query
            .sort_by
            .as_deref()
            .and_then(CampaignSortField::parse)
            .unwrap_or(CampaignSortField::CreatedAt),
        direction: query
            .sort_direction
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or(SortDirection::Descending),
    };
    let page = PageParams::new(query.page, query.limit);

    let (campaigns, pagination) =
        manager::get_campaigns(db.get_ref().as_ref(), filters, sort, page).await?;

    Ok(Json(CampaignListBody {
        campaigns,
        pagination,
    }))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignEnvelope<CampaignBody>>, Error> {
    let campaign_id = params.into_inner();

    let detail = manager::get_campaign_by_id(db.get_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignEnvelope {
        campaign: CampaignBody::render(detail),
    }))
}

#[put("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
async fn update_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<UpdateCampaignBody>,
) -> Result<Json<CampaignEnvelope<CampaignCreatedBody>>, Error> {
    let campaign_id = params.into_inner();
    let body = body.into_inner();

    let requested_status = body.status;
    let draft = CampaignDraft {
        title: body.title,
        description: body.description,
        guidelines: body.guidelines,
        ip_kit_id: body.ip_kit_id,
        start_date: body.start_date,
        end_date: body.end_date,
        max_submissions: body.max_submissions,
        reward_amount: body.reward_amount,
        reward_currency: body.reward_currency,
        brief_document: body.brief_document,
        status: Some(requested_status),
    };

    let campaign =
        manager::update_campaign(db.get_ref().as_ref(), campaign_id, draft, requested_status)
            .await?;

    Ok(Json(CampaignEnvelope {
        campaign: CampaignCreatedBody::render(campaign),
    }))
}
