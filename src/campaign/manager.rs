use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::database::Database;
use crate::error::Error;
use crate::ipkit::{Asset, IpKitId};
use crate::listing::{paginate, PageParams, Pagination};
use crate::user::UserId;

use super::listing::{apply_filters, sort_campaigns, CampaignFilters, CampaignSort};
use super::{Campaign, CampaignId, CampaignStatus, CampaignSummary, RewardCurrency};

/// Raw, not-yet-validated campaign fields as they arrive from a client.
/// Required fields are optional here so validation can report what is
/// missing instead of failing at deserialization.
#[derive(Clone, Debug, Default)]
pub struct CampaignDraft {
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
}

#[derive(Clone, Debug)]
pub struct CampaignDetail {
    pub campaign: Campaign,
    pub brand_name: String,
    pub assets: Vec<Asset>,
    pub submission_count: u64,
}

#[derive(Debug)]
struct RequiredFields {
    title: String,
    description: String,
    guidelines: String,
    ip_kit_id: IpKitId,
}

/// Fixed validation order: missing fields, then reward sanity, then
/// date-range coherence, then deadline expiry. The first failing step wins;
/// nothing is mutated before validation passes.
fn validate_draft(draft: &CampaignDraft, now: DateTime<Utc>) -> Result<RequiredFields, Error> {
    fn present(value: &Option<String>) -> bool {
        value
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    let mut fields = Vec::new();
    if !present(&draft.title) {
        fields.push("title");
    }
    if !present(&draft.description) {
        fields.push("description");
    }
    if !present(&draft.guidelines) {
        fields.push("guidelines");
    }
    if draft.ip_kit_id.is_none() {
        fields.push("ip_kit_id");
    }
    if !fields.is_empty() {
        return Err(Error::MissingCampaignFields { fields });
    }

    if let Some(reward_amount) = draft.reward_amount {
        if reward_amount < 0.0 {
            return Err(Error::InvalidRewardAmount { reward_amount });
        }
    }

    if let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) {
        if end_date <= start_date {
            return Err(Error::InvalidDateRange {
                start_date,
                end_date,
            });
        }
    }

    if let Some(end_date) = draft.end_date {
        if end_date <= now {
            return Err(Error::ExpiredDeadline { end_date });
        }
    }

    Ok(RequiredFields {
        title: draft.title.clone().unwrap(),
        description: draft.description.clone().unwrap(),
        guidelines: draft.guidelines.clone().unwrap(),
        ip_kit_id: draft.ip_kit_id.unwrap(),
    })
}

#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: &dyn Database,
    draft: CampaignDraft,
    created_by: Option<UserId>,
) -> Result<Campaign, Error> {
    let now = Utc::now();
    let fields = validate_draft(&draft, now)?;

    let ip_kit = db
        .ip_kits()
        .fetch_ip_kit_by_id(fields.ip_kit_id)
        .await?
        .ok_or(Error::IpKitNotFound {
            ip_kit_id: fields.ip_kit_id,
        })?;

    let campaign = Campaign {
        id: CampaignId::new(),
        title: fields.title,
        description: fields.description,
        guidelines: fields.guidelines,
        ip_kit_id: ip_kit.id,
        brand_id: ip_kit.brand_id,
        status: draft.status.unwrap_or(CampaignStatus::Draft),
        start_date: draft.start_date,
        end_date: draft.end_date,
        max_submissions: draft.max_submissions.filter(|&max| max > 0),
        reward_amount: draft.reward_amount,
        reward_currency: draft.reward_currency.unwrap_or_default(),
        brief_document: draft.brief_document,
        is_featured: false,
        created_by,
        created_at: now,
        updated_at: now,
    };

    db.campaigns().insert_campaign(&campaign).await?;
    info!("created campaign {}", campaign.id);

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(
    db: &dyn Database,
    filters: CampaignFilters,
    sort: CampaignSort,
    page: PageParams,
) -> Result<(Vec<CampaignSummary>, Pagination), Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;
    let brands: HashMap<_, _> = db
        .brands()
        .fetch_brands()
        .await?
        .into_iter()
        .map(|brand| (brand.id, brand.name))
        .collect();
    let ip_kits: HashMap<_, _> = db
        .ip_kits()
        .fetch_ip_kits()
        .await?
        .into_iter()
        .map(|ip_kit| (ip_kit.id, ip_kit.assets))
        .collect();

    let mut summaries = Vec::with_capacity(campaigns.len());
    for campaign in campaigns {
        let submission_count = db
            .submissions()
            .count_submissions_by_campaign(campaign.id)
            .await?;
        let assets = ip_kits.get(&campaign.ip_kit_id);

        summaries.push(CampaignSummary {
            id: campaign.id,
            title: campaign.title,
            description: campaign.description,
            brand_name: brands
                .get(&campaign.brand_id)
                .cloned()
                .unwrap_or_else(|| "Unknown Brand".to_string()),
            status: campaign.status,
            featured: campaign.is_featured,
            deadline: campaign.end_date,
            asset_count: assets.map(|assets| assets.len()).unwrap_or(0),
            submission_count,
            thumbnail_url: assets.and_then(|assets| {
                assets
                    .first()
                    .map(|asset| asset.thumbnail_url.clone().unwrap_or_else(|| asset.url.clone()))
            }),
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        });
    }

    let mut filtered = apply_filters(summaries, &filters, Utc::now());
    sort_campaigns(&mut filtered, sort);

    Ok(paginate(filtered, page))
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<CampaignDetail, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    let brand_name = db
        .brands()
        .fetch_brand_by_id(campaign.brand_id)
        .await?
        .map(|brand| brand.name)
        .unwrap_or_else(|| "Unknown Brand".to_string());
    let assets = db
        .ip_kits()
        .fetch_ip_kit_by_id(campaign.ip_kit_id)
        .await?
        .map(|ip_kit| ip_kit.assets)
        .unwrap_or_default();
    let submission_count = db
        .submissions()
        .count_submissions_by_campaign(campaign.id)
        .await?;

    Ok(CampaignDetail {
        campaign,
        brand_name,
        assets,
        submission_count,
    })
}

#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
    draft: CampaignDraft,
    requested_status: CampaignStatus,
) -> Result<Campaign, Error> {
    let existing = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    let now = Utc::now();
    let fields = validate_draft(&draft, now)?;

    if requested_status != existing.status {
        if !existing.status.can_transition_to(requested_status) {
            return Err(Error::IllegalStatusTransition {
                current: existing.status,
                requested: requested_status,
            });
        }

        // Taking a campaign out of circulation with work already submitted
        // is legal, but operators want to know about it.
        if matches!(
            requested_status,
            CampaignStatus::Paused | CampaignStatus::Closed
        ) {
            let submission_count = db
                .submissions()
                .count_submissions_by_campaign(campaign_id)
                .await?;
            if submission_count > 0 {
                warn!(
                    "campaign {} moved to {:?} with {} existing submissions",
                    campaign_id, requested_status, submission_count,
                );
            }
        }
    }

    // Repointing at another kit re-derives the brand, same as create; the
    // campaign can never reference a kit owned by a brand it does not record.
    let ip_kit = db
        .ip_kits()
        .fetch_ip_kit_by_id(fields.ip_kit_id)
        .await?
        .ok_or(Error::IpKitNotFound {
            ip_kit_id: fields.ip_kit_id,
        })?;

    let updated = Campaign {
        id: existing.id,
        title: fields.title,
        description: fields.description,
        guidelines: fields.guidelines,
        ip_kit_id: ip_kit.id,
        brand_id: ip_kit.brand_id,
        status: requested_status,
        start_date: draft.start_date.or(existing.start_date),
        end_date: draft.end_date.or(existing.end_date),
        max_submissions: draft.max_submissions.filter(|&max| max > 0),
        reward_amount: draft.reward_amount,
        reward_currency: draft.reward_currency.unwrap_or_default(),
        brief_document: draft.brief_document,
        is_featured: existing.is_featured,
        created_by: existing.created_by,
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    let updated = db.campaigns().update_campaign(updated).await?;
    info!("updated campaign {}", updated.id);

    Ok(updated)
}
