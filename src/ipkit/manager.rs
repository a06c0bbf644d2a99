use chrono::Utc;
use tracing::info;

use crate::brand::BrandId;
use crate::database::Database;
use crate::error::Error;
use crate::listing::{paginate, PageParams, Pagination};

use super::{IpKit, IpKitId};

#[derive(Clone, Debug)]
pub struct NewIpKit {
    pub name: String,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub brand_id: BrandId,
    pub is_published: bool,
}

#[derive(Clone, Debug, Default)]
pub struct IpKitFilters {
    pub brand_id: Option<BrandId>,
    pub published: PublishedFilter,
    pub search: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PublishedFilter {
    All,
    Published,
    Unpublished,
}

impl Default for PublishedFilter {
    fn default() -> PublishedFilter {
        PublishedFilter::All
    }
}

impl PublishedFilter {
    /// Lenient: anything other than "true"/"false" means no filter.
    pub fn parse(value: &str) -> PublishedFilter {
        match value {
            "true" => PublishedFilter::Published,
            "false" => PublishedFilter::Unpublished,
            _ => PublishedFilter::All,
        }
    }
}

#[tracing::instrument(skip(db))]
pub async fn create_ip_kit(db: &dyn Database, draft: NewIpKit) -> Result<IpKit, Error> {
    let name = draft.name.trim().to_string();
    let length = name.chars().count();
    if length < 1 || length > 100 {
        return Err(Error::InvalidIpKitName { length });
    }

    db.brands()
        .fetch_brand_by_id(draft.brand_id)
        .await?
        .ok_or(Error::BrandNotFound {
            brand_id: draft.brand_id,
        })?;

    let now = Utc::now();
    let ip_kit = IpKit {
        id: IpKitId::new(),
        name,
        description: draft.description,
        guidelines: draft.guidelines,
        brand_id: draft.brand_id,
        is_published: draft.is_published,
        version: 1,
        assets: vec![],
        created_at: now,
        updated_at: now,
    };

    db.ip_kits().insert_ip_kit(&ip_kit).await?;
    info!("created ip kit {}", ip_kit.id);

    Ok(ip_kit)
}

#[tracing::instrument(skip(db))]
pub async fn get_ip_kits(
    db: &dyn Database,
    filters: IpKitFilters,
    page: PageParams,
) -> Result<(Vec<IpKit>, Pagination), Error> {
    let ip_kits = db.ip_kits().fetch_ip_kits().await?;

    Ok(paginate(apply_filters(ip_kits, &filters), page))
}

#[tracing::instrument(skip(db))]
pub async fn get_ip_kit_by_id(db: &dyn Database, ip_kit_id: IpKitId) -> Result<IpKit, Error> {
    let ip_kit = db
        .ip_kits()
        .fetch_ip_kit_by_id(ip_kit_id)
        .await?
        .ok_or(Error::IpKitNotFound { ip_kit_id })?;

    Ok(ip_kit)
}

fn apply_filters(ip_kits: Vec<IpKit>, filters: &IpKitFilters) -> Vec<IpKit> {
    ip_kits
        .into_iter()
        .filter(|ip_kit| match filters.brand_id {
            Some(brand_id) => ip_kit.brand_id == brand_id,
            None => true,
        })
        .filter(|ip_kit| match filters.published {
            PublishedFilter::All => true,
            PublishedFilter::Published => ip_kit.is_published,
            PublishedFilter::Unpublished => !ip_kit.is_published,
        })
        .filter(|ip_kit| match &filters.search {
            Some(search) => {
                let search = search.to_lowercase();
                ip_kit.name.to_lowercase().contains(&search)
                    || ip_kit
                        .description
                        .as_ref()
                        .map(|description| description.to_lowercase().contains(&search))
                        .unwrap_or(false)
            }
            None => true,
        })
        .collect()
}
