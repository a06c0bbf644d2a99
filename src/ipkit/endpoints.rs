use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brand::BrandId;
use crate::database::Database;
use crate::error::Error;
use crate::listing::{PageParams, Pagination};

use super::manager::{self, IpKitFilters, NewIpKit, PublishedFilter};
use super::{Asset, IpKit, IpKitId};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateIpKitBody {
    pub name: String,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub brand_id: BrandId,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IpKitListQuery {
    pub brand_id: Option<BrandId>,
    pub published: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct IpKitBody {
    pub id: IpKitId,
    pub name: String,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub brand_id: BrandId,
    pub is_published: bool,
    pub version: u32,
    pub asset_count: usize,
    pub assets: Vec<Asset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IpKitBody {
    pub fn render(ip_kit: IpKit) -> IpKitBody {
        IpKitBody {
            id: ip_kit.id,
            name: ip_kit.name,
            description: ip_kit.description,
            guidelines: ip_kit.guidelines,
            brand_id: ip_kit.brand_id,
            is_published: ip_kit.is_published,
            version: ip_kit.version,
            asset_count: ip_kit.assets.len(),
            assets: ip_kit.assets,
            created_at: ip_kit.created_at,
            updated_at: ip_kit.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct IpKitListBody {
    pub ip_kits: Vec<IpKitBody>,
    pub pagination: Pagination,
}

#[post("/ip-kits")]
#[tracing::instrument(skip(db))]
async fn create_ip_kit(
    db: Data<Box<dyn Database>>,
    body: Json<CreateIpKitBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let ip_kit = manager::create_ip_kit(
        db.get_ref().as_ref(),
        NewIpKit {
            name: body.name,
            description: body.description,
            guidelines: body.guidelines,
            brand_id: body.brand_id,
            is_published: body.is_published,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(IpKitBody::render(ip_kit)))
}

#[get("/ip-kits")]
#[tracing::instrument(skip(db))]
async fn get_ip_kits(
    db: Data<Box<dyn Database>>,
    query: Query<IpKitListQuery>,
) -> Result<Json<IpKitListBody>, Error> {
    let query = query.into_inner();

    let filters = IpKitFilters {
        brand_id: query.brand_id,
        published: query
            .published
            .as_deref()
            .map(PublishedFilter::parse)
            .unwrap_or(PublishedFilter::All),
        search: query.search,
    };
    let page = PageParams::new(query.page, query.limit);

    let (ip_kits, pagination) = manager::get_ip_kits(db.get_ref().as_ref(), filters, page).await?;

    Ok(Json(IpKitListBody {
        ip_kits: ip_kits.into_iter().map(IpKitBody::render).collect(),
        pagination,
    }))
}

#[get("/ip-kits/{ip_kit_id}")]
#[tracing::instrument(skip(db))]
async fn get_ip_kit_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<IpKitId>,
) -> Result<Json<IpKitBody>, Error> {
    let ip_kit_id = params.into_inner();

    let ip_kit = manager::get_ip_kit_by_id(db.get_ref().as_ref(), ip_kit_id).await?;

    Ok(Json(IpKitBody::render(ip_kit)))
}
