use actix_web::web::{Data, Json, Query};
use actix_web::{delete, get, post, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;
use crate::user::UserId;
use crate::utils::SuccessBody;

use super::manager;

#[derive(Clone, Debug, Deserialize)]
pub struct BookmarkListQuery {
    pub user_id: UserId,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BookmarkBody {
    pub user_id: UserId,
    pub campaign_id: CampaignId,
}

#[derive(Clone, Debug, Serialize)]
pub struct BookmarkListBody {
    pub bookmarks: Vec<CampaignId>,
}

#[get("/bookmarks")]
#[tracing::instrument(skip(db))]
async fn get_bookmarks(
    db: Data<Box<dyn Database>>,
    query: Query<BookmarkListQuery>,
) -> Result<Json<BookmarkListBody>, Error> {
    let bookmarks = manager::get_bookmarks(db.get_ref().as_ref(), query.user_id).await?;

    Ok(Json(BookmarkListBody { bookmarks }))
}

#[post("/bookmarks")]
#[tracing::instrument(skip(db))]
async fn add_bookmark(
    db: Data<Box<dyn Database>>,
    body: Json<BookmarkBody>,
) -> Result<HttpResponse, Error> {
    manager::add_bookmark(db.get_ref().as_ref(), body.user_id, body.campaign_id).await?;

    Ok(HttpResponse::Created().json(SuccessBody::new()))
}

#[delete("/bookmarks")]
#[tracing::instrument(skip(db))]
async fn remove_bookmark(
    db: Data<Box<dyn Database>>,
    query: Query<BookmarkBody>,
) -> Result<Json<SuccessBody>, Error> {
    manager::remove_bookmark(db.get_ref().as_ref(), query.user_id, query.campaign_id).await?;

    Ok(Json(SuccessBody::new()))
}
