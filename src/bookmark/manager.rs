use tracing::info;

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;
use crate::user::UserId;

#[tracing::instrument(skip(db))]
pub async fn get_bookmarks(db: &dyn Database, user_id: UserId) -> Result<Vec<CampaignId>, Error> {
    let bookmarks = db.bookmarks().fetch_bookmarks_by_user(user_id).await?;

    Ok(bookmarks
        .into_iter()
        .map(|bookmark| bookmark.campaign_id)
        .collect())
}

#[tracing::instrument(skip(db))]
pub async fn add_bookmark(
    db: &dyn Database,
    user_id: UserId,
    campaign_id: CampaignId,
) -> Result<(), Error> {
    db.campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    db.bookmarks().insert_bookmark(user_id, campaign_id).await?;
    info!("user {} bookmarked campaign {}", user_id, campaign_id);

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn remove_bookmark(
    db: &dyn Database,
    user_id: UserId,
    campaign_id: CampaignId,
) -> Result<(), Error> {
    db.bookmarks().delete_bookmark(user_id, campaign_id).await?;
    info!("user {} unbookmarked campaign {}", user_id, campaign_id);

    Ok(())
}
