use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson;
use mongodb::options::UpdateOptions;

use crate::campaign::CampaignId;
use crate::database::MongoBookmarkStore;
use crate::error::Error;
use crate::user::UserId;

use super::Bookmark;

#[async_trait]
pub trait BookmarkStore {
    async fn fetch_bookmarks_by_user(&self, user_id: UserId) -> Result<Vec<Bookmark>, Error>;

    /// Idempotent: inserting an existing pair leaves the stored row untouched.
    async fn insert_bookmark(&self, user_id: UserId, campaign_id: CampaignId)
        -> Result<(), Error>;

    /// Idempotent: deleting an absent pair is not an error.
    async fn delete_bookmark(&self, user_id: UserId, campaign_id: CampaignId)
        -> Result<(), Error>;
}

#[async_trait]
impl BookmarkStore for MongoBookmarkStore {
    #[tracing::instrument(skip(self))]
    async fn fetch_bookmarks_by_user(&self, user_id: UserId) -> Result<Vec<Bookmark>, Error> {
        let bookmarks: Vec<Bookmark> = self
            .find(bson::doc! { "user_id": user_id }, None)
            .await?
            .try_collect()
            .await?;

        Ok(bookmarks)
    }

    #[tracing::instrument(skip(self))]
    async fn insert_bookmark(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<(), Error> {
        let created_at = bson::DateTime::from_chrono(Utc::now());
        self.update_one(
            bson::doc! { "user_id": user_id, "campaign_id": campaign_id },
            bson::doc! { "$setOnInsert": { "created_at": created_at } },
            UpdateOptions::builder().upsert(true).build(),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_bookmark(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
    ) -> Result<(), Error> {
        self.delete_one(
            bson::doc! { "user_id": user_id, "campaign_id": campaign_id },
            None,
        )
        .await?;

        Ok(())
    }
}
