use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson;

use crate::campaign::CampaignId;
use crate::database::MongoSubmissionStore;
use crate::error::Error;

use super::{Submission, SubmissionId};

#[async_trait]
pub trait SubmissionStore {
    async fn insert_submission(&self, submission: &Submission) -> Result<(), Error>;

    async fn fetch_submissions(&self) -> Result<Vec<Submission>, Error>;

    async fn fetch_submission_by_id(
        &self,
        submission_id: SubmissionId,
    ) -> Result<Option<Submission>, Error>;

    /// The derived submission count for a campaign. Deliberately recomputed
    /// from this collection; the campaign record holds no counter to drift.
    async fn count_submissions_by_campaign(&self, campaign_id: CampaignId) -> Result<u64, Error>;

    async fn update_submission(&self, submission: Submission) -> Result<Submission, Error>;
}

#[async_trait]
impl SubmissionStore for MongoSubmissionStore {
    #[tracing::instrument(skip(self))]
    async fn insert_submission(&self, submission: &Submission) -> Result<(), Error> {
        self.insert_one(submission, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_submissions(&self) -> Result<Vec<Submission>, Error> {
        let submissions: Vec<Submission> =
            self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(submissions)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_submission_by_id(
        &self,
        submission_id: SubmissionId,
    ) -> Result<Option<Submission>, Error> {
        let submission: Option<Submission> =
            self.find_one(bson::doc! { "_id": submission_id }, None).await?;

        Ok(submission)
    }

    #[tracing::instrument(skip(self))]
    async fn count_submissions_by_campaign(&self, campaign_id: CampaignId) -> Result<u64, Error> {
        let count = self
            .count_documents(bson::doc! { "campaign_id": campaign_id }, None)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self))]
    async fn update_submission(&self, mut submission: Submission) -> Result<Submission, Error> {
        let now = Utc::now();
        let old_updated_at = bson::DateTime::from_chrono(submission.updated_at);
        submission.updated_at = now;

        let replacement = bson::to_document(&submission)?;
        let result = self
            .update_one(
                bson::doc! { "_id": submission.id, "updated_at": old_updated_at },
                bson::doc! { "$set": replacement },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(Error::ConcurrentModificationDetected);
        }

        Ok(submission)
    }
}
