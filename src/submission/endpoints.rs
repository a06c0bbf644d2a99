use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;
use crate::listing::{PageParams, Pagination};
use crate::user::UserId;

use super::manager::{self, NewSubmission, ReviewAction, SubmissionFilters, SubmissionSummary};
use super::{CanvasData, Submission, SubmissionId, SubmissionStatus};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateSubmissionBody {
    pub campaign_id: CampaignId,
    pub creator_id: UserId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub artwork_url: Option<String>,
    pub canvas_data: Option<CanvasData>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubmissionListQuery {
    pub campaign_id: Option<CampaignId>,
    pub creator_id: Option<UserId>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReviewBody {
    pub reviewer_id: Option<UserId>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
}

impl ReviewBody {
    fn into_action(self) -> ReviewAction {
        ReviewAction {
            reviewer_id: self.reviewer_id,
            feedback: self.feedback,
            rating: self.rating,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WithdrawBody {
    pub creator_id: UserId,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionBody {
    pub id: SubmissionId,
    pub campaign_id: CampaignId,
    pub creator_id: UserId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub artwork_url: Option<String>,
    pub canvas_data: Option<CanvasData>,
    pub status: SubmissionStatus,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubmissionBody {
    pub fn render(submission: Submission) -> SubmissionBody {
        SubmissionBody {
            id: submission.id,
            campaign_id: submission.campaign_id,
            creator_id: submission.creator_id,
            title: submission.title,
            description: submission.description,
            tags: submission.tags,
            artwork_url: submission.artwork_url,
            canvas_data: submission.canvas_data,
            status: submission.status,
            reviewed_by: submission.reviewed_by,
            reviewed_at: submission.reviewed_at,
            feedback: submission.feedback,
            rating: submission.rating,
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}

/// The review-queue row shape. Names are resolved server-side so the client
/// never joins.
#[derive(Clone, Debug, Serialize)]
pub struct SubmissionSummaryBody {
    pub id: SubmissionId,
    pub campaign_id: CampaignId,
    pub campaign_title: String,
    pub creator_id: UserId,
    pub creator_name: String,
    pub title: String,
    pub status: SubmissionStatus,
    pub artwork_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionSummaryBody {
    fn render(summary: SubmissionSummary) -> SubmissionSummaryBody {
        SubmissionSummaryBody {
            id: summary.submission.id,
            campaign_id: summary.submission.campaign_id,
            campaign_title: summary.campaign_title,
            creator_id: summary.submission.creator_id,
            creator_name: summary.creator_name,
            title: summary.submission.title,
            status: summary.submission.status,
            artwork_url: summary.submission.artwork_url,
            created_at: summary.submission.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionEnvelope<T> {
    pub submission: T,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionListBody {
    pub submissions: Vec<SubmissionSummaryBody>,
    pub pagination: Pagination,
}

#[post("/submissions")]
#[tracing::instrument(skip(db))]
async fn create_submission(
    db: Data<Box<dyn Database>>,
    body: Json<CreateSubmissionBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let new = NewSubmission {
        campaign_id: body.campaign_id,
        creator_id: body.creator_id,
        title: body.title,
        description: body.description,
        tags: body.tags,
        artwork_url: body.artwork_url,
        canvas_data: body.canvas_data,
    };

    let submission = manager::create_submission(db.get_ref().as_ref(), new).await?;

    Ok(HttpResponse::Created().json(SubmissionEnvelope {
        submission: SubmissionBody::render(submission),
    }))
}

#[get("/submissions")]
#[tracing::instrument(skip(db))]
async fn get_submissions(
    db: Data<Box<dyn Database>>,
    query: Query<SubmissionListQuery>,
) -> Result<Json<SubmissionListBody>, Error> {
    let query = query.into_inner();

    let filters = SubmissionFilters {
        campaign_id: query.campaign_id,
        creator_id: query.creator_id,
        status: query.status.as_deref().and_then(SubmissionStatus::parse),
    };
    let page = PageParams::new(query.page, query.limit);

    let (summaries, pagination) =
        manager::get_submissions(db.get_ref().as_ref(), filters, page).await?;

    Ok(Json(SubmissionListBody {
        submissions: summaries
            .into_iter()
            .map(SubmissionSummaryBody::render)
            .collect(),
        pagination,
    }))
}

#[post("/submissions/{submission_id}/approve")]
#[tracing::instrument(skip(db))]
async fn approve_submission(
    db: Data<Box<dyn Database>>,
    params: Path<SubmissionId>,
    body: Json<ReviewBody>,
) -> Result<Json<SubmissionEnvelope<SubmissionBody>>, Error> {
    let submission_id = params.into_inner();

    let submission =
        manager::approve_submission(db.get_ref().as_ref(), submission_id, body.into_inner().into_action())
            .await?;

    Ok(Json(SubmissionEnvelope {
        submission: SubmissionBody::render(submission),
    }))
}

#[post("/submissions/{submission_id}/reject")]
#[tracing::instrument(skip(db))]
async fn reject_submission(
    db: Data<Box<dyn Database>>,
    params: Path<SubmissionId>,
    body: Json<ReviewBody>,
) -> Result<Json<SubmissionEnvelope<SubmissionBody>>, Error> {
    let submission_id = params.into_inner();

    let submission =
        manager::reject_submission(db.get_ref().as_ref(), submission_id, body.into_inner().into_action())
            .await?;

    Ok(Json(SubmissionEnvelope {
        submission: SubmissionBody::render(submission),
    }))
}

#[post("/submissions/{submission_id}/reconsider")]
#[tracing::instrument(skip(db))]
async fn reconsider_submission(
    db: Data<Box<dyn Database>>,
    params: Path<SubmissionId>,
    body: Json<ReviewBody>,
) -> Result<Json<SubmissionEnvelope<SubmissionBody>>, Error> {
    let submission_id = params.into_inner();

    let submission = manager::reconsider_submission(
        db.get_ref().as_ref(),
        submission_id,
        body.into_inner().into_action(),
    )
    .await?;

    Ok(Json(SubmissionEnvelope {
        submission: SubmissionBody::render(submission),
    }))
}

#[post("/submissions/{submission_id}/withdraw")]
#[tracing::instrument(skip(db))]
async fn withdraw_submission(
    db: Data<Box<dyn Database>>,
    params: Path<SubmissionId>,
    body: Json<WithdrawBody>,
) -> Result<Json<SubmissionEnvelope<SubmissionBody>>, Error> {
    let submission_id = params.into_inner();

    let submission =
        manager::withdraw_submission(db.get_ref().as_ref(), submission_id, body.creator_id).await?;

    Ok(Json(SubmissionEnvelope {
        submission: SubmissionBody::render(submission),
    }))
}
