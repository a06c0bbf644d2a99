use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use crate::campaign::{CampaignId, CampaignStatus};
use crate::database::Database;
use crate::error::Error;
use crate::listing::{paginate, PageParams, Pagination};
use crate::user::UserId;

use super::{normalize_tags, CanvasData, Submission, SubmissionId, SubmissionStatus};

#[derive(Clone, Debug)]
pub struct NewSubmission {
    pub campaign_id: CampaignId,
    pub creator_id: UserId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub artwork_url: Option<String>,
    pub canvas_data: Option<CanvasData>,
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionFilters {
    pub campaign_id: Option<CampaignId>,
    pub creator_id: Option<UserId>,
    pub status: Option<SubmissionStatus>,
}

/// Optional feedback and rating a reviewer attaches to a status transition.
#[derive(Clone, Debug, Default)]
pub struct ReviewAction {
    pub reviewer_id: Option<UserId>,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
}

/// The review-queue row: a submission joined with its campaign title and
/// creator display name.
#[derive(Clone, Debug)]
pub struct SubmissionSummary {
    pub submission: Submission,
    pub campaign_title: String,
    pub creator_name: String,
}

#[tracing::instrument(skip(db))]
pub async fn create_submission(
    db: &dyn Database,
    new: NewSubmission,
) -> Result<Submission, Error> {
    let title_length = new.title.chars().count();
    if title_length < 3 || title_length > 100 {
        return Err(Error::InvalidTitleLength {
            length: title_length,
        });
    }

    let description_length = new.description.chars().count();
    if description_length < 10 || description_length > 1000 {
        return Err(Error::InvalidDescriptionLength {
            length: description_length,
        });
    }

    if let Some(canvas_data) = &new.canvas_data {
        if canvas_data.elements.is_empty() {
            return Err(Error::EmptyCanvas);
        }
    }

    let tags = normalize_tags(new.tags)?;

    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(new.campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound {
            campaign_id: new.campaign_id,
        })?;

    if campaign.status != CampaignStatus::Active {
        return Err(Error::CampaignNotAcceptingSubmissions {
            campaign_id: campaign.id,
            status: campaign.status,
        });
    }

    if let Some(max_submissions) = campaign.max_submissions {
        let count = db
            .submissions()
            .count_submissions_by_campaign(campaign.id)
            .await?;
        if count >= max_submissions as u64 {
            return Err(Error::SubmissionLimitReached {
                campaign_id: campaign.id,
                max_submissions,
            });
        }
    }

    db.users()
        .fetch_user_by_id(new.creator_id)
        .await?
        .ok_or(Error::UserNotFound {
            user_id: new.creator_id,
        })?;

    let now = Utc::now();
    let submission = Submission {
        id: SubmissionId::new(),
        title: new.title,
        description: new.description,
        artwork_url: new.artwork_url,
        thumbnail_url: None,
        canvas_data: new.canvas_data,
        tags,
        campaign_id: campaign.id,
        creator_id: new.creator_id,
        status: SubmissionStatus::Pending,
        reviewed_by: None,
        reviewed_at: None,
        feedback: None,
        rating: None,
        is_public: false,
        view_count: 0,
        like_count: 0,
        created_at: now,
        updated_at: now,
    };

    db.submissions().insert_submission(&submission).await?;
    info!(
        "created submission {} for campaign {}",
        submission.id, submission.campaign_id,
    );

    Ok(submission)
}

#[tracing::instrument(skip(db))]
pub async fn get_submissions(
    db: &dyn Database,
    filters: SubmissionFilters,
    page: PageParams,
) -> Result<(Vec<SubmissionSummary>, Pagination), Error> {
    let submissions = db.submissions().fetch_submissions().await?;

    let (page_items, pagination) = paginate(apply_filters(submissions, &filters), page);

    let mut campaign_titles: HashMap<CampaignId, String> = HashMap::new();
    let mut creator_names: HashMap<UserId, String> = HashMap::new();
    let mut summaries = Vec::with_capacity(page_items.len());
    for submission in page_items {
        if !campaign_titles.contains_key(&submission.campaign_id) {
            let title = db
                .campaigns()
                .fetch_campaign_by_id(submission.campaign_id)
                .await?
                .map(|campaign| campaign.title)
                .unwrap_or_else(|| "Unknown Campaign".to_string());
            campaign_titles.insert(submission.campaign_id, title);
        }
        if !creator_names.contains_key(&submission.creator_id) {
            let name = db
                .users()
                .fetch_user_by_id(submission.creator_id)
                .await?
                .map(|user| user.display_name)
                .unwrap_or_else(|| "Unknown Creator".to_string());
            creator_names.insert(submission.creator_id, name);
        }

        summaries.push(SubmissionSummary {
            campaign_title: campaign_titles[&submission.campaign_id].clone(),
            creator_name: creator_names[&submission.creator_id].clone(),
            submission,
        });
    }

    Ok((summaries, pagination))
}

fn apply_filters(submissions: Vec<Submission>, filters: &SubmissionFilters) -> Vec<Submission> {
    submissions
        .into_iter()
        .filter(|submission| match filters.campaign_id {
            Some(campaign_id) => submission.campaign_id == campaign_id,
            None => true,
        })
        .filter(|submission| match filters.creator_id {
            Some(creator_id) => submission.creator_id == creator_id,
            None => true,
        })
        .filter(|submission| match filters.status {
            Some(status) => submission.status == status,
            None => true,
        })
        .collect()
}

#[tracing::instrument(skip(db))]
pub async fn approve_submission(
    db: &dyn Database,
    submission_id: SubmissionId,
    review: ReviewAction,
) -> Result<Submission, Error> {
    apply_review(
        db,
        submission_id,
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        review,
    )
    .await
}

#[tracing::instrument(skip(db))]
pub async fn reject_submission(
    db: &dyn Database,
    submission_id: SubmissionId,
    review: ReviewAction,
) -> Result<Submission, Error> {
    apply_review(
        db,
        submission_id,
        SubmissionStatus::Pending,
        SubmissionStatus::Rejected,
        review,
    )
    .await
}

/// Explicit reviewer override pulling a rejected submission back to approved.
/// This is the only road out of `rejected` other than withdrawal.
#[tracing::instrument(skip(db))]
pub async fn reconsider_submission(
    db: &dyn Database,
    submission_id: SubmissionId,
    review: ReviewAction,
) -> Result<Submission, Error> {
    apply_review(
        db,
        submission_id,
        SubmissionStatus::Rejected,
        SubmissionStatus::Approved,
        review,
    )
    .await
}

async fn apply_review(
    db: &dyn Database,
    submission_id: SubmissionId,
    allowed_from: SubmissionStatus,
    requested: SubmissionStatus,
    review: ReviewAction,
) -> Result<Submission, Error> {
    let reviewer_id = review.reviewer_id.ok_or(Error::MissingReviewerIdentity)?;

    if let Some(rating) = review.rating {
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidRating { rating });
        }
    }

    db.users()
        .fetch_user_by_id(reviewer_id)
        .await?
        .ok_or(Error::UserNotFound {
            user_id: reviewer_id,
        })?;

    let submission = db
        .submissions()
        .fetch_submission_by_id(submission_id)
        .await?
        .ok_or(Error::SubmissionNotFound { submission_id })?;

    if submission.status != allowed_from {
        return Err(Error::IllegalReviewTransition {
            current: submission.status,
            requested,
        });
    }

    let updated = Submission {
        status: requested,
        reviewed_by: Some(reviewer_id),
        reviewed_at: Some(Utc::now()),
        feedback: review.feedback,
        rating: review.rating,
        ..submission
    };

    let updated = db.submissions().update_submission(updated).await?;
    info!(
        "submission {} moved to {:?} by reviewer {}",
        updated.id, updated.status, reviewer_id,
    );

    Ok(updated)
}

#[tracing::instrument(skip(db))]
pub async fn withdraw_submission(
    db: &dyn Database,
    submission_id: SubmissionId,
    creator_id: UserId,
) -> Result<Submission, Error> {
    let submission = db
        .submissions()
        .fetch_submission_by_id(submission_id)
        .await?
        .ok_or(Error::SubmissionNotFound { submission_id })?;

    if submission.creator_id != creator_id {
        return Err(Error::NotSubmissionOwner {
            submission_id,
            user_id: creator_id,
        });
    }

    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(submission.campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound {
            campaign_id: submission.campaign_id,
        })?;

    if campaign.status == CampaignStatus::Closed {
        return Err(Error::CampaignAlreadyClosed {
            campaign_id: campaign.id,
        });
    }

    if !submission.status.creator_can_withdraw() {
        return Err(Error::IllegalReviewTransition {
            current: submission.status,
            requested: SubmissionStatus::Withdrawn,
        });
    }

    let updated = Submission {
        status: SubmissionStatus::Withdrawn,
        ..submission
    };

    let updated = db.submissions().update_submission(updated).await?;
    info!("submission {} withdrawn by its creator", updated.id);

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandId;
    use crate::campaign::{Campaign, RewardCurrency};
    use crate::database::test::MockDatabase;
    use crate::ipkit::{AssetId, IpKitId};
    use crate::submission::{CanvasElement, CanvasSize};
    use crate::user::{User, UserRole};
    use std::sync::{Arc, Mutex};

    fn sample_campaign(campaign_id: CampaignId, status: CampaignStatus) -> Campaign {
        let now = Utc::now();
        Campaign {
            id: campaign_id,
            title: "Dragon Art Jam".to_string(),
            description: "Compose fan art from our dragon kit".to_string(),
            guidelines: "Keep it family friendly".to_string(),
            ip_kit_id: IpKitId::new(),
            brand_id: BrandId::new(),
            status,
            start_date: None,
            end_date: None,
            max_submissions: None,
            reward_amount: None,
            reward_currency: RewardCurrency::USD,
            brief_document: None,
            is_featured: false,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_user(user_id: UserId) -> User {
        let now = Utc::now();
        User {
            id: user_id,
            email: "casey@example.com".to_string(),
            display_name: "Casey".to_string(),
            role: UserRole::Creator,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_submission(
        submission_id: SubmissionId,
        creator_id: UserId,
        status: SubmissionStatus,
    ) -> Submission {
        let now = Utc::now();
        Submission {
            id: submission_id,
            title: "Epic Dragon".to_string(),
            description: "A dragon over neon rooftops".to_string(),
            artwork_url: None,
            thumbnail_url: None,
            canvas_data: None,
            tags: vec!["dragon".to_string()],
            campaign_id: CampaignId::new(),
            creator_id,
            status,
            reviewed_by: None,
            reviewed_at: None,
            feedback: None,
            rating: None,
            is_public: false,
            view_count: 0,
            like_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn one_element_canvas() -> CanvasData {
        CanvasData {
            elements: vec![CanvasElement {
                id: "element-1".to_string(),
                asset_id: AssetId::new(),
                x: 10.0,
                y: 20.0,
                width: 200.0,
                height: 150.0,
                rotation: 0.0,
                z_index: 1,
            }],
            canvas_size: CanvasSize {
                width: 800,
                height: 600,
            },
            version: "1.0".to_string(),
        }
    }

    fn new_submission(campaign_id: CampaignId, creator_id: UserId) -> NewSubmission {
        NewSubmission {
            campaign_id,
            creator_id,
            title: "Epic Dragon".to_string(),
            description: "Twelve chars".to_string(),
            tags: vec![],
            artwork_url: None,
            canvas_data: Some(one_element_canvas()),
        }
    }

    fn mock_active_campaign(db: &mut MockDatabase) {
        db.campaigns.on_fetch_campaign_by_id =
            Box::new(|id| Ok(Some(sample_campaign(id, CampaignStatus::Active))));
        db.users.on_fetch_user_by_id = Box::new(|id| Ok(Some(sample_user(id))));
    }

    #[tokio::test]
    async fn create_submission_starts_pending() {
        let mut db = MockDatabase::new();
        mock_active_campaign(&mut db);
        let called_insert = Arc::new(Mutex::new(false));
        let called_insert_clone = Arc::clone(&called_insert);
        db.submissions.on_insert_submission = Box::new(move |submission| {
            *called_insert_clone.lock().unwrap() = true;
            assert_eq!(submission.status, SubmissionStatus::Pending);
            Ok(())
        });

        let submission = create_submission(&db, new_submission(CampaignId::new(), UserId::new()))
            .await
            .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert!(submission.reviewed_by.is_none());
        assert!(
            *called_insert.lock().unwrap(),
            "db.insert_submission was not called"
        );
    }

    #[tokio::test]
    async fn create_submission_rejects_two_character_title() {
        let db = MockDatabase::new();

        let result = create_submission(
            &db,
            NewSubmission {
                title: "Hi".to_string(),
                ..new_submission(CampaignId::new(), UserId::new())
            },
        )
        .await;

        assert_eq!(result.unwrap_err(), Error::InvalidTitleLength { length: 2 });
    }

    #[tokio::test]
    async fn create_submission_rejects_short_description() {
        let db = MockDatabase::new();

        let result = create_submission(
            &db,
            NewSubmission {
                description: "too short".to_string(),
                ..new_submission(CampaignId::new(), UserId::new())
            },
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidDescriptionLength { length: 9 }
        );
    }

    #[tokio::test]
    async fn create_submission_rejects_empty_canvas() {
        let db = MockDatabase::new();
        let mut canvas = one_element_canvas();
        canvas.elements.clear();

        let result = create_submission(
            &db,
            NewSubmission {
                canvas_data: Some(canvas),
                ..new_submission(CampaignId::new(), UserId::new())
            },
        )
        .await;

        assert_eq!(result.unwrap_err(), Error::EmptyCanvas);
    }

    #[tokio::test]
    async fn create_submission_normalizes_tags() {
        let mut db = MockDatabase::new();
        mock_active_campaign(&mut db);
        db.submissions.on_insert_submission = Box::new(|_| Ok(()));

        let submission = create_submission(
            &db,
            NewSubmission {
                tags: vec!["Art".to_string(), "art".to_string(), " Art ".to_string()],
                ..new_submission(CampaignId::new(), UserId::new())
            },
        )
        .await
        .unwrap();

        assert_eq!(submission.tags, vec!["art".to_string()]);
    }

    #[tokio::test]
    async fn create_submission_requires_an_active_campaign() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaign_by_id =
            Box::new(|id| Ok(Some(sample_campaign(id, CampaignStatus::Paused))));
        let campaign_id = CampaignId::new();

        let result = create_submission(&db, new_submission(campaign_id, UserId::new())).await;

        assert_eq!(
            result.unwrap_err(),
            Error::CampaignNotAcceptingSubmissions {
                campaign_id,
                status: CampaignStatus::Paused,
            }
        );
    }

    #[tokio::test]
    async fn create_submission_enforces_the_submission_limit() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaign_by_id = Box::new(|id| {
            let mut campaign = sample_campaign(id, CampaignStatus::Active);
            campaign.max_submissions = Some(5);
            Ok(Some(campaign))
        });
        db.submissions.on_count_submissions_by_campaign = Box::new(|_| Ok(5));
        let campaign_id = CampaignId::new();

        let result = create_submission(&db, new_submission(campaign_id, UserId::new())).await;

        assert_eq!(
            result.unwrap_err(),
            Error::SubmissionLimitReached {
                campaign_id,
                max_submissions: 5,
            }
        );
    }

    #[tokio::test]
    async fn approve_records_reviewer_feedback_and_timestamp() {
        let mut db = MockDatabase::new();
        let reviewer_id = UserId::new();
        db.users.on_fetch_user_by_id = Box::new(|id| Ok(Some(sample_user(id))));
        db.submissions.on_fetch_submission_by_id =
            Box::new(|id| Ok(Some(sample_submission(id, UserId::new(), SubmissionStatus::Pending))));
        db.submissions.on_update_submission = Box::new(|submission| Ok(submission));

        let submission = approve_submission(
            &db,
            SubmissionId::new(),
            ReviewAction {
                reviewer_id: Some(reviewer_id),
                feedback: Some("Great composition".to_string()),
                rating: Some(5),
            },
        )
        .await
        .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Approved);
        assert_eq!(submission.reviewed_by, Some(reviewer_id));
        assert!(submission.reviewed_at.is_some());
        assert_eq!(submission.feedback.as_deref(), Some("Great composition"));
        assert_eq!(submission.rating, Some(5));
    }

    #[tokio::test]
    async fn review_requires_a_reviewer_identity() {
        let db = MockDatabase::new();

        let result =
            approve_submission(&db, SubmissionId::new(), ReviewAction::default()).await;

        assert_eq!(result.unwrap_err(), Error::MissingReviewerIdentity);
    }

    #[tokio::test]
    async fn review_rejects_out_of_range_rating() {
        let db = MockDatabase::new();

        let result = approve_submission(
            &db,
            SubmissionId::new(),
            ReviewAction {
                reviewer_id: Some(UserId::new()),
                feedback: None,
                rating: Some(6),
            },
        )
        .await;

        assert_eq!(result.unwrap_err(), Error::InvalidRating { rating: 6 });
    }

    #[tokio::test]
    async fn approve_only_applies_to_pending_submissions() {
        let mut db = MockDatabase::new();
        db.users.on_fetch_user_by_id = Box::new(|id| Ok(Some(sample_user(id))));
        db.submissions.on_fetch_submission_by_id = Box::new(|id| {
            Ok(Some(sample_submission(
                id,
                UserId::new(),
                SubmissionStatus::Approved,
            )))
        });

        let result = approve_submission(
            &db,
            SubmissionId::new(),
            ReviewAction {
                reviewer_id: Some(UserId::new()),
                ..ReviewAction::default()
            },
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::IllegalReviewTransition {
                current: SubmissionStatus::Approved,
                requested: SubmissionStatus::Approved,
            }
        );
    }

    #[tokio::test]
    async fn reconsider_moves_rejected_back_to_approved() {
        let mut db = MockDatabase::new();
        db.users.on_fetch_user_by_id = Box::new(|id| Ok(Some(sample_user(id))));
        db.submissions.on_fetch_submission_by_id = Box::new(|id| {
            Ok(Some(sample_submission(
                id,
                UserId::new(),
                SubmissionStatus::Rejected,
            )))
        });
        db.submissions.on_update_submission = Box::new(|submission| Ok(submission));

        let submission = reconsider_submission(
            &db,
            SubmissionId::new(),
            ReviewAction {
                reviewer_id: Some(UserId::new()),
                ..ReviewAction::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Approved);
    }

    #[tokio::test]
    async fn reconsider_does_not_apply_to_pending_submissions() {
        let mut db = MockDatabase::new();
        db.users.on_fetch_user_by_id = Box::new(|id| Ok(Some(sample_user(id))));
        db.submissions.on_fetch_submission_by_id = Box::new(|id| {
            Ok(Some(sample_submission(
                id,
                UserId::new(),
                SubmissionStatus::Pending,
            )))
        });

        let result = reconsider_submission(
            &db,
            SubmissionId::new(),
            ReviewAction {
                reviewer_id: Some(UserId::new()),
                ..ReviewAction::default()
            },
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            Error::IllegalReviewTransition {
                current: SubmissionStatus::Pending,
                requested: SubmissionStatus::Approved,
            }
        );
    }

    #[tokio::test]
    async fn creator_can_withdraw_a_pending_submission() {
        let mut db = MockDatabase::new();
        let creator_id = UserId::new();
        db.submissions.on_fetch_submission_by_id = Box::new(move |id| {
            Ok(Some(sample_submission(
                id,
                creator_id,
                SubmissionStatus::Pending,
            )))
        });
        db.campaigns.on_fetch_campaign_by_id =
            Box::new(|id| Ok(Some(sample_campaign(id, CampaignStatus::Active))));
        db.submissions.on_update_submission = Box::new(|submission| Ok(submission));

        let submission = withdraw_submission(&db, SubmissionId::new(), creator_id)
            .await
            .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Withdrawn);
    }

    #[tokio::test]
    async fn withdraw_rejects_a_different_creator() {
        let mut db = MockDatabase::new();
        db.submissions.on_fetch_submission_by_id = Box::new(|id| {
            Ok(Some(sample_submission(
                id,
                UserId::new(),
                SubmissionStatus::Pending,
            )))
        });
        let submission_id = SubmissionId::new();
        let other_creator = UserId::new();

        let result = withdraw_submission(&db, submission_id, other_creator).await;

        assert_eq!(
            result.unwrap_err(),
            Error::NotSubmissionOwner {
                submission_id,
                user_id: other_creator,
            }
        );
    }

    #[tokio::test]
    async fn withdraw_is_blocked_once_the_campaign_closes() {
        let mut db = MockDatabase::new();
        let creator_id = UserId::new();
        db.submissions.on_fetch_submission_by_id = Box::new(move |id| {
            Ok(Some(sample_submission(
                id,
                creator_id,
                SubmissionStatus::Pending,
            )))
        });
        db.campaigns.on_fetch_campaign_by_id =
            Box::new(|id| Ok(Some(sample_campaign(id, CampaignStatus::Closed))));

        let result = withdraw_submission(&db, SubmissionId::new(), creator_id).await;

        assert!(matches!(
            result.unwrap_err(),
            Error::CampaignAlreadyClosed { .. }
        ));
    }

    #[tokio::test]
    async fn withdraw_does_not_apply_to_approved_submissions() {
        let mut db = MockDatabase::new();
        let creator_id = UserId::new();
        db.submissions.on_fetch_submission_by_id = Box::new(move |id| {
            Ok(Some(sample_submission(
                id,
                creator_id,
                SubmissionStatus::Approved,
            )))
        });
        db.campaigns.on_fetch_campaign_by_id =
            Box::new(|id| Ok(Some(sample_campaign(id, CampaignStatus::Active))));

        let result = withdraw_submission(&db, SubmissionId::new(), creator_id).await;

        assert_eq!(
            result.unwrap_err(),
            Error::IllegalReviewTransition {
                current: SubmissionStatus::Approved,
                requested: SubmissionStatus::Withdrawn,
            }
        );
    }

    #[test]
    fn filters_combine_with_and_semantics() {
        let creator_id = UserId::new();
        let campaign_id = CampaignId::new();
        let mut matching = sample_submission(SubmissionId::new(), creator_id, SubmissionStatus::Pending);
        matching.campaign_id = campaign_id;
        let wrong_creator =
            sample_submission(SubmissionId::new(), UserId::new(), SubmissionStatus::Pending);
        let mut wrong_status =
            sample_submission(SubmissionId::new(), creator_id, SubmissionStatus::Approved);
        wrong_status.campaign_id = campaign_id;

        let filtered = apply_filters(
            vec![matching.clone(), wrong_creator, wrong_status],
            &SubmissionFilters {
                campaign_id: Some(campaign_id),
                creator_id: Some(creator_id),
                status: Some(SubmissionStatus::Pending),
            },
        );

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, matching.id);
    }
}
