use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use derivative::Derivative;
use mongodb::bson::ser::Error as BsonError;
use mongodb::error::Error as DatabaseError;
use serde::{Serialize, Serializer};

use crate::brand::BrandId;
use crate::campaign::{CampaignId, CampaignStatus};
use crate::ipkit::IpKitId;
use crate::submission::{SubmissionId, SubmissionStatus};
use crate::user::UserId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidForm(#[derivative(PartialEq = "ignore")] UrlencodedError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    MissingCampaignFields {
        fields: Vec<&'static str>,
    },
    InvalidDateRange {
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    },
    ExpiredDeadline {
        end_date: DateTime<Utc>,
    },
    IllegalStatusTransition {
        current: CampaignStatus,
        requested: CampaignStatus,
    },
    IllegalReviewTransition {
        current: SubmissionStatus,
        requested: SubmissionStatus,
    },
    EmptyCanvas,
    TooManyTags {
        count: usize,
    },
    TagTooLong {
        tag: String,
    },
    InvalidTitleLength {
        length: usize,
    },
    InvalidDescriptionLength {
        length: usize,
    },
    InvalidRating {
        rating: i32,
    },
    InvalidIpKitName {
        length: usize,
    },
    InvalidRewardAmount {
        reward_amount: f64,
    },

    // 401
    MissingReviewerIdentity,

    // 403
    NotSubmissionOwner {
        submission_id: SubmissionId,
        user_id: UserId,
    },

    // 404
    PathNotFound,
    CampaignNotFound {
        campaign_id: CampaignId,
    },
    SubmissionNotFound {
        submission_id: SubmissionId,
    },
    IpKitNotFound {
        ip_kit_id: IpKitId,
    },
    BrandNotFound {
        brand_id: BrandId,
    },
    UserNotFound {
        user_id: UserId,
    },

    // 409
    ConcurrentModificationDetected,
    CampaignNotAcceptingSubmissions {
        campaign_id: CampaignId,
        status: CampaignStatus,
    },
    SubmissionLimitReached {
        campaign_id: CampaignId,
        max_submissions: u32,
    },
    CampaignAlreadyClosed {
        campaign_id: CampaignId,
    },

    // 500
    #[serde(serialize_with = "display")]
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    #[serde(serialize_with = "display")]
    FailedToSerializeToBson(#[derivative(PartialEq = "ignore")] BsonError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidForm(_) => "E4001002",
            Error::InvalidQuery(_) => "E4001003",
            Error::MissingCampaignFields { .. } => "E4001004",
            Error::InvalidDateRange { .. } => "E4001005",
            Error::ExpiredDeadline { .. } => "E4001006",
            Error::IllegalStatusTransition { .. } => "E4001007",
            Error::IllegalReviewTransition { .. } => "E4001008",
            Error::EmptyCanvas => "E4001009",
            Error::TooManyTags { .. } => "E4001010",
            Error::TagTooLong { .. } => "E4001011",
            Error::InvalidTitleLength { .. } => "E4001012",
            Error::InvalidDescriptionLength { .. } => "E4001013",
            Error::InvalidRating { .. } => "E4001014",
            Error::InvalidIpKitName { .. } => "E4001015",
            Error::InvalidRewardAmount { .. } => "E4001016",
            Error::MissingReviewerIdentity => "E4011000",
            Error::NotSubmissionOwner { .. } => "E4031000",
            Error::PathNotFound => "E4041000",
            Error::CampaignNotFound { .. } => "E4041001",
            Error::SubmissionNotFound { .. } => "E4041002",
            Error::IpKitNotFound { .. } => "E4041003",
            Error::BrandNotFound { .. } => "E4041004",
            Error::UserNotFound { .. } => "E4041005",
            Error::ConcurrentModificationDetected => "E4091000",
            Error::CampaignNotAcceptingSubmissions { .. } => "E4091001",
            Error::SubmissionLimitReached { .. } => "E4091002",
            Error::CampaignAlreadyClosed { .. } => "E4091003",
            Error::FailedDatabaseCall(_) => "E5001000",
            Error::FailedToSerializeToBson(_) => "E5001001",
            Error::IoError(_) => "E5001002",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidForm(_) => "The given form could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::MissingCampaignFields { .. } => {
                "The campaign is missing one or more required fields"
            }
            Error::InvalidDateRange { .. } => "The campaign end date must be after its start date",
            Error::ExpiredDeadline { .. } => "The campaign end date must be in the future",
            Error::IllegalStatusTransition { .. } => {
                "The requested campaign status transition is not allowed"
            }
            Error::IllegalReviewTransition { .. } => {
                "The requested submission status transition is not allowed"
            }
            Error::EmptyCanvas => "The submitted canvas does not contain any elements",
            Error::TooManyTags { .. } => "A submission may carry at most 10 distinct tags",
            Error::TagTooLong { .. } => "A submission tag may be at most 20 characters",
            Error::InvalidTitleLength { .. } => {
                "The submission title must be between 3 and 100 characters"
            }
            Error::InvalidDescriptionLength { .. } => {
                "The submission description must be between 10 and 1000 characters"
            }
            Error::InvalidRating { .. } => "A review rating must be between 1 and 5",
            Error::InvalidIpKitName { .. } => {
                "The IP kit name must be between 1 and 100 characters"
            }
            Error::InvalidRewardAmount { .. } => "The campaign reward amount must not be negative",
            Error::MissingReviewerIdentity => "A reviewer identity is required for this action",
            Error::NotSubmissionOwner { .. } => {
                "The requested submission belongs to a different creator"
            }
            Error::PathNotFound => "The requested path was not found",
            Error::CampaignNotFound { .. } => "The requested campaign was not found",
            Error::SubmissionNotFound { .. } => "The requested submission was not found",
            Error::IpKitNotFound { .. } => "The requested IP kit was not found",
            Error::BrandNotFound { .. } => "The requested brand was not found",
            Error::UserNotFound { .. } => "The requested user was not found",
            Error::ConcurrentModificationDetected => {
                "The server detected a concurrent modification"
            }
            Error::CampaignNotAcceptingSubmissions { .. } => {
                "The requested campaign is not accepting submissions"
            }
            Error::SubmissionLimitReached { .. } => {
                "The requested campaign has reached its submission limit"
            }
            Error::CampaignAlreadyClosed { .. } => "The requested campaign is already closed",
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database"
            }
            Error::FailedToSerializeToBson(_) => {
                "An error occurred when serializing an object to bson"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::MissingCampaignFields { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidDateRange { .. } => StatusCode::BAD_REQUEST,
            Error::ExpiredDeadline { .. } => StatusCode::BAD_REQUEST,
            Error::IllegalStatusTransition { .. } => StatusCode::BAD_REQUEST,
            Error::IllegalReviewTransition { .. } => StatusCode::BAD_REQUEST,
            Error::EmptyCanvas => StatusCode::BAD_REQUEST,
            Error::TooManyTags { .. } => StatusCode::BAD_REQUEST,
            Error::TagTooLong { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidTitleLength { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidDescriptionLength { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidRating { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidIpKitName { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidRewardAmount { .. } => StatusCode::BAD_REQUEST,
            Error::MissingReviewerIdentity => StatusCode::UNAUTHORIZED,
            Error::NotSubmissionOwner { .. } => StatusCode::FORBIDDEN,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::CampaignNotFound { .. } => StatusCode::NOT_FOUND,
            Error::SubmissionNotFound { .. } => StatusCode::NOT_FOUND,
            Error::IpKitNotFound { .. } => StatusCode::NOT_FOUND,
            Error::BrandNotFound { .. } => StatusCode::NOT_FOUND,
            Error::UserNotFound { .. } => StatusCode::NOT_FOUND,
            Error::ConcurrentModificationDetected => StatusCode::CONFLICT,
            Error::CampaignNotAcceptingSubmissions { .. } => StatusCode::CONFLICT,
            Error::SubmissionLimitReached { .. } => StatusCode::CONFLICT,
            Error::CampaignAlreadyClosed { .. } => StatusCode::CONFLICT,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedToSerializeToBson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&ErrorBody {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<BsonError> for Error {
    fn from(error: BsonError) -> Error {
        Error::FailedToSerializeToBson(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidForm(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::FailedToSerializeToBson(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
