use chrono::{DateTime, Utc};

use crate::listing::SortDirection;

use super::{CampaignStatus, CampaignSummary};

/// Discovery filters, combined with AND semantics. Unrecognized tokens parse
/// to `None` and fall away rather than erroring.
#[derive(Clone, Debug, Default)]
pub struct CampaignFilters {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub category: Option<Category>,
    pub deadline: Option<DeadlineBucket>,
    pub asset_count: Option<AssetCountBucket>,
    pub featured: bool,
}

/// An absent status filter is not "everything": discovery views default to
/// showing only active campaigns. "all" lifts the filter explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Default,
    All,
    Only(Vec<CampaignStatus>),
}

impl Default for StatusFilter {
    fn default() -> StatusFilter {
        StatusFilter::Default
    }
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> StatusFilter {
        match value {
            None => StatusFilter::Default,
            Some("all") => StatusFilter::All,
            Some(list) => {
                let statuses: Vec<CampaignStatus> = list
                    .split(',')
                    .filter_map(CampaignStatus::parse)
                    .collect();
                // All tokens unrecognized: same as no filter at all, which
                // keeps the active-only default instead of lifting it.
                if statuses.is_empty() {
                    StatusFilter::Default
                } else {
                    StatusFilter::Only(statuses)
                }
            }
        }
    }

    fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::Default => status == CampaignStatus::Active,
            StatusFilter::All => true,
            StatusFilter::Only(statuses) => statuses.contains(&status),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Anime,
    Gaming,
    Fantasy,
    Cyberpunk,
    Art,
    Music,
    Video,
}

impl Category {
    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "anime" => Some(Category::Anime),
            "gaming" => Some(Category::Gaming),
            "fantasy" => Some(Category::Fantasy),
            "cyberpunk" => Some(Category::Cyberpunk),
            "art" => Some(Category::Art),
            "music" => Some(Category::Music),
            "video" => Some(Category::Video),
            _ => None,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Anime => &["anime", "manga", "character"],
            Category::Gaming => &["game", "gaming", "esports"],
            Category::Fantasy => &["fantasy", "magic", "dragon"],
            Category::Cyberpunk => &["cyber", "neon", "future"],
            Category::Art => &["art", "design", "creative"],
            Category::Music => &["music", "sound", "audio"],
            Category::Video => &["video", "film", "animation"],
        }
    }

    fn matches(self, summary: &CampaignSummary) -> bool {
        let title = summary.title.to_lowercase();
        let description = summary.description.to_lowercase();
        self.keywords()
            .iter()
            .any(|keyword| title.contains(keyword) || description.contains(keyword))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeadlineBucket {
    Week,
    Month,
    Quarter,
    None,
}

impl DeadlineBucket {
    pub fn parse(value: &str) -> Option<DeadlineBucket> {
        match value {
            "week" => Some(DeadlineBucket::Week),
            "month" => Some(DeadlineBucket::Month),
            "quarter" => Some(DeadlineBucket::Quarter),
            "none" => Some(DeadlineBucket::None),
            _ => None,
        }
    }

    fn matches(self, deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let deadline = match deadline {
            Some(deadline) => deadline,
            None => return self == DeadlineBucket::None,
        };

        // Ceiling of the remaining time in days; already-passed deadlines
        // (days_diff <= 0) match no bucket.
        let days_diff = ((deadline - now).num_seconds() as f64 / 86400.0).ceil() as i64;

        match self {
            DeadlineBucket::Week => days_diff > 0 && days_diff <= 7,
            DeadlineBucket::Month => days_diff > 0 && days_diff <= 30,
            DeadlineBucket::Quarter => days_diff > 0 && days_diff <= 90,
            DeadlineBucket::None => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssetCountBucket {
    Few,
    Some,
    Many,
}

impl AssetCountBucket {
    pub fn parse(value: &str) -> Option<AssetCountBucket> {
        match value {
            "few" => Some(AssetCountBucket::Few),
            "some" => Some(AssetCountBucket::Some),
            "many" => Some(AssetCountBucket::Many),
            _ => None,
        }
    }

    fn matches(self, count: usize) -> bool {
        match self {
            AssetCountBucket::Few => (1..=5).contains(&count),
            AssetCountBucket::Some => (6..=15).contains(&count),
            AssetCountBucket::Many => count >= 16,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CampaignSortField {
    CreatedAt,
    Deadline,
    SubmissionCount,
    Title,
}

impl CampaignSortField {
    pub fn parse(value: &str) -> Option<CampaignSortField> {
        match value {
            "created_at" => Some(CampaignSortField::CreatedAt),
            "deadline" => Some(CampaignSortField::Deadline),
            "submission_count" => Some(CampaignSortField::SubmissionCount),
            "title" => Some(CampaignSortField::Title),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct CampaignSort {
    pub field: CampaignSortField,
    pub direction: SortDirection,
}

impl Default for CampaignSort {
    fn default() -> CampaignSort {
        CampaignSort {
            field: CampaignSortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

pub fn apply_filters(
    summaries: Vec<CampaignSummary>,
    filters: &CampaignFilters,
    now: DateTime<Utc>,
) -> Vec<CampaignSummary> {
    summaries
        .into_iter()
        .filter(|summary| match &filters.search {
            Some(search) => {
                let search = search.to_lowercase();
                summary.title.to_lowercase().contains(&search)
                    || summary.description.to_lowercase().contains(&search)
                    || summary.brand_name.to_lowercase().contains(&search)
            }
            None => true,
        })
        .filter(|summary| filters.status.matches(summary.status))
        .filter(|summary| !filters.featured || summary.featured)
        .filter(|summary| match filters.category {
            Some(category) => category.matches(summary),
            None => true,
        })
        .filter(|summary| match filters.deadline {
            Some(bucket) => bucket.matches(summary.deadline, now),
            None => true,
        })
        .filter(|summary| match filters.asset_count {
            Some(bucket) => bucket.matches(summary.asset_count),
            None => true,
        })
        .collect()
}

/// Stable sort; ties keep their pre-sort order. Missing deadlines sort as
/// infinitely far in the future so ascending deadline order sinks them.
pub fn sort_campaigns(summaries: &mut Vec<CampaignSummary>, sort: CampaignSort) {
    use std::cmp::Ordering;

    let compare = |a: &CampaignSummary, b: &CampaignSummary| -> Ordering {
        match sort.field {
            CampaignSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            CampaignSortField::Deadline => {
                let a = a.deadline.unwrap_or(DateTime::<Utc>::MAX_UTC);
                let b = b.deadline.unwrap_or(DateTime::<Utc>::MAX_UTC);
                a.cmp(&b)
            }
            CampaignSortField::SubmissionCount => a.submission_count.cmp(&b.submission_count),
            CampaignSortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    };

    match sort.direction {
        SortDirection::Ascending => summaries.sort_by(compare),
        SortDirection::Descending => summaries.sort_by(|a, b| compare(b, a)),
    }
}
