use std::collections::HashSet;

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;
use crate::user::UserId;

use super::manager;

/// An in-memory view of one user's bookmarks that flips membership before the
/// durable write and rolls the flip back if the write fails. Membership is
/// therefore always consistent with the last successful write.
#[derive(Clone, Debug)]
pub struct BookmarkSet {
    user_id: UserId,
    bookmarks: HashSet<CampaignId>,
}

impl BookmarkSet {
    pub async fn load(db: &dyn Database, user_id: UserId) -> Result<BookmarkSet, Error> {
        let bookmarks = manager::get_bookmarks(db, user_id).await?;

        Ok(BookmarkSet {
            user_id,
            bookmarks: bookmarks.into_iter().collect(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_bookmarked(&self, campaign_id: CampaignId) -> bool {
        self.bookmarks.contains(&campaign_id)
    }

    /// Flip the campaign's membership and persist the new state. Returns
    /// whether the campaign is bookmarked after the toggle. On a failed write
    /// the set is restored to its pre-toggle state before the error returns.
    pub async fn toggle(
        &mut self,
        db: &dyn Database,
        campaign_id: CampaignId,
    ) -> Result<bool, Error> {
        let adding = !self.bookmarks.remove(&campaign_id);
        if adding {
            self.bookmarks.insert(campaign_id);
        }

        let result = if adding {
            manager::add_bookmark(db, self.user_id, campaign_id).await
        } else {
            manager::remove_bookmark(db, self.user_id, campaign_id).await
        };

        if let Err(err) = result {
            if adding {
                self.bookmarks.remove(&campaign_id);
            } else {
                self.bookmarks.insert(campaign_id);
            }
            return Err(err);
        }

        Ok(adding)
    }
}
