use mongodb::Collection;

use crate::bookmark::db::BookmarkStore;
use crate::bookmark::Bookmark;
use crate::brand::db::BrandStore;
use crate::brand::Brand;
use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::error::Error;
use crate::ipkit::db::IpKitStore;
use crate::ipkit::IpKit;
use crate::submission::db::SubmissionStore;
use crate::submission::Submission;
use crate::user::db::UserStore;
use crate::user::User;

pub type MongoCampaignStore = Collection<Campaign>;
pub type MongoSubmissionStore = Collection<Submission>;
pub type MongoBookmarkStore = Collection<Bookmark>;
pub type MongoIpKitStore = Collection<IpKit>;
pub type MongoBrandStore = Collection<Brand>;
pub type MongoUserStore = Collection<User>;

/// The seam between business logic and storage. Managers only ever see this
/// trait, so unit tests can swap in `test::MockDatabase`.
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn submissions(&self) -> &dyn SubmissionStore;
    fn bookmarks(&self) -> &dyn BookmarkStore;
    fn ip_kits(&self) -> &dyn IpKitStore;
    fn brands(&self) -> &dyn BrandStore;
    fn users(&self) -> &dyn UserStore;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    campaigns: Collection<Campaign>,
    submissions: Collection<Submission>,
    bookmarks: Collection<Bookmark>,
    ip_kits: Collection<IpKit>,
    brands: Collection<Brand>,
    users: Collection<User>,
    db: mongodb::Database,
}

impl MongoDatabase {
    pub fn new(db: mongodb::Database) -> MongoDatabase {
        MongoDatabase {
            campaigns: db.collection("campaigns"),
            submissions: db.collection("submissions"),
            bookmarks: db.collection("bookmarks"),
            ip_kits: db.collection("ip_kits"),
            brands: db.collection("brands"),
            users: db.collection("users"),
            db,
        }
    }

    pub async fn drop(&self) -> Result<(), Error> {
        self.db.drop(None).await?;
        Ok(())
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn submissions(&self) -> &dyn SubmissionStore {
        &self.submissions
    }

    fn bookmarks(&self) -> &dyn BookmarkStore {
        &self.bookmarks
    }

    fn ip_kits(&self) -> &dyn IpKitStore {
        &self.ip_kits
    }

    fn brands(&self) -> &dyn BrandStore {
        &self.brands
    }

    fn users(&self) -> &dyn UserStore {
        &self.users
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use super::*;
    use crate::campaign::CampaignId;
    use crate::ipkit::IpKitId;
    use crate::submission::SubmissionId;
    use crate::user::UserId;
    use crate::brand::BrandId;

    /// Closure-backed stand-in for the stores. Every hook panics until a test
    /// assigns it, so an unexpected store call fails loudly.
    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
        pub submissions: MockSubmissionStore,
        pub bookmarks: MockBookmarkStore,
        pub ip_kits: MockIpKitStore,
        pub brands: MockBrandStore,
        pub users: MockUserStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
                submissions: MockSubmissionStore::new(),
                bookmarks: MockBookmarkStore::new(),
                ip_kits: MockIpKitStore::new(),
                brands: MockBrandStore::new(),
                users: MockUserStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }

        fn submissions(&self) -> &dyn SubmissionStore {
            &self.submissions
        }

        fn bookmarks(&self) -> &dyn BookmarkStore {
            &self.bookmarks
        }

        fn ip_kits(&self) -> &dyn IpKitStore {
            &self.ip_kits
        }

        fn brands(&self) -> &dyn BrandStore {
            &self.brands
        }

        fn users(&self) -> &dyn UserStore {
            &self.users
        }
    }

    pub struct MockCampaignStore {
        pub on_insert_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn() -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaign_by_id:
            Box<dyn Fn(CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>,
        pub on_update_campaign: Box<dyn Fn(Campaign) -> Result<Campaign, Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("insert_campaign is not mocked")),
                on_fetch_campaigns: Box::new(|| panic!("fetch_campaigns is not mocked")),
                on_fetch_campaign_by_id: Box::new(|_| {
                    panic!("fetch_campaign_by_id is not mocked")
                }),
                on_update_campaign: Box::new(|_| panic!("update_campaign is not mocked")),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)()
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn update_campaign(&self, campaign: Campaign) -> Result<Campaign, Error> {
            (self.on_update_campaign)(campaign)
        }
    }

    pub struct MockSubmissionStore {
        pub on_insert_submission: Box<dyn Fn(&Submission) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_submissions: Box<dyn Fn() -> Result<Vec<Submission>, Error> + Send + Sync>,
        pub on_fetch_submission_by_id:
            Box<dyn Fn(SubmissionId) -> Result<Option<Submission>, Error> + Send + Sync>,
        pub on_count_submissions_by_campaign:
            Box<dyn Fn(CampaignId) -> Result<u64, Error> + Send + Sync>,
        pub on_update_submission:
            Box<dyn Fn(Submission) -> Result<Submission, Error> + Send + Sync>,
    }

    impl MockSubmissionStore {
        fn new() -> MockSubmissionStore {
            MockSubmissionStore {
                on_insert_submission: Box::new(|_| panic!("insert_submission is not mocked")),
                on_fetch_submissions: Box::new(|| panic!("fetch_submissions is not mocked")),
                on_fetch_submission_by_id: Box::new(|_| {
                    panic!("fetch_submission_by_id is not mocked")
                }),
                on_count_submissions_by_campaign: Box::new(|_| {
                    panic!("count_submissions_by_campaign is not mocked")
                }),
                on_update_submission: Box::new(|_| panic!("update_submission is not mocked")),
            }
        }
    }

    #[async_trait]
    impl SubmissionStore for MockSubmissionStore {
        async fn insert_submission(&self, submission: &Submission) -> Result<(), Error> {
            (self.on_insert_submission)(submission)
        }

        async fn fetch_submissions(&self) -> Result<Vec<Submission>, Error> {
            (self.on_fetch_submissions)()
        }

        async fn fetch_submission_by_id(
            &self,
            submission_id: SubmissionId,
        ) -> Result<Option<Submission>, Error> {
            (self.on_fetch_submission_by_id)(submission_id)
        }

        async fn count_submissions_by_campaign(
            &self,
            campaign_id: CampaignId,
        ) -> Result<u64, Error> {
            (self.on_count_submissions_by_campaign)(campaign_id)
        }

        async fn update_submission(&self, submission: Submission) -> Result<Submission, Error> {
            (self.on_update_submission)(submission)
        }
    }

    pub struct MockBookmarkStore {
        pub on_fetch_bookmarks_by_user:
            Box<dyn Fn(UserId) -> Result<Vec<Bookmark>, Error> + Send + Sync>,
        pub on_insert_bookmark:
            Box<dyn Fn(UserId, CampaignId) -> Result<(), Error> + Send + Sync>,
        pub on_delete_bookmark:
            Box<dyn Fn(UserId, CampaignId) -> Result<(), Error> + Send + Sync>,
    }

    impl MockBookmarkStore {
        fn new() -> MockBookmarkStore {
            MockBookmarkStore {
                on_fetch_bookmarks_by_user: Box::new(|_| {
                    panic!("fetch_bookmarks_by_user is not mocked")
                }),
                on_insert_bookmark: Box::new(|_, _| panic!("insert_bookmark is not mocked")),
                on_delete_bookmark: Box::new(|_, _| panic!("delete_bookmark is not mocked")),
            }
        }
    }

    #[async_trait]
    impl BookmarkStore for MockBookmarkStore {
        async fn fetch_bookmarks_by_user(&self, user_id: UserId) -> Result<Vec<Bookmark>, Error> {
            (self.on_fetch_bookmarks_by_user)(user_id)
        }

        async fn insert_bookmark(
            &self,
            user_id: UserId,
            campaign_id: CampaignId,
        ) -> Result<(), Error> {
            (self.on_insert_bookmark)(user_id, campaign_id)
        }

        async fn delete_bookmark(
            &self,
            user_id: UserId,
            campaign_id: CampaignId,
        ) -> Result<(), Error> {
            (self.on_delete_bookmark)(user_id, campaign_id)
        }
    }

    pub struct MockIpKitStore {
        pub on_insert_ip_kit: Box<dyn Fn(&IpKit) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_ip_kits: Box<dyn Fn() -> Result<Vec<IpKit>, Error> + Send + Sync>,
        pub on_fetch_ip_kit_by_id:
            Box<dyn Fn(IpKitId) -> Result<Option<IpKit>, Error> + Send + Sync>,
    }

    impl MockIpKitStore {
        fn new() -> MockIpKitStore {
            MockIpKitStore {
                on_insert_ip_kit: Box::new(|_| panic!("insert_ip_kit is not mocked")),
                on_fetch_ip_kits: Box::new(|| panic!("fetch_ip_kits is not mocked")),
                on_fetch_ip_kit_by_id: Box::new(|_| panic!("fetch_ip_kit_by_id is not mocked")),
            }
        }
    }

    #[async_trait]
    impl IpKitStore for MockIpKitStore {
        async fn insert_ip_kit(&self, ip_kit: &IpKit) -> Result<(), Error> {
            (self.on_insert_ip_kit)(ip_kit)
        }

        async fn fetch_ip_kits(&self) -> Result<Vec<IpKit>, Error> {
            (self.on_fetch_ip_kits)()
        }

        async fn fetch_ip_kit_by_id(&self, ip_kit_id: IpKitId) -> Result<Option<IpKit>, Error> {
            (self.on_fetch_ip_kit_by_id)(ip_kit_id)
        }
    }

    pub struct MockBrandStore {
        pub on_insert_brand: Box<dyn Fn(&Brand) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_brands: Box<dyn Fn() -> Result<Vec<Brand>, Error> + Send + Sync>,
        pub on_fetch_brand_by_id:
            Box<dyn Fn(BrandId) -> Result<Option<Brand>, Error> + Send + Sync>,
    }

    impl MockBrandStore {
        fn new() -> MockBrandStore {
            MockBrandStore {
                on_insert_brand: Box::new(|_| panic!("insert_brand is not mocked")),
                on_fetch_brands: Box::new(|| panic!("fetch_brands is not mocked")),
                on_fetch_brand_by_id: Box::new(|_| panic!("fetch_brand_by_id is not mocked")),
            }
        }
    }

    #[async_trait]
    impl BrandStore for MockBrandStore {
        async fn insert_brand(&self, brand: &Brand) -> Result<(), Error> {
            (self.on_insert_brand)(brand)
        }

        async fn fetch_brands(&self) -> Result<Vec<Brand>, Error> {
            (self.on_fetch_brands)()
        }

        async fn fetch_brand_by_id(&self, brand_id: BrandId) -> Result<Option<Brand>, Error> {
            (self.on_fetch_brand_by_id)(brand_id)
        }
    }

    pub struct MockUserStore {
        pub on_insert_user: Box<dyn Fn(&User) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_user_by_id:
            Box<dyn Fn(UserId) -> Result<Option<User>, Error> + Send + Sync>,
    }

    impl MockUserStore {
        fn new() -> MockUserStore {
            MockUserStore {
                on_insert_user: Box::new(|_| panic!("insert_user is not mocked")),
                on_fetch_user_by_id: Box::new(|_| panic!("fetch_user_by_id is not mocked")),
            }
        }
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn insert_user(&self, user: &User) -> Result<(), Error> {
            (self.on_insert_user)(user)
        }

        async fn fetch_user_by_id(&self, user_id: UserId) -> Result<Option<User>, Error> {
            (self.on_fetch_user_by_id)(user_id)
        }
    }
}
