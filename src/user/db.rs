use async_trait::async_trait;
use mongodb::bson;

use crate::database::MongoUserStore;
use crate::error::Error;

use super::{User, UserId};

#[async_trait]
pub trait UserStore {
    async fn insert_user(&self, user: &User) -> Result<(), Error>;

    async fn fetch_user_by_id(&self, user_id: UserId) -> Result<Option<User>, Error>;
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[tracing::instrument(skip(self))]
    async fn insert_user(&self, user: &User) -> Result<(), Error> {
        self.insert_one(user, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_user_by_id(&self, user_id: UserId) -> Result<Option<User>, Error> {
        let user: Option<User> = self.find_one(bson::doc! { "_id": user_id }, None).await?;

        Ok(user)
    }
}
