use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoIpKitStore;
use crate::error::Error;

use super::{IpKit, IpKitId};

#[async_trait]
pub trait IpKitStore {
    async fn insert_ip_kit(&self, ip_kit: &IpKit) -> Result<(), Error>;

    async fn fetch_ip_kits(&self) -> Result<Vec<IpKit>, Error>;

    async fn fetch_ip_kit_by_id(&self, ip_kit_id: IpKitId) -> Result<Option<IpKit>, Error>;
}

#[async_trait]
impl IpKitStore for MongoIpKitStore {
    #[tracing::instrument(skip(self))]
    async fn insert_ip_kit(&self, ip_kit: &IpKit) -> Result<(), Error> {
        self.insert_one(ip_kit, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ip_kits(&self) -> Result<Vec<IpKit>, Error> {
        let ip_kits: Vec<IpKit> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(ip_kits)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_ip_kit_by_id(&self, ip_kit_id: IpKitId) -> Result<Option<IpKit>, Error> {
        let ip_kit: Option<IpKit> = self.find_one(bson::doc! { "_id": ip_kit_id }, None).await?;

        Ok(ip_kit)
    }
}
