use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoBrandStore;
use crate::error::Error;

use super::{Brand, BrandId};

#[async_trait]
pub trait BrandStore {
    async fn insert_brand(&self, brand: &Brand) -> Result<(), Error>;

    async fn fetch_brands(&self) -> Result<Vec<Brand>, Error>;

    async fn fetch_brand_by_id(&self, brand_id: BrandId) -> Result<Option<Brand>, Error>;
}

#[async_trait]
impl BrandStore for MongoBrandStore {
    #[tracing::instrument(skip(self))]
    async fn insert_brand(&self, brand: &Brand) -> Result<(), Error> {
        self.insert_one(brand, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_brands(&self) -> Result<Vec<Brand>, Error> {
        let brands: Vec<Brand> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(brands)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_brand_by_id(&self, brand_id: BrandId) -> Result<Option<Brand>, Error> {
        let brand: Option<Brand> = self.find_one(bson::doc! { "_id": brand_id }, None).await?;

        Ok(brand)
    }
}
