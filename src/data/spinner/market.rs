use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::db::MarketItemModel;

pub struct MarketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether any market data exists for the location at all.
    pub async fn exists(&self, location_id: i64) -> Result<bool, DbErr> {
        Ok(entity::prelude::Market::find_by_id(location_id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Snapshot figures for one (location, type) pair.
    pub async fn item(
        &self,
        location_id: i64,
        type_id: i64,
    ) -> Result<Option<MarketItemModel>, DbErr> {
        entity::prelude::MarketItem::find()
            .filter(entity::market_item::Column::LocationId.eq(location_id))
            .filter(entity::market_item::Column::TypeId.eq(type_id))
            .one(self.db)
            .await
    }

    /// Every location with market data.
    pub async fn location_ids(&self) -> Result<Vec<i64>, DbErr> {
        let markets = entity::prelude::Market::find().all(self.db).await?;

        Ok(markets.into_iter().map(|m| m.location_id).collect())
    }
}
