use sea_orm::DatabaseConnection;

use crate::{
    data::spinner::market::MarketRepository,
    error::Error,
    service::resolver::Resolver,
    util::format::{colored_system, format_isk, format_volume, REGION_ID_CEILING},
};

/// Market looked up when `price` is given no `--location`.
const DEFAULT_PRICE_LOCATION: &str = "Jita";

pub struct MarketService<'a> {
    sde: &'a DatabaseConnection,
    spinner: &'a DatabaseConnection,
}

impl<'a> MarketService<'a> {
    pub fn new(sde: &'a DatabaseConnection, spinner: &'a DatabaseConnection) -> Self {
        Self { sde, spinner }
    }

    /// `price [--location=<name>] <typeName>`: best buy/sell figures for a
    /// type at one market.
    ///
    /// "No market at that location" and "market exists but this type was
    /// never priced" are distinct replies.
    pub async fn price(
        &self,
        type_name: &str,
        location: Option<&str>,
    ) -> Result<Vec<String>, Error> {
        let resolver = Resolver::new(self.sde);
        let item_type = resolver.item_type_by_name(type_name).await?;
        let location_id = resolver
            .location_id(location.unwrap_or(DEFAULT_PRICE_LOCATION))
            .await?;

        let market_repo = MarketRepository::new(self.spinner);
        if !market_repo.exists(location_id).await? {
            return Err(Error::NoMarketData);
        }

        let item = market_repo
            .item(location_id, item_type.type_id)
            .await?
            .ok_or_else(|| Error::PricesNotUpdated(item_type.type_name.clone()))?;

        Ok(vec![format!(
            "buy max: {} (volume: {}). sell min: {} (volume: {}).",
            format_isk(item.buy_max),
            format_volume(item.buy_volume),
            format_isk(item.sell_min),
            format_volume(item.sell_volume),
        )])
    }

    /// `markets`: every tracked market location on one line, regions plain
    /// and systems security-tiered.
    pub async fn markets(&self) -> Result<Vec<String>, Error> {
        let resolver = Resolver::new(self.sde);
        let location_ids = MarketRepository::new(self.spinner).location_ids().await?;

        let mut names = Vec::with_capacity(location_ids.len());
        for id in location_ids {
            if id < REGION_ID_CEILING {
                names.push(resolver.location(id).await?.item_name);
            } else {
                let system = resolver.solar_system(id).await?;
                names.push(colored_system(&system));
            }
        }

        Ok(vec![names.join(", ")])
    }
}

#[cfg(test)]
mod tests {
    use evespai_test_utils::prelude::*;

    use super::*;

    async fn setup() -> Result<TestSetup, TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::MapSolarSystem,
            entity::prelude::MapDenormalize,
            entity::prelude::InvType,
            entity::prelude::Market,
            entity::prelude::MarketItem
        )?;

        fixtures::sde::insert_solar_system(&test.db, 30_000_142, "Jita", 10_000_002, 0.945).await?;
        fixtures::sde::insert_solar_system(&test.db, 30_002_187, "Amarr", 10_000_043, 1.0).await?;
        fixtures::sde::insert_location(&test.db, 30_000_142, "Jita").await?;
        fixtures::sde::insert_location(&test.db, 30_002_187, "Amarr").await?;
        fixtures::sde::insert_location(&test.db, 10_000_002, "The Forge").await?;
        fixtures::sde::insert_item_type(&test.db, 34, "Tritanium", 18, true).await?;

        fixtures::spinner::insert_market(&test.db, 30_000_142).await?;
        fixtures::spinner::insert_market(&test.db, 10_000_002).await?;
        fixtures::spinner::insert_market_item(
            &test.db,
            1,
            30_000_142,
            34,
            5.12,
            1_000_000.0,
            5.49,
            2_500_000.0,
        )
        .await?;

        Ok(test)
    }

    /// Expect formatted figures when a snapshot exists
    #[tokio::test]
    async fn prices_render_with_volumes() -> Result<(), TestError> {
        let test = setup().await?;
        let service = MarketService::new(&test.db, &test.db);

        let lines = service.price("tritanium", None).await.unwrap();

        assert_eq!(
            lines,
            vec![
                "buy max: 5.12 (volume: 1,000,000). sell min: 5.49 (volume: 2,500,000)."
                    .to_string()
            ]
        );

        Ok(())
    }

    /// Expect NoMarketData when the location has no market at all
    #[tokio::test]
    async fn missing_market_is_distinct() -> Result<(), TestError> {
        let test = setup().await?;
        let service = MarketService::new(&test.db, &test.db);

        let result = service.price("tritanium", Some("amarr")).await;

        assert!(matches!(result, Err(Error::NoMarketData)));

        Ok(())
    }

    /// Expect PricesNotUpdated when the market exists without a snapshot
    #[tokio::test]
    async fn missing_snapshot_is_distinct() -> Result<(), TestError> {
        let test = setup().await?;
        fixtures::sde::insert_item_type(&test.db, 35, "Pyerite", 18, true).await?;

        let service = MarketService::new(&test.db, &test.db);
        let result = service.price("pyerite", None).await;

        assert!(matches!(result, Err(Error::PricesNotUpdated(name)) if name == "Pyerite"));

        Ok(())
    }

    /// Expect UnknownType before any market query
    #[tokio::test]
    async fn unknown_type_aborts() -> Result<(), TestError> {
        let test = setup().await?;
        let service = MarketService::new(&test.db, &test.db);

        let result = service.price("unobtainium", None).await;

        assert!(matches!(result, Err(Error::UnknownType)));

        Ok(())
    }

    /// Expect IDs below the region ceiling to render as regions, the rest
    /// as systems
    #[tokio::test]
    async fn markets_classify_regions_and_systems() -> Result<(), TestError> {
        let test = setup().await?;
        let service = MarketService::new(&test.db, &test.db);

        let lines = service.markets().await.unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("The Forge"));
        // The system name is tier-decorated, the region name is plain.
        assert!(lines[0].contains("\x0309Jita\x03"));
        assert!(!lines[0].contains("\x03The Forge"));

        Ok(())
    }
}
