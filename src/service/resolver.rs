//! Name and ID resolution against the SDE, plus the per-command location
//! cache.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::sde::{map::MapRepository, types::TypeRepository},
    error::Error,
    model::db::{ItemTypeModel, LocationModel, ShipGroupModel, SolarSystemModel},
};

/// Outcome of a ship-group fragment lookup. The `ship` command branches on
/// all three cases, so they stay distinct here.
pub enum ShipGroupMatch {
    NotFound,
    Unique(ShipGroupModel),
    Ambiguous(Vec<ShipGroupModel>),
}

pub struct Resolver<'a> {
    sde: &'a DatabaseConnection,
}

impl<'a> Resolver<'a> {
    pub fn new(sde: &'a DatabaseConnection) -> Self {
        Self { sde }
    }

    /// Resolve a solar system name to its ID. When several names match,
    /// the first row in store order wins.
    pub async fn solar_system_id(&self, name: &str) -> Result<i64, Error> {
        let system = MapRepository::new(self.sde)
            .solar_system_by_name(name)
            .await?
            .ok_or(Error::UnknownLocation)?;

        Ok(system.solar_system_id)
    }

    pub async fn solar_system(&self, id: i64) -> Result<SolarSystemModel, Error> {
        MapRepository::new(self.sde)
            .solar_system_by_id(id)
            .await?
            .ok_or(Error::UnknownLocation)
    }

    /// Resolve any location name (region, system, moon, station) to its ID.
    pub async fn location_id(&self, name: &str) -> Result<i64, Error> {
        let location = MapRepository::new(self.sde)
            .location_by_name(name)
            .await?
            .ok_or(Error::UnknownLocation)?;

        Ok(location.item_id)
    }

    pub async fn location(&self, id: i64) -> Result<LocationModel, Error> {
        MapRepository::new(self.sde)
            .location_by_id(id)
            .await?
            .ok_or(Error::UnknownLocation)
    }

    pub async fn item_type_by_name(&self, name: &str) -> Result<ItemTypeModel, Error> {
        TypeRepository::new(self.sde)
            .type_by_name(name)
            .await?
            .ok_or(Error::UnknownType)
    }

    pub async fn item_type(&self, id: i64) -> Result<ItemTypeModel, Error> {
        TypeRepository::new(self.sde)
            .type_by_id(id)
            .await?
            .ok_or(Error::UnknownType)
    }

    /// Three-way ship group resolution for the `ship` command.
    pub async fn ship_group(&self, fragment: &str) -> Result<ShipGroupMatch, Error> {
        let mut groups = TypeRepository::new(self.sde)
            .ship_groups_by_fragment(fragment)
            .await?;

        Ok(match groups.len() {
            0 => ShipGroupMatch::NotFound,
            1 => ShipGroupMatch::Unique(groups.remove(0)),
            _ => ShipGroupMatch::Ambiguous(groups),
        })
    }

    pub async fn published_type_ids(&self, group_id: i64) -> Result<Vec<i64>, Error> {
        Ok(TypeRepository::new(self.sde)
            .published_type_ids_by_group(group_id)
            .await?)
    }
}

/// Resolved location records for one command execution.
///
/// Owned by the handler and passed down its call chain; dropped with the
/// reply, so nothing persists across commands and concurrent commands never
/// share one.
#[derive(Default)]
pub struct LocationCache {
    systems: HashMap<i64, SolarSystemModel>,
    locations: HashMap<i64, LocationModel>,
}

impl LocationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solar system by ID, cache-first.
    pub async fn solar_system(
        &mut self,
        resolver: &Resolver<'_>,
        id: i64,
    ) -> Result<SolarSystemModel, Error> {
        if let Some(system) = self.systems.get(&id) {
            return Ok(system.clone());
        }

        let system = resolver.solar_system(id).await?;
        self.systems.insert(id, system.clone());

        Ok(system)
    }

    /// Denormalized location by ID, cache-first.
    pub async fn location(
        &mut self,
        resolver: &Resolver<'_>,
        id: i64,
    ) -> Result<LocationModel, Error> {
        if let Some(location) = self.locations.get(&id) {
            return Ok(location.clone());
        }

        let location = resolver.location(id).await?;
        self.locations.insert(id, location.clone());

        Ok(location)
    }

    /// Pre-seed a system record already resolved by the caller.
    pub fn seed_system(&mut self, system: SolarSystemModel) {
        self.systems.insert(system.solar_system_id, system);
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
            entity::prelude::InvGroup
        )?;

        fixtures::sde::insert_solar_system(&test.db, 30_000_142, "Jita", 10_000_002, 0.945).await?;
        fixtures::sde::insert_location(&test.db, 30_000_142, "Jita").await?;
        fixtures::sde::insert_group(&test.db, 27, "Battleship", 6).await?;
        fixtures::sde::insert_group(&test.db, 419, "Combat Battlecruiser", 6).await?;
        fixtures::sde::insert_item_type(&test.db, 638, "Raven", 27, true).await?;

        Ok(test)
    }

    /// Expect name-to-ID and ID-to-record lookups to round-trip
    #[tokio::test]
    async fn location_resolution_round_trips() -> Result<(), TestError> {
        let test = setup().await?;
        let resolver = Resolver::new(&test.db);

        let id = resolver.location_id("jita").await.unwrap();
        let location = resolver.location(id).await.unwrap();

        assert_eq!(location.item_id, id);

        Ok(())
    }

    /// Expect UnknownLocation for a name present in no row
    #[tokio::test]
    async fn unknown_location_fails() -> Result<(), TestError> {
        let test = setup().await?;
        let resolver = Resolver::new(&test.db);

        let result = resolver.solar_system_id("Nonexistent").await;

        assert!(matches!(result, Err(Error::UnknownLocation)));

        Ok(())
    }

    /// Expect the three group-match outcomes to stay distinct
    #[tokio::test]
    async fn ship_group_match_is_three_way() -> Result<(), TestError> {
        let test = setup().await?;
        let resolver = Resolver::new(&test.db);

        assert!(matches!(
            resolver.ship_group("frigate").await.unwrap(),
            ShipGroupMatch::NotFound
        ));
        assert!(matches!(
            resolver.ship_group("battleship").await.unwrap(),
            ShipGroupMatch::Unique(_)
        ));
        assert!(matches!(
            resolver.ship_group("battle").await.unwrap(),
            ShipGroupMatch::Ambiguous(groups) if groups.len() == 2
        ));

        Ok(())
    }

    /// Expect cached records to be served without another lookup
    #[tokio::test]
    async fn cache_serves_repeat_lookups() -> Result<(), TestError> {
        let test = setup().await?;
        let resolver = Resolver::new(&test.db);
        let mut cache = LocationCache::new();

        let first = cache.solar_system(&resolver, 30_000_142).await.unwrap();
        let second = cache.solar_system(&resolver, 30_000_142).await.unwrap();
        assert_eq!(first, second);

        // A seeded record resolves even if the store never held it.
        let mut cache = LocationCache::new();
        cache.seed_system(entity::map_solar_system::Model {
            solar_system_id: 31_000_001,
            solar_system_name: "Thera".to_string(),
            region_id: 11_000_001,
            security: -0.99,
        });
        let seeded = cache.solar_system(&resolver, 31_000_001).await.unwrap();
        assert_eq!(seeded.solar_system_name, "Thera");

        Ok(())
    }
}
