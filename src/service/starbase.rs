use sea_orm::DatabaseConnection;

use crate::{
    data::spinner::starbase::StarbaseRepository,
    error::Error,
    service::resolver::{LocationCache, Resolver},
    util::format::{colored_system, starbase_state_label},
};

pub struct StarbaseService<'a> {
    sde: &'a DatabaseConnection,
    spinner: &'a DatabaseConnection,
    corporation_id: i64,
}

impl<'a> StarbaseService<'a> {
    pub fn new(
        sde: &'a DatabaseConnection,
        spinner: &'a DatabaseConnection,
        corporation_id: i64,
    ) -> Self {
        Self {
            sde,
            spinner,
            corporation_id,
        }
    }

    /// `pos [<system>]`: list the corporation's starbases, optionally only
    /// those in one system.
    ///
    /// Emits a count line followed by one line per starbase,
    /// `region :: system :: moon :: type :: state`. Location and region
    /// records go through the per-command cache; with every starbase in one
    /// system that is two SDE lookups instead of two per row.
    pub async fn pos(&self, system: Option<&str>) -> Result<Vec<String>, Error> {
        let resolver = Resolver::new(self.sde);
        let starbase_repo = StarbaseRepository::new(self.spinner);
        let mut cache = LocationCache::new();

        let (rows, mut lines) = match system {
            Some(name) => {
                let location_id = resolver.location_id(name).await?;
                let system = resolver.solar_system(location_id).await?;
                let rows = starbase_repo
                    .list(self.corporation_id, Some(location_id))
                    .await?;
                let count_line = format!(
                    "Found {} starbases in {}",
                    rows.len(),
                    system.solar_system_name
                );
                cache.seed_system(system);
                (rows, vec![count_line])
            }
            None => {
                let rows = starbase_repo.list(self.corporation_id, None).await?;
                let count_line = format!("Found {} starbases", rows.len());
                (rows, vec![count_line])
            }
        };

        for row in &rows {
            let system = cache.solar_system(&resolver, row.location_id).await?;
            let region = cache.location(&resolver, system.region_id).await?;
            let moon = if row.moon_id == 0 {
                // moonID is zero while a tower is unanchored
                "-".to_string()
            } else {
                resolver.location(row.moon_id).await?.item_name
            };
            let tower = resolver.item_type(row.type_id).await?;

            lines.push(format!(
                "{} :: {} :: {} :: {} :: {}",
                region.item_name,
                colored_system(&system),
                moon,
                tower.type_name,
                starbase_state_label(row.state),
            ));
        }

        Ok(lines)
    }
}
