use sea_orm::DatabaseConnection;

use crate::{
    data::spinner::member::MemberRepository,
    error::Error,
    model::db::MemberModel,
    service::resolver::{Resolver, ShipGroupMatch},
};

/// Sentinel stationspinner stores when the boarded hull is not resolvable,
/// which in practice means the pilot is in a pod.
const POD_SHIP_TYPE: &str = "Unknown Type";

fn member_line(member: &MemberModel) -> String {
    let ship = if member.ship_type == POD_SHIP_TYPE {
        "Pod"
    } else {
        member.ship_type.as_str()
    };

    format!("{} :: {} :: {}", member.name, member.location, ship)
}

pub struct MemberService<'a> {
    sde: &'a DatabaseConnection,
    spinner: &'a DatabaseConnection,
    corporation_id: i64,
    max_lines: usize,
}

impl<'a> MemberService<'a> {
    pub fn new(
        sde: &'a DatabaseConnection,
        spinner: &'a DatabaseConnection,
        corporation_id: i64,
        max_lines: usize,
    ) -> Self {
        Self {
            sde,
            spinner,
            corporation_id,
            max_lines,
        }
    }

    /// `whereis <character>`: matching members with location and boarded
    /// ship.
    pub async fn whereis(&self, character: &str) -> Result<Vec<String>, Error> {
        let rows = MemberRepository::new(self.spinner)
            .by_name(self.corporation_id, character)
            .await?;

        if rows.is_empty() {
            return Ok(vec![format!(
                "Found 0 characters with a name like \"{character}\""
            )]);
        }

        Ok(rows.iter().map(member_line).collect())
    }

    /// `whoat [--all] <system>`: members whose reported location contains
    /// the fragment, subject to the display limit.
    pub async fn whoat(&self, system: &str, all: bool) -> Result<Vec<String>, Error> {
        let rows = MemberRepository::new(self.spinner)
            .by_location_fragment(self.corporation_id, system)
            .await?;

        if rows.is_empty() {
            return Ok(vec![format!("Found 0 characters in \"{system}\"")]);
        }
        if rows.len() <= self.max_lines || all {
            return Ok(rows.iter().map(member_line).collect());
        }

        Ok(vec![format!(
            "Found {} characters in \"{}\", but will not name them all",
            rows.len(),
            system
        )])
    }

    /// `ship [--all] <shiptype>`: members flying ships of a group, or of
    /// one specific hull when no group name matches the fragment.
    pub async fn ship(&self, shiptype: &str, all: bool) -> Result<Vec<String>, Error> {
        let resolver = Resolver::new(self.sde);

        let (label, type_ids) = match resolver.ship_group(shiptype).await? {
            ShipGroupMatch::Ambiguous(groups) => {
                let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();
                return Ok(vec![format!(
                    "Found more than one shiptype: \"{}\". Be more specific",
                    names.join(", ")
                )]);
            }
            ShipGroupMatch::Unique(group) => {
                let type_ids = resolver.published_type_ids(group.group_id).await?;
                (group.group_name, type_ids)
            }
            ShipGroupMatch::NotFound => {
                // No group matched; try the fragment as one specific hull.
                match resolver.item_type_by_name(shiptype).await {
                    Ok(item_type) => (item_type.type_name, vec![item_type.type_id]),
                    Err(Error::UnknownType) => return Err(Error::UnknownShiptype),
                    Err(err) => return Err(err),
                }
            }
        };

        let rows = MemberRepository::new(self.spinner)
            .by_ship_type_ids(self.corporation_id, &type_ids)
            .await?;

        if rows.is_empty() {
            return Ok(vec![format!("Found 0 characters in {label}")]);
        }
        if rows.len() <= self.max_lines || all {
            let mut lines = vec![format!("Found {} characters in {}", rows.len(), label)];
            lines.extend(rows.iter().map(member_line));
            return Ok(lines);
        }

        Ok(vec![format!(
            "Found {} characters in {}, but will not name them all",
            rows.len(),
            label
        )])
    }
}
