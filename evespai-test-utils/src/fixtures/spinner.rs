//! Row factories for the stationspinner tables.

use chrono::NaiveDateTime;
use entity::{
    api_call, api_update, capsuler, character_sheet, corporation_sheet, market, market_item,
    member_tracking, starbase,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_corporation(
    db: &DatabaseConnection,
    corporation_id: i64,
    name: &str,
    enabled: bool,
) -> Result<corporation_sheet::Model, TestError> {
    let model = corporation_sheet::ActiveModel {
        corporation_id: ActiveValue::Set(corporation_id),
        corporation_name: ActiveValue::Set(name.to_string()),
        enabled: ActiveValue::Set(enabled),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_starbase(
    db: &DatabaseConnection,
    id: i64,
    owner_id: i64,
    location_id: i64,
    moon_id: i64,
    type_id: i64,
    state: i32,
) -> Result<starbase::Model, TestError> {
    let model = starbase::ActiveModel {
        id: ActiveValue::Set(id),
        owner_id: ActiveValue::Set(owner_id),
        location_id: ActiveValue::Set(location_id),
        moon_id: ActiveValue::Set(moon_id),
        type_id: ActiveValue::Set(type_id),
        state: ActiveValue::Set(state),
        state_timestamp: ActiveValue::Set(None),
        online_timestamp: ActiveValue::Set(None),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_member(
    db: &DatabaseConnection,
    character_id: i64,
    owner_id: i64,
    name: &str,
    location: &str,
    ship_type: &str,
    ship_type_id: i64,
) -> Result<member_tracking::Model, TestError> {
    let model = member_tracking::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        name: ActiveValue::Set(name.to_string()),
        location: ActiveValue::Set(location.to_string()),
        ship_type: ActiveValue::Set(ship_type.to_string()),
        ship_type_id: ActiveValue::Set(ship_type_id),
        owner_id: ActiveValue::Set(owner_id),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_capsuler(
    db: &DatabaseConnection,
    id: i64,
    username: &str,
) -> Result<capsuler::Model, TestError> {
    let model = capsuler::ActiveModel {
        id: ActiveValue::Set(id),
        username: ActiveValue::Set(username.to_string()),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_character_sheet(
    db: &DatabaseConnection,
    character_id: i64,
    owner_id: i64,
    name: &str,
    corporation_name: &str,
) -> Result<character_sheet::Model, TestError> {
    let model = character_sheet::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        name: ActiveValue::Set(name.to_string()),
        corporation_name: ActiveValue::Set(corporation_name.to_string()),
        owner_id: ActiveValue::Set(owner_id),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_api_call(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    call_type: &str,
) -> Result<api_call::Model, TestError> {
    let model = api_call::ActiveModel {
        id: ActiveValue::Set(id),
        name: ActiveValue::Set(name.to_string()),
        call_type: ActiveValue::Set(call_type.to_string()),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_api_update(
    db: &DatabaseConnection,
    id: i64,
    apicall_id: i64,
    owner: i64,
    last_update: Option<NaiveDateTime>,
) -> Result<api_update::Model, TestError> {
    let model = api_update::ActiveModel {
        id: ActiveValue::Set(id),
        apicall_id: ActiveValue::Set(apicall_id),
        owner: ActiveValue::Set(owner),
        last_update: ActiveValue::Set(last_update),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_market(
    db: &DatabaseConnection,
    location_id: i64,
) -> Result<market::Model, TestError> {
    let model = market::ActiveModel {
        location_id: ActiveValue::Set(location_id),
    };

    Ok(model.insert(db).await?)
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_market_item(
    db: &DatabaseConnection,
    id: i64,
    location_id: i64,
    type_id: i64,
    buy_max: f64,
    buy_volume: f64,
    sell_min: f64,
    sell_volume: f64,
) -> Result<market_item::Model, TestError> {
    let model = market_item::ActiveModel {
        id: ActiveValue::Set(id),
        location_id: ActiveValue::Set(location_id),
        type_id: ActiveValue::Set(type_id),
        buy_max: ActiveValue::Set(buy_max),
        buy_volume: ActiveValue::Set(buy_volume),
        sell_min: ActiveValue::Set(sell_min),
        sell_volume: ActiveValue::Set(sell_volume),
    };

    Ok(model.insert(db).await?)
}
