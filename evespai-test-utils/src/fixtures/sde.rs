//! Row factories for the SDE reference tables.

use entity::{inv_group, inv_type, map_denormalize, map_solar_system};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_solar_system(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    region_id: i64,
    security: f64,
) -> Result<map_solar_system::Model, TestError> {
    let model = map_solar_system::ActiveModel {
        solar_system_id: ActiveValue::Set(id),
        solar_system_name: ActiveValue::Set(name.to_string()),
        region_id: ActiveValue::Set(region_id),
        security: ActiveValue::Set(security),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_location(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
) -> Result<map_denormalize::Model, TestError> {
    let model = map_denormalize::ActiveModel {
        item_id: ActiveValue::Set(id),
        item_name: ActiveValue::Set(name.to_string()),
        security: ActiveValue::Set(None),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_item_type(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    group_id: i64,
    published: bool,
) -> Result<inv_type::Model, TestError> {
    let model = inv_type::ActiveModel {
        type_id: ActiveValue::Set(id),
        type_name: ActiveValue::Set(name.to_string()),
        group_id: ActiveValue::Set(group_id),
        published: ActiveValue::Set(published),
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_group(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    category_id: i64,
) -> Result<inv_group::Model, TestError> {
    let model = inv_group::ActiveModel {
        group_id: ActiveValue::Set(id),
        group_name: ActiveValue::Set(name.to_string()),
        category_id: ActiveValue::Set(category_id),
    };

    Ok(model.insert(db).await?)
}
