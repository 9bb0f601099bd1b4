
use chrono::{NaiveDate, NaiveDateTime};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 4)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn colony_row(id: i32, planet_id: i64) -> entity::planetary_colony::Model {
    entity::planetary_colony::Model {
        id,
        character_id: 2114794365,
        planet_id,
        planet_type: "barren".to_string(),
        solar_system_id: 30000142,
        upgrade_level: 4,
        last_update: timestamp(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn pin_row(id: i32, colony_id: i32, pin_id: i64, type_id: i64) -> entity::planetary_pin::Model {
    entity::planetary_pin::Model {
        id,
        colony_id,
        pin_id,
        type_id,
        product_type_id: None,
        cycle_time: None,
        qty_per_cycle: None,
        num_heads: None,
        install_time: None,
        expiry_time: None,
        last_cycle_start: None,
        schematic_id: None,
        capacity: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn route_row(
    id: i32,
    colony_id: i32,
    source_pin_id: i64,
    destination_pin_id: i64,
    waypoints: Option<&str>,
) -> entity::planetary_route::Model {
    entity::planetary_route::Model {
        id,
        colony_id,
        route_id: i64::from(id),
        source_pin_id,
        destination_pin_id,
        content_type_id: 3645,
        quantity: 20,
        waypoints: waypoints.map(str::to_string),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}
