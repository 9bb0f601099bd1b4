//! Conversion of stored colony rows into planetary domain colonies.

use std::collections::HashMap;

use crate::{
    error::planetary::PlanetaryError,
    model::colony::{Colony, Pin, PinContent, PinFields, Route},
};

/// Builds domain colonies from their stored rows.
///
/// Rows may belong to any of the supplied colonies; each pin, content and route is attached
/// to its owning colony and keeps its row order. Every assembled colony is validated, so
/// callers only ever see colonies with unique pins and routes between known pins.
///
/// # Arguments
/// - `colonies` - Colony rows, output keeps this order
/// - `pins` - Pin rows of the colonies
/// - `contents` - Content rows of the pins, rows of unknown pins are ignored
/// - `routes` - Route rows of the colonies
///
/// # Returns
/// - `Ok(Vec<Colony>)` - One colony per colony row
/// - `Err(PlanetaryError::DataIntegrity)` - A row references something missing, a pin is
///   duplicated, or a route waypoint list cannot be parsed
pub fn assemble_colonies(
    colonies: Vec<entity::planetary_colony::Model>,
    pins: Vec<entity::planetary_pin::Model>,
    contents: Vec<entity::planetary_pin_content::Model>,
    routes: Vec<entity::planetary_route::Model>,
) -> Result<Vec<Colony>, PlanetaryError> {
    let mut contents_by_pin: HashMap<i32, Vec<PinContent>> = HashMap::new();
    for content in contents {
        contents_by_pin
            .entry(content.pin_id)
            .or_default()
            .push(PinContent {
                type_id: content.type_id,
                amount: content.amount,
            });
    }

    let mut assembled: Vec<Colony> = Vec::with_capacity(colonies.len());
    let mut index: HashMap<i32, usize> = HashMap::with_capacity(colonies.len());

    for colony in colonies {
        index.insert(colony.id, assembled.len());
        assembled.push(Colony {
            id: i64::from(colony.id),
            character_id: colony.character_id,
            planet_id: colony.planet_id,
            planet_type: colony.planet_type,
            solar_system_id: colony.solar_system_id,
            upgrade_level: colony.upgrade_level,
            last_update: Some(colony.last_update.and_utc()),
            pins: Vec::new(),
            routes: Vec::new(),
        });
    }

    for pin in pins {
        let colony = owning_colony(&mut assembled, &index, pin.colony_id, "pin", pin.pin_id)?;
        let contents = contents_by_pin.remove(&pin.id).unwrap_or_default();

        colony.pins.push(Pin::from_fields(
            pin.pin_id,
            PinFields {
                type_id: pin.type_id,
                product_type_id: pin.product_type_id,
                cycle_time_seconds: pin.cycle_time,
                qty_per_cycle: pin.qty_per_cycle,
                num_heads: pin.num_heads,
                expiry_time: pin.expiry_time.map(|expiry| expiry.and_utc()),
                schematic_id: pin.schematic_id,
                capacity: pin.capacity,
                contents,
            },
        ));
    }

    for route in routes {
        let colony =
            owning_colony(&mut assembled, &index, route.colony_id, "route", route.route_id)?;
        let waypoints = parse_waypoints(route.waypoints.as_deref()).map_err(|detail| {
            PlanetaryError::DataIntegrity {
                colony_id: colony.id,
                detail: format!("route {} has invalid waypoints: {}", route.route_id, detail),
            }
        })?;

        colony.routes.push(Route {
            route_id: route.route_id,
            source_pin_id: route.source_pin_id,
            destination_pin_id: route.destination_pin_id,
            content_type_id: route.content_type_id,
            quantity_per_cycle: route.quantity,
            waypoints,
        });
    }

    for colony in &assembled {
        colony.validate()?;
    }

    Ok(assembled)
}

fn owning_colony<'c>(
    assembled: &'c mut [Colony],
    index: &HashMap<i32, usize>,
    colony_id: i32,
    kind: &str,
    id: i64,
) -> Result<&'c mut Colony, PlanetaryError> {
    match index.get(&colony_id) {
        Some(position) => Ok(&mut assembled[*position]),
        None => Err(PlanetaryError::DataIntegrity {
            colony_id: i64::from(colony_id),
            detail: format!("{} {} belongs to a colony that was not loaded", kind, id),
        }),
    }
}

/// Parses a comma separated list of pin IDs, an empty or missing list means no waypoints.
fn parse_waypoints(waypoints: Option<&str>) -> Result<Vec<i64>, String> {
    let Some(waypoints) = waypoints.map(str::trim).filter(|list| !list.is_empty()) else {
        return Ok(Vec::new());
    };

    waypoints
        .split(',')
        .map(|pin_id| {
            pin_id
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("{:?}: {}", pin_id, e))
        })
        .collect()
}
