//! Test constants for static data and ESI client setup.
//!
//! Type, market group and schematic IDs mirror the real EVE Online SDE so fixtures read like
//! production data. None of these values are credentials.

/// User agent string for test ESI requests.
pub static TEST_USER_AGENT: &str =
    "pi-ledger/1.0 (contact@example.com; +https://github.com/autumn-order/pi-ledger)";

/// EVE Online character ID owning the test colonies.
pub const TEST_CHARACTER_ID: i64 = 2114794365;

/// Root market group of all planetary commodities.
pub const PLANETARY_MATERIALS_GROUP_ID: i64 = 1332;
/// Market group of raw (P0) planetary materials, not a tier root.
pub const RAW_MATERIALS_GROUP_ID: i64 = 1333;
/// Tier roots for P1 through P4.
pub const P1_GROUP_ID: i64 = 1334;
pub const P2_GROUP_ID: i64 = 1335;
pub const P3_GROUP_ID: i64 = 1336;
pub const P4_GROUP_ID: i64 = 1337;

/// Aqueous Liquids (P0)
pub const AQUEOUS_LIQUIDS_TYPE_ID: i64 = 2268;
/// Ionic Solutions (P0)
pub const IONIC_SOLUTIONS_TYPE_ID: i64 = 2309;
/// Water (P1)
pub const WATER_TYPE_ID: i64 = 3645;
/// Electrolytes (P1)
pub const ELECTROLYTES_TYPE_ID: i64 = 2390;
/// Coolant (P2)
pub const COOLANT_TYPE_ID: i64 = 9832;

/// Basic Industry Facility
pub const BASIC_INDUSTRY_FACILITY_TYPE_ID: i64 = 2473;
/// Barren Extractor Control Unit
pub const EXTRACTOR_CONTROL_UNIT_TYPE_ID: i64 = 2848;
/// Barren Storage Facility
pub const STORAGE_FACILITY_TYPE_ID: i64 = 2541;

/// Water from Aqueous Liquids, 30 minute cycle
pub const WATER_SCHEMATIC_ID: i64 = 121;
/// Electrolytes from Ionic Solutions, 30 minute cycle
pub const ELECTROLYTES_SCHEMATIC_ID: i64 = 127;
/// Coolant from Water and Electrolytes, 1 hour cycle
pub const COOLANT_SCHEMATIC_ID: i64 = 66;
