/// Seed tag for device records: ["device", beacon_id]
pub const DEVICE_SEED: &[u8] = b"device";

/// Seed tag for location slots: ["location", device, scanner]
pub const LOCATION_SEED: &[u8] = b"location";

/// Seed tag for per-device history logs: ["history", device]
pub const HISTORY_SEED: &[u8] = b"history";

/// Maximum beacon ID length (32 bytes, the Solana per-seed limit)
pub const MAX_BEACON_ID_LEN: usize = 32;

/// Coordinates are stored as degrees × 10^7
/// Example: 35.6895° = 356_895_000
/// Precision: 7 decimal places (~1 cm at the equator)
pub const COORDINATE_SCALE: i64 = 10_000_000;

/// Number of fractional digits carried by COORDINATE_SCALE
pub const COORDINATE_DECIMALS: usize = 7;

pub const MIN_LATITUDE: i64 = -90 * COORDINATE_SCALE;
pub const MAX_LATITUDE: i64 = 90 * COORDINATE_SCALE;
pub const MIN_LONGITUDE: i64 = -180 * COORDINATE_SCALE;
pub const MAX_LONGITUDE: i64 = 180 * COORDINATE_SCALE;

/// Reports kept per device before the oldest is overwritten
pub const HISTORY_CAPACITY: usize = 64;

/// Reports returned by one history query.
/// 16 × 56 bytes + 4 keeps the result under the 1024 byte return data limit.
pub const MAX_HISTORY_RESULTS: usize = 16;
