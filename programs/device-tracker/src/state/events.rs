use anchor_lang::prelude::*;

/// Event emitted when a beacon is seen for the first time
#[event]
pub struct DeviceRegistered {
    pub device: Pubkey,

    pub beacon_id: String,

    pub created_at: i64,

    /// Account that paid for the device record
    pub payer: Pubkey,
}

/// Event emitted for every accepted location report
#[event]
pub struct LocationRecorded {
    pub device: Pubkey,

    pub beacon_id: String,

    pub scanner: Pubkey,

    /// Latitude in degrees × 10^7
    /// Example: 35.6895° = 356_895_000
    pub latitude: i64,

    /// Longitude in degrees × 10^7
    pub longitude: i64,

    pub recorded_at: i64,

    /// Device report count after this report
    pub report_count: u64,
}
