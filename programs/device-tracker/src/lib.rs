use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod instructions;
pub mod state;


pub use instructions::*;
use state::{Location, LocationReport};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod device_tracker {
    use super::*;

    /// Record the signing scanner's observation of a beacon
    /// latitude / longitude: degrees × 10^7 (35.6895° = 356_895_000)
    pub fn record_location(
        ctx: Context<RecordLocation>,
        beacon_id: String,
        latitude: i64,
        longitude: i64,
    ) -> Result<()> {
        instructions::record_location::record_location(ctx, beacon_id, latitude, longitude)
    }

    /// Latest location a scanner reported for a beacon
    pub fn get_latest_location(
        ctx: Context<GetLatestLocation>,
        beacon_id: String,
    ) -> Result<Location> {
        instructions::get_latest_location::get_latest_location(ctx, beacon_id)
    }

    /// Reports for a beacon within [from_ts, to_ts], oldest first,
    /// at most MAX_HISTORY_RESULTS per call
    pub fn get_location_history(
        ctx: Context<GetLocationHistory>,
        beacon_id: String,
        from_ts: i64,
        to_ts: i64,
    ) -> Result<Vec<LocationReport>> {
        instructions::get_location_history::get_location_history(ctx, beacon_id, from_ts, to_ts)
    }
}
