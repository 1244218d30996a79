use anchor_lang::prelude::*;
use crate::{
    constants::{HISTORY_SEED, MAX_HISTORY_RESULTS},
    errors::ErrorCode,
    instructions::registry::{check_device_address, load_record},
    state::{LocationHistory, LocationReport},
};

/// Reports for `beacon_id` with from_ts <= recorded_at <= to_ts, oldest first.
///
/// At most `MAX_HISTORY_RESULTS` come back; when the result is full, ask again
/// with `from_ts` just past the last timestamp returned. The log keeps the
/// newest `HISTORY_CAPACITY` reports, so older ones are no longer returned.
pub fn read_history(
    device: &AccountInfo,
    history: &AccountInfo,
    beacon_id: &str,
    from_ts: i64,
    to_ts: i64,
) -> Result<Vec<LocationReport>> {
    require!(from_ts <= to_ts, ErrorCode::InvalidTimeRange);
    check_device_address(device, beacon_id)?;

    if history.data_is_empty() {
        return Ok(Vec::new());
    }
    let log: LocationHistory = load_record(history)?;
    require_keys_eq!(log.device, *device.key, ErrorCode::DeviceMismatch);

    let mut reports = log.between(from_ts, to_ts);
    reports.truncate(MAX_HISTORY_RESULTS);
    Ok(reports)
}

/// Return a beacon's reports within [from_ts, to_ts]
pub fn get_location_history(
    ctx: Context<GetLocationHistory>,
    beacon_id: String,
    from_ts: i64,
    to_ts: i64,
) -> Result<Vec<LocationReport>> {
    let reports = read_history(
        &ctx.accounts.device,
        &ctx.accounts.history,
        &beacon_id,
        from_ts,
        to_ts,
    )?;
    msg!(
        "History - Beacon: {}, Range: {}..={}, Reports: {}",
        beacon_id,
        from_ts,
        to_ts,
        reports.len()
    );
    Ok(reports)
}

#[derive(Accounts)]
pub struct GetLocationHistory<'info> {
    /// CHECK: Device PDA ["device", beacon_id], checked by the registry
    pub device: UncheckedAccount<'info>,

    /// CHECK: May not exist yet; read through the registry
    #[account(
        seeds = [HISTORY_SEED, device.key().as_ref()],
        bump
    )]
    pub history: UncheckedAccount<'info>,
}
