use anchor_lang::prelude::*;
use crate::{
    constants::LOCATION_SEED,
    errors::ErrorCode,
    instructions::registry::{load_device, load_record},
    state::Location,
};

/// Load a scanner's slot for `beacon_id`; `NotFound` until the scanner reported it
pub fn read_latest(
    device: &AccountInfo,
    location: &AccountInfo,
    beacon_id: &str,
) -> Result<Location> {
    let record = load_device(device, beacon_id)?;
    let slot: Location = load_record(location)?;
    require!(slot.beacon_id == record.beacon_id, ErrorCode::NotFound);
    Ok(slot)
}

/// Return the scanner's latest location for a beacon
pub fn get_latest_location(
    ctx: Context<GetLatestLocation>,
    beacon_id: String,
) -> Result<Location> {
    read_latest(&ctx.accounts.device, &ctx.accounts.location, &beacon_id)
}

#[derive(Accounts)]
pub struct GetLatestLocation<'info> {
    /// CHECK: Device PDA ["device", beacon_id], checked by the registry
    pub device: UncheckedAccount<'info>,

    /// CHECK: May not exist yet; read through the registry
    #[account(
        seeds = [LOCATION_SEED, device.key().as_ref(), scanner.key().as_ref()],
        bump
    )]
    pub location: UncheckedAccount<'info>,

    /// CHECK: Scanner whose slot is read; no signature needed
    pub scanner: UncheckedAccount<'info>,
}
