use anchor_lang::prelude::*;
use crate::{
    address::validate_beacon_id,
    constants::{HISTORY_SEED, LOCATION_SEED},
    coordinates::{self, format_degrees},
    errors::ErrorCode,
    instructions::registry::{ensure_device, store_device},
    state::{Device, Location, LocationHistory, LocationRecorded, LocationReport},
};

/// Reject a report before anything is touched.
pub fn validate_report(beacon_id: &str, latitude: i64, longitude: i64) -> Result<()> {
    validate_beacon_id(beacon_id)?;
    coordinates::validate(latitude, longitude)
}

/// Apply a report to the scanner's slot, the device log and the device
/// bookkeeping. A slot bound to another scanner is left untouched.
pub fn accept_report(
    device: &mut Device,
    location: &mut Location,
    history: &mut LocationHistory,
    device_key: Pubkey,
    report: LocationReport,
    location_bump: u8,
    history_bump: u8,
) -> Result<()> {
    require!(
        location.accepts_reports_from(&report.scanner),
        ErrorCode::Unauthorized
    );
    location.apply(&device.beacon_id, &report, location_bump);
    history.bind(device_key, history_bump);
    history.append(report);
    device.note_report(report.scanner, report.recorded_at);
    Ok(())
}

/// Record the scanner's current observation of a beacon
/// Creates the device on first contact and overwrites the scanner's slot
pub fn record_location(
    ctx: Context<RecordLocation>,
    beacon_id: String,
    latitude: i64,
    longitude: i64,
) -> Result<()> {
    validate_report(&beacon_id, latitude, longitude)?;

    let now = Clock::get()?.unix_timestamp;
    let scanner = ctx.accounts.scanner.key();
    let device_key = ctx.accounts.device.key();

    let (mut device, created) = ensure_device(
        &ctx.accounts.device.to_account_info(),
        &ctx.accounts.scanner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &beacon_id,
        now,
    )?;

    let report = LocationReport {
        scanner,
        latitude,
        longitude,
        recorded_at: now,
    };
    accept_report(
        &mut device,
        &mut ctx.accounts.location,
        &mut ctx.accounts.history,
        device_key,
        report,
        ctx.bumps.location,
        ctx.bumps.history,
    )?;
    store_device(&ctx.accounts.device.to_account_info(), &device)?;

    emit!(LocationRecorded {
        device: device_key,
        beacon_id: beacon_id.clone(),
        scanner,
        latitude,
        longitude,
        recorded_at: now,
        report_count: device.report_count,
    });
    msg!(
        "Location recorded - Beacon: {}, Scanner: {}, Lat: {}, Lon: {}, New device: {}",
        beacon_id,
        scanner,
        format_degrees(latitude),
        format_degrees(longitude),
        created
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RecordLocation<'info> {
    /// CHECK: Device PDA ["device", beacon_id]; address checked and the
    /// record created or loaded by the registry
    #[account(mut)]
    pub device: UncheckedAccount<'info>,

    /// Scanner's slot for this device, created on its first report
    #[account(
        init_if_needed,
        payer = scanner,
        space = Location::SPACE,
        seeds = [LOCATION_SEED, device.key().as_ref(), scanner.key().as_ref()],
        bump,
        constraint = location.accepts_reports_from(&scanner.key()) @ ErrorCode::Unauthorized
    )]
    pub location: Account<'info, Location>,

    /// Bounded report log for this device
    #[account(
        init_if_needed,
        payer = scanner,
        space = LocationHistory::SPACE,
        seeds = [HISTORY_SEED, device.key().as_ref()],
        bump
    )]
    pub history: Account<'info, LocationHistory>,

    /// Reporting agent (must sign, pays for new records)
    #[account(mut)]
    pub scanner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
