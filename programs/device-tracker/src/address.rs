//! Record addresses.
//!
//! Every record lives at a program derived address built from a fixed
//! per-kind seed tag and its variable seeds:
//!
//! | Record            | Seeds                                  |
//! |-------------------|----------------------------------------|
//! | `Device`          | `["device", beacon_id]`                |
//! | `Location`        | `["location", device, scanner]`        |
//! | `LocationHistory` | `["history", device]`                  |
//!
//! Location and history addresses take the already-derived device address,
//! so they cannot be computed without resolving the device first.

use anchor_lang::prelude::*;

use crate::{
    constants::{DEVICE_SEED, HISTORY_SEED, LOCATION_SEED, MAX_BEACON_ID_LEN},
    errors::ErrorCode,
};

/// Reject beacon IDs that cannot be used as a seed.
pub fn validate_beacon_id(beacon_id: &str) -> Result<()> {
    require!(!beacon_id.is_empty(), ErrorCode::BeaconIdEmpty);
    require!(
        beacon_id.len() <= MAX_BEACON_ID_LEN,
        ErrorCode::BeaconIdTooLong
    );
    Ok(())
}

pub fn device_address(beacon_id: &str, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    validate_beacon_id(beacon_id)?;
    Ok(Pubkey::find_program_address(
        &[DEVICE_SEED, beacon_id.as_bytes()],
        program_id,
    ))
}

pub fn location_address(device: &Pubkey, scanner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LOCATION_SEED, device.as_ref(), scanner.as_ref()],
        program_id,
    )
}

pub fn history_address(device: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HISTORY_SEED, device.as_ref()], program_id)
}
