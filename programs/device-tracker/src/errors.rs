use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid latitude value")]
    InvalidLatitude,

    #[msg("Invalid longitude value")]
    InvalidLongitude,

    #[msg("Invalid time range")]
    InvalidTimeRange,

    #[msg("Location not found")]
    NotFound,

    #[msg("Unauthorized: location slot belongs to another scanner")]
    Unauthorized,

    #[msg("Insufficient funds to allocate record")]
    AllocationFailed,

    #[msg("Beacon ID cannot be empty")]
    BeaconIdEmpty,

    #[msg("Beacon ID is too long (max 32 bytes)")]
    BeaconIdTooLong,

    #[msg("Device record does not match beacon ID")]
    DeviceMismatch,
}
