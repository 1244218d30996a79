use anchor_lang::prelude::*;

/// Device Account
/// One per physical beacon, created on first contact
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Device {
    /// Beacon identifier, also the address seed of this record
    #[max_len(32)]
    pub beacon_id: String,

    /// Timestamp when the device was first seen
    pub created_at: i64,

    /// Timestamp of the most recent accepted report
    pub last_update: i64,

    /// Scanner that submitted the most recent accepted report
    pub last_scanner: Pubkey,

    /// Accepted reports across all scanners
    pub report_count: u64,

    pub bump: u8,
}

impl Device {
    pub const SPACE: usize = 8 + Device::INIT_SPACE;

    pub fn new(beacon_id: String, bump: u8, now: i64) -> Self {
        Self {
            beacon_id,
            created_at: now,
            last_update: 0,
            last_scanner: Pubkey::default(),
            report_count: 0,
            bump,
        }
    }

    pub fn note_report(&mut self, scanner: Pubkey, recorded_at: i64) {
        self.last_update = recorded_at;
        self.last_scanner = scanner;
        self.report_count = self.report_count.saturating_add(1);
    }
}
