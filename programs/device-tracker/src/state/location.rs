use anchor_lang::prelude::*;

/// A single observation of a beacon by a scanner.
/// Coordinates are degrees × 10^7 (see `COORDINATE_SCALE`).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LocationReport {
    pub scanner: Pubkey,
    pub latitude: i64,
    pub longitude: i64,
    pub recorded_at: i64,
}

/// Location Account
/// Latest report of one scanner for one device, overwritten in place
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Location {
    /// Copy of the owning device's beacon identifier
    #[max_len(32)]
    pub beacon_id: String,

    pub latitude: i64,

    pub longitude: i64,

    /// Scanner bound to this slot, fixed at creation
    pub scanner: Pubkey,

    /// Timestamp of the last write
    pub recorded_at: i64,

    pub bump: u8,
}

impl Location {
    pub const SPACE: usize = 8 + Location::INIT_SPACE;

    /// A freshly allocated slot is zeroed, so it has no scanner yet.
    pub fn is_initialized(&self) -> bool {
        self.scanner != Pubkey::default()
    }

    /// Only the scanner bound to the slot may overwrite it.
    pub fn accepts_reports_from(&self, scanner: &Pubkey) -> bool {
        !self.is_initialized() || self.scanner == *scanner
    }

    /// Store `report`, fixing the slot's identity on first write.
    pub fn apply(&mut self, beacon_id: &str, report: &LocationReport, bump: u8) {
        if !self.is_initialized() {
            self.beacon_id = beacon_id.to_string();
            self.scanner = report.scanner;
            self.bump = bump;
        }
        self.latitude = report.latitude;
        self.longitude = report.longitude;
        self.recorded_at = report.recorded_at;
    }

    pub fn report(&self) -> LocationReport {
        LocationReport {
            scanner: self.scanner,
            latitude: self.latitude,
            longitude: self.longitude,
            recorded_at: self.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(scanner: Pubkey, latitude: i64, recorded_at: i64) -> LocationReport {
        LocationReport {
            scanner,
            latitude,
            longitude: 1_396_917_000,
            recorded_at,
        }
    }

    #[test]
    fn fresh_slot_accepts_any_scanner() {
        let slot = Location::default();
        assert!(!slot.is_initialized());
        assert!(slot.accepts_reports_from(&Pubkey::new_unique()));
    }

    #[test]
    fn first_write_binds_the_scanner() {
        let scanner = Pubkey::new_unique();
        let mut slot = Location::default();
        slot.apply("test-beacon-123", &report(scanner, 356_895_000, 10), 253);

        assert_eq!(slot.beacon_id, "test-beacon-123");
        assert_eq!(slot.scanner, scanner);
        assert_eq!(slot.bump, 253);
        assert!(slot.accepts_reports_from(&scanner));
        assert!(!slot.accepts_reports_from(&Pubkey::new_unique()));
    }

    #[test]
    fn later_writes_only_move_the_position() {
        let scanner = Pubkey::new_unique();
        let mut slot = Location::default();
        slot.apply("test-beacon-123", &report(scanner, 356_895_000, 10), 253);
        slot.apply("ignored", &report(scanner, 356_896_000, 20), 7);

        assert_eq!(slot.beacon_id, "test-beacon-123");
        assert_eq!(slot.bump, 253);
        assert_eq!(slot.report(), report(scanner, 356_896_000, 20));
    }
}
