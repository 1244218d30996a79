use anchor_lang::prelude::*;

use crate::constants::HISTORY_CAPACITY;

use super::LocationReport;

/// Location History Account
/// Bounded log of every accepted report for a device, across scanners.
/// Once `HISTORY_CAPACITY` entries exist the oldest one is overwritten.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct LocationHistory {
    /// Device this log belongs to
    pub device: Pubkey,

    /// Index of the oldest entry once the log has wrapped
    pub head: u32,

    #[max_len(64)]
    pub entries: Vec<LocationReport>,

    pub bump: u8,
}

impl LocationHistory {
    pub const SPACE: usize = 8 + LocationHistory::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.device != Pubkey::default()
    }

    pub fn bind(&mut self, device: Pubkey, bump: u8) {
        if !self.is_initialized() {
            self.device = device;
            self.bump = bump;
        }
    }

    pub fn append(&mut self, report: LocationReport) {
        if self.entries.len() < HISTORY_CAPACITY {
            self.entries.push(report);
            return;
        }
        let slot = self.head as usize % HISTORY_CAPACITY;
        if let Some(entry) = self.entries.get_mut(slot) {
            *entry = report;
        }
        self.head = ((slot + 1) % HISTORY_CAPACITY) as u32;
    }

    pub fn oldest_first(&self) -> impl Iterator<Item = &LocationReport> {
        let split = if self.entries.len() < HISTORY_CAPACITY {
            0
        } else {
            self.head as usize % HISTORY_CAPACITY
        };
        let (newer, older) = self.entries.split_at(split);
        older.iter().chain(newer.iter())
    }

    /// Reports with `from_ts <= recorded_at <= to_ts`, oldest first.
    pub fn between(&self, from_ts: i64, to_ts: i64) -> Vec<LocationReport> {
        let mut reports: Vec<LocationReport> = self
            .oldest_first()
            .filter(|report| (from_ts..=to_ts).contains(&report.recorded_at))
            .copied()
            .collect();
        // stable: equal timestamps keep arrival order
        reports.sort_by_key(|report| report.recorded_at);
        reports
    }
}
