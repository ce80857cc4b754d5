//! Time source for the payroll period.
//!
//! The only clock dependency in the engine is the "current month and
//! year" stamped on a new payslip.  It is read through the [`Clock`]
//! trait so that tests, and batch runs for a past period, can pin it.

use chrono::{Datelike, Local, Month};

/// Supplies the pay period a payslip is issued for.
pub trait Clock: Send + Sync {
    /// Returns `(year, month)` with `month` in `1..=12`.
    fn year_month(&self) -> (i32, u32);

    /// Full English month name, e.g. `"October"`.
    fn month_name(&self) -> String {
        let (_, month) = self.year_month();
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }

    fn year_string(&self) -> String {
        self.year_month().0.to_string()
    }
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year_month(&self) -> (i32, u32) {
        let now = Local::now();
        (now.year(), now.month())
    }
}

/// A clock pinned to one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
    month: u32,
}

impl FixedClock {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl Clock for FixedClock {
    fn year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}
