// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolves the year of BCBP dates.
//!
//! A boarding pass encodes the date of a flight as day of the year and the
//! date of issue as last digit of the year plus the day of the year. The
//! missing year is resolved relative to a reference date, usually today.

use chrono::{Datelike, NaiveDate};

/// How many days a flight date may lie in the past before the next year's
/// date is chosen instead.
pub const FLIGHT_DATE_PAST_TOLERANCE_DAYS: u32 = 30;

/// How many years the date of issue may be apart from today.
pub const ISSUE_DATE_WINDOW_YEARS: i32 = 9;

/// Resolves day-of-year dates relative to a fixed date.
///
/// The resolver is a pure function of its reference date: the same input
/// always resolves to the same date.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DateResolver {
    today: NaiveDate,
    tolerance: i64,
}

impl DateResolver {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            tolerance: FLIGHT_DATE_PAST_TOLERANCE_DAYS as i64,
        }
    }

    /// Sets how many days a flight date may lie in the past.
    pub fn with_tolerance(mut self, days: u32) -> Self {
        self.tolerance = days as i64;
        self
    }

    /// Resolves the date of a flight.
    ///
    /// The day of the year is tried in the current and next year. Dates
    /// further in the past than the tolerance are dropped and the date
    /// closest to today wins. If two dates are equally close, the future one
    /// wins.
    ///
    /// Returns `None` if the day is not within 1 to 366.
    pub fn flight_date(&self, day_of_year: u16) -> Option<NaiveDate> {
        if !(1..=366).contains(&day_of_year) {
            return None;
        }

        let year = self.today.year();
        let day = day_of_year as u32;

        (year..=year + 1)
            .filter_map(|y| NaiveDate::from_yo_opt(y, day))
            .filter(|date| self.days_from_today(date) >= -self.tolerance)
            .min_by_key(|date| {
                let days = self.days_from_today(date);
                (days.abs(), days < 0)
            })
            // day 366 without a leap year nearby
            .or_else(|| (year + 2..=year + 4).find_map(|y| NaiveDate::from_yo_opt(y, day)))
    }

    /// Resolves the date of issue of a boarding pass.
    ///
    /// The year is the one closest to today that ends on `year_digit`, at most
    /// [`ISSUE_DATE_WINDOW_YEARS`] apart. If two dates are equally close, the
    /// past one wins.
    ///
    /// Returns `None` if the digit or day are out of range.
    pub fn issue_date(&self, year_digit: u8, day_of_year: u16) -> Option<NaiveDate> {
        if year_digit > 9 || !(1..=366).contains(&day_of_year) {
            return None;
        }

        let year = self.today.year();
        let day = day_of_year as u32;

        (year - ISSUE_DATE_WINDOW_YEARS..=year + ISSUE_DATE_WINDOW_YEARS)
            .filter(|y| y.rem_euclid(10) == year_digit as i32)
            .filter_map(|y| NaiveDate::from_yo_opt(y, day))
            .min_by_key(|date| {
                let days = self.days_from_today(date);
                (days.abs(), days > 0)
            })
    }

    fn days_from_today(&self, date: &NaiveDate) -> i64 {
        date.signed_duration_since(self.today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date should be valid")
    }

    #[test]
    fn upcoming_flight_in_current_year() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.flight_date(319), Some(date(2026, 11, 15)));
    }

    #[test]
    fn past_flight_moves_to_next_year() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.flight_date(19), Some(date(2027, 1, 19)));
    }

    #[test]
    fn recent_flight_stays_in_past() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        // 2026-10-06
        assert_eq!(resolver.flight_date(279), Some(date(2026, 10, 6)));
    }

    #[test]
    fn end_of_year_flight_stays_in_current_year() {
        // 2026-12-29 was only 5 days ago but lies in the previous year
        let resolver = DateResolver::new(date(2027, 1, 3));
        assert_eq!(resolver.flight_date(363), Some(date(2027, 12, 29)));
    }

    #[test]
    fn tolerance_is_configurable() {
        let resolver = DateResolver::new(date(2026, 10, 16)).with_tolerance(0);
        // yesterday
        assert_eq!(resolver.flight_date(288), Some(date(2027, 10, 15)));
        assert_eq!(resolver.flight_date(289), Some(date(2026, 10, 16)));
    }

    #[test]
    fn equidistant_flight_prefers_future() {
        // 2028-01-10 and 2029-01-10 are both 183 days away
        let resolver = DateResolver::new(date(2028, 7, 11)).with_tolerance(200);
        assert_eq!(resolver.flight_date(10), Some(date(2029, 1, 10)));
    }

    #[test]
    fn leap_day_resolves_to_next_leap_year() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.flight_date(366), Some(date(2028, 12, 31)));
    }

    #[test]
    fn invalid_flight_day() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.flight_date(0), None);
        assert_eq!(resolver.flight_date(367), None);
    }

    #[test]
    fn issue_date_in_nearest_decade() {
        let resolver = DateResolver::new(date(2016, 6, 1));
        assert_eq!(resolver.issue_date(6, 7), Some(date(2016, 1, 7)));

        let resolver = DateResolver::new(date(2019, 3, 1));
        assert_eq!(resolver.issue_date(6, 7), Some(date(2016, 1, 7)));

        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.issue_date(6, 7), Some(date(2026, 1, 7)));
    }

    #[test]
    fn issue_date_of_next_decade() {
        let resolver = DateResolver::new(date(2029, 12, 30));
        assert_eq!(resolver.issue_date(0, 2), Some(date(2030, 1, 2)));
    }

    #[test]
    fn invalid_issue_date() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        assert_eq!(resolver.issue_date(10, 7), None);
        assert_eq!(resolver.issue_date(6, 0), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = DateResolver::new(date(2026, 10, 16));
        for day in 1..=366 {
            assert_eq!(resolver.flight_date(day), resolver.flight_date(day));
            assert_eq!(resolver.issue_date(6, day), resolver.issue_date(6, day));
        }
    }
}
