//! Card grid state.
//!
//! The grid caps how many cards share a row. A cap configured by markup or
//! by the parent is taken as given. A cap typed into the numeric control
//! must lie in `MIN_CARDS_PER_ROW..=MAX_CARDS_PER_ROW`; anything else is
//! dropped and the previous cap kept.

use crate::attributes::MAX_CARDS_PER_ROW_VAR;
use crate::error::{FlipCardError, FlipCardResult};
use crate::reactive::{ChangedProperties, Reactive, StyleVars};

pub const MIN_CARDS_PER_ROW: u8 = 1;
pub const MAX_CARDS_PER_ROW: u8 = 10;
pub const DEFAULT_CARDS_PER_ROW: u8 = 4;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum GridProperty {
    MaxCardsPerRow,
}

/// Observable properties of a card grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridState {
    max_cards_per_row: i64,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            max_cards_per_row: DEFAULT_CARDS_PER_ROW as i64,
        }
    }
}

impl GridState {
    /// Start from a configured cap. No range check applies.
    pub fn with_max_cards_per_row(max_cards_per_row: i64) -> Self {
        Self { max_cards_per_row }
    }

    pub fn max_cards_per_row(&self) -> i64 {
        self.max_cards_per_row
    }

    /// Assign a configured cap as is.
    ///
    /// Out-of-range values reach the layout variable unchanged; only the
    /// control is bounded.
    pub fn configure_max_cards_per_row(&mut self, value: i64) {
        if value != self.max_cards_per_row {
            tracing::debug!(from = self.max_cards_per_row, to = value, "column cap configured");
        }
        self.max_cards_per_row = value;
    }

    /// Apply a cap chosen through the control if it lies in range;
    /// otherwise leave state as is.
    pub fn set_max_cards_per_row(&mut self, candidate: i64) -> FlipCardResult<()> {
        let value = check_range(candidate)? as i64;
        if value != self.max_cards_per_row {
            tracing::debug!(from = self.max_cards_per_row, to = value, "column cap changed");
        }
        self.max_cards_per_row = value;
        Ok(())
    }

    /// Handle the value of the numeric control.
    ///
    /// Rejected input is ignored without a trace. Returns whether the cap
    /// changed.
    pub fn apply_control_input(&mut self, raw: &str) -> bool {
        let Ok(value) = parse_cards_per_row(raw) else {
            return false;
        };
        let before = self.max_cards_per_row;
        self.set_max_cards_per_row(value as i64).is_ok() && before != value as i64
    }
}

fn check_range(candidate: i64) -> FlipCardResult<u8> {
    if (MIN_CARDS_PER_ROW as i64..=MAX_CARDS_PER_ROW as i64).contains(&candidate) {
        Ok(candidate as u8)
    } else {
        Err(FlipCardError::CardsPerRowOutOfRange {
            value: candidate,
            min: MIN_CARDS_PER_ROW,
            max: MAX_CARDS_PER_ROW,
        })
    }
}

/// Read the leading integer of a text field value.
///
/// Leading whitespace is skipped, one sign is accepted, and digits are
/// read up to the first non-digit, so `"7.5"` and `"7px"` both give 7.
/// Magnitudes beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> FlipCardResult<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return Err(FlipCardError::NotANumber(raw.to_string()));
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse and range-check a column cap typed into the control.
pub fn parse_cards_per_row(raw: &str) -> FlipCardResult<u8> {
    check_range(parse_leading_int(raw)?)
}

impl Reactive for GridState {
    type Property = GridProperty;
    const PROPERTIES: &'static [GridProperty] = &[GridProperty::MaxCardsPerRow];

    fn changed_since(&self, previous: &Self) -> ChangedProperties<GridProperty> {
        let mut changed = ChangedProperties::none();
        if self.max_cards_per_row != previous.max_cards_per_row {
            changed.insert(GridProperty::MaxCardsPerRow);
        }
        changed
    }

    fn updated(&self, changed: &ChangedProperties<GridProperty>, style: &mut StyleVars) {
        if changed.has(GridProperty::MaxCardsPerRow) {
            style.set_property(MAX_CARDS_PER_ROW_VAR, self.max_cards_per_row.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Host;

    #[test]
    fn default_cap_is_four() {
        assert_eq!(GridState::default().max_cards_per_row(), 4);
    }

    #[test]
    fn leading_int_follows_text_field_rules() {
        assert_eq!(parse_leading_int("7"), Ok(7));
        assert_eq!(parse_leading_int("  7"), Ok(7));
        assert_eq!(parse_leading_int("7.9"), Ok(7));
        assert_eq!(parse_leading_int("7px"), Ok(7));
        assert_eq!(parse_leading_int("+3"), Ok(3));
        assert_eq!(parse_leading_int("-5"), Ok(-5));
        assert_eq!(parse_leading_int("007"), Ok(7));
        assert!(parse_leading_int("").is_err());
        assert!(parse_leading_int("abc").is_err());
        assert!(parse_leading_int("-").is_err());
        assert!(parse_leading_int(".5").is_err());
        assert_eq!(
            parse_leading_int("99999999999999999999999"),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_cards_per_row("1"), Ok(1));
        assert_eq!(parse_cards_per_row("10"), Ok(10));
        assert!(matches!(
            parse_cards_per_row("0"),
            Err(FlipCardError::CardsPerRowOutOfRange { value: 0, .. })
        ));
        assert!(parse_cards_per_row("11").is_err());
    }

    #[test]
    fn control_input_keeps_previous_value_on_rejection() {
        let mut grid = GridState::default();
        assert!(grid.apply_control_input("7"));
        for bad in ["0", "11", "-5", "15", "", "abc"] {
            assert!(!grid.apply_control_input(bad), "input {:?}", bad);
            assert_eq!(grid.max_cards_per_row(), 7);
        }
        // Same value again is accepted but not a change
        assert!(!grid.apply_control_input("7"));
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut grid = GridState::default();
        assert!(grid.set_max_cards_per_row(11).is_err());
        assert!(grid.set_max_cards_per_row(-1).is_err());
        assert_eq!(grid.max_cards_per_row(), 4);
        assert!(grid.set_max_cards_per_row(10).is_ok());
        assert_eq!(grid.max_cards_per_row(), 10);
    }

    #[test]
    fn configured_cap_is_not_range_checked() {
        assert_eq!(GridState::with_max_cards_per_row(6).max_cards_per_row(), 6);
        assert_eq!(GridState::with_max_cards_per_row(12).max_cards_per_row(), 12);
        assert_eq!(GridState::with_max_cards_per_row(0).max_cards_per_row(), 0);

        let mut grid = GridState::default();
        grid.configure_max_cards_per_row(42);
        assert_eq!(grid.max_cards_per_row(), 42);
    }

    #[test]
    fn configured_cap_reaches_layout_variable() {
        let host = Host::new(GridState::with_max_cards_per_row(12));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("12"));

        let mut host = Host::new(GridState::default());
        host.update(|g| g.configure_max_cards_per_row(12));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("12"));

        // The control still refuses to go past the bound
        host.update(|g| g.apply_control_input("11"));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("12"));
        host.update(|g| g.apply_control_input("10"));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("10"));
    }

    #[test]
    fn host_syncs_layout_variable() {
        let mut host = Host::new(GridState::default());
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("4"));
        host.update(|g| g.apply_control_input("9"));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("9"));
        host.update(|g| g.apply_control_input("0"));
        assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("9"));
    }
}
