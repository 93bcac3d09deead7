//! Gantt Timeline Utilities
//!
//! Date math for positioning task bars on the fixed timeline window.

use chrono::{Duration, NaiveDate};

/// Days shown before today
pub const WINDOW_PAST_DAYS: i64 = 7;
/// Days shown after today
pub const WINDOW_FUTURE_DAYS: i64 = 14;
/// Minimum rendered bar width so zero-length tasks stay visible and clickable
pub const MIN_BAR_WIDTH_PCT: f64 = 2.0;

/// The fixed 21-day display range anchored on a reference day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GanttWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GanttWindow {
    /// Window spanning one week back through two weeks ahead of `today`
    pub fn around(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(WINDOW_PAST_DAYS),
            end: today + Duration::days(WINDOW_FUTURE_DAYS),
        }
    }

    fn len_days(&self) -> f64 {
        (self.end - self.start).num_days() as f64
    }

    /// Offset of a date from the window start, as a percentage of the window
    pub fn offset_pct(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.len_days() * 100.0
    }

    /// Today-marker offset; `None` when outside the visible range. Always
    /// `Some` for the anchor day by construction, guarded anyway.
    pub fn today_offset_pct(&self, today: NaiveDate) -> Option<f64> {
        let pct = self.offset_pct(today);
        (0.0..=100.0).contains(&pct).then_some(pct)
    }
}

/// Horizontal placement of one task bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarLayout {
    /// Bar positioned inside the window. `width_pct` may be <= 0 for a
    /// task entirely left of the window; rendering applies
    /// [`MIN_BAR_WIDTH_PCT`] as a floor.
    Positioned { left_pct: f64, width_pct: f64 },
    /// One or both dates missing; rendered as a "no dates set" marker
    Unscheduled,
}

impl BarLayout {
    /// Width to actually draw, with the visibility floor applied
    pub fn render_width_pct(&self) -> Option<f64> {
        match self {
            BarLayout::Positioned { width_pct, .. } => Some(width_pct.max(MIN_BAR_WIDTH_PCT)),
            BarLayout::Unscheduled => None,
        }
    }
}

/// Map a task's date range onto the window.
///
/// Negative left offsets are folded into the width and the bar pinned to
/// the window edge, preserving the apparent end date; bars running past
/// the right edge are truncated at 100%.
pub fn bar_layout(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    window: &GanttWindow,
) -> BarLayout {
    let (Some(start), Some(end)) = (start, end) else {
        return BarLayout::Unscheduled;
    };

    let mut left = window.offset_pct(start);
    let mut width = (end - start).num_days() as f64 / window.len_days() * 100.0;

    if left < 0.0 {
        width += left;
        left = 0.0;
    }
    if left + width > 100.0 {
        width = 100.0 - left;
    }

    BarLayout::Positioned {
        left_pct: left,
        width_pct: width,
    }
}

/// Parse a `YYYY-MM-DD` wire date, treating anything malformed as unset
pub fn parse_wire_date(date: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_spans_21_days() {
        let window = GanttWindow::around(day(2026, 3, 10));
        assert_eq!(window.start, day(2026, 3, 3));
        assert_eq!(window.end, day(2026, 3, 24));
        assert_eq!((window.end - window.start).num_days(), 21);
    }

    #[test]
    fn test_bar_inside_window() {
        let window = GanttWindow::around(day(2026, 3, 10));
        // Starts at the anchor day (7/21 in), runs 7 days
        let layout = bar_layout(Some(day(2026, 3, 10)), Some(day(2026, 3, 17)), &window);

        let BarLayout::Positioned { left_pct, width_pct } = layout else {
            panic!("expected positioned bar");
        };
        assert!((left_pct - 100.0 / 3.0).abs() < 1e-9);
        assert!((width_pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_overflow_clamped() {
        let window = GanttWindow::around(day(2026, 3, 10));
        // Starts 10 days before the window start, ends 3 days before it
        let layout = bar_layout(Some(day(2026, 2, 21)), Some(day(2026, 2, 28)), &window);

        let BarLayout::Positioned { left_pct, width_pct } = layout else {
            panic!("expected positioned bar");
        };
        assert_eq!(left_pct, 0.0);
        // The overflow was folded into the width: what remains equals the
        // pre-clamp end offset (still left of the window, hence negative)
        let end_offset = window.offset_pct(day(2026, 2, 28));
        assert!((width_pct - end_offset).abs() < 1e-9);
        assert!(width_pct < 0.0);
    }

    #[test]
    fn test_out_of_window_bar_renders_at_floor() {
        let window = GanttWindow::around(day(2026, 3, 10));
        let layout = bar_layout(Some(day(2026, 2, 21)), Some(day(2026, 2, 28)), &window);

        // Width after clamping is <= 0; rendering falls back to the floor
        assert_eq!(layout.render_width_pct(), Some(MIN_BAR_WIDTH_PCT));
    }

    #[test]
    fn test_right_overflow_truncated() {
        let window = GanttWindow::around(day(2026, 3, 10));
        // Runs well past the window end
        let layout = bar_layout(Some(day(2026, 3, 17)), Some(day(2026, 4, 20)), &window);

        let BarLayout::Positioned { left_pct, width_pct } = layout else {
            panic!("expected positioned bar");
        };
        assert!((left_pct + width_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_uses_floor() {
        let window = GanttWindow::around(day(2026, 3, 10));
        let layout = bar_layout(Some(day(2026, 3, 10)), Some(day(2026, 3, 10)), &window);

        let BarLayout::Positioned { width_pct, .. } = layout else {
            panic!("expected positioned bar");
        };
        assert_eq!(width_pct, 0.0);
        assert_eq!(layout.render_width_pct(), Some(MIN_BAR_WIDTH_PCT));
    }

    #[test]
    fn test_missing_dates_unscheduled() {
        let window = GanttWindow::around(day(2026, 3, 10));
        assert_eq!(
            bar_layout(Some(day(2026, 3, 10)), None, &window),
            BarLayout::Unscheduled
        );
        assert_eq!(bar_layout(None, None, &window), BarLayout::Unscheduled);
        assert_eq!(BarLayout::Unscheduled.render_width_pct(), None);
    }

    #[test]
    fn test_today_marker_inside_window() {
        let today = day(2026, 3, 10);
        let window = GanttWindow::around(today);
        let pct = window.today_offset_pct(today).unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
        // A day far outside the window is suppressed
        assert_eq!(window.today_offset_pct(day(2027, 1, 1)), None);
    }

    #[test]
    fn test_parse_wire_date() {
        assert_eq!(parse_wire_date(Some("2026-03-10")), Some(day(2026, 3, 10)));
        assert_eq!(parse_wire_date(Some("not-a-date")), None);
        assert_eq!(parse_wire_date(None), None);
    }
}
