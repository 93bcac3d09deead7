//! Meeting Calendar Component
//!
//! Month grid with per-day meeting entries.

use chrono::{Datelike, Duration, NaiveDate};
use leptos::prelude::*;

use crate::models::Meeting;

const WEEKDAY_LABELS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 is always valid")
}

/// Shift to the first day of the previous/next month
pub fn shift_month(date: NaiveDate, forward: bool) -> NaiveDate {
    let start = month_start(date);
    if forward {
        // Day 28 + 4 always lands in the next month
        month_start(start + Duration::days(31))
    } else {
        month_start(start - Duration::days(1))
    }
}

/// Cells for the month view: leading `None` blanks so day 1 falls on its
/// weekday column (weeks start on Sunday), then one cell per day.
pub fn month_grid(month: NaiveDate) -> Vec<Option<u32>> {
    let start = month_start(month);
    let next = shift_month(start, true);
    let days_in_month = (next - start).num_days() as u32;
    let leading = start.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<u32>> = vec![None; leading];
    cells.extend((1..=days_in_month).map(Some));
    cells
}

/// Meetings whose `meeting_time` falls on the given day
pub fn meetings_on(meetings: &[Meeting], date: NaiveDate) -> Vec<Meeting> {
    let prefix = date.format("%Y-%m-%d").to_string();
    meetings
        .iter()
        .filter(|m| m.meeting_time.starts_with(&prefix))
        .cloned()
        .collect()
}

/// Month grid of meetings with prev/today/next navigation
#[component]
pub fn MeetingCalendar(
    meetings: Signal<Vec<Meeting>>,
    #[prop(into)] on_day_click: Callback<NaiveDate>,
    #[prop(into)] on_meeting_click: Callback<u32>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let (month, set_month) = signal(month_start(today));

    let header = move || month.get().format("%B %Y").to_string();

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="btn btn-sm" on:click=move |_| {
                    set_month.update(|m| *m = shift_month(*m, false));
                }>
                    "‹"
                </button>
                <h3>{header}</h3>
                <button class="btn btn-sm" on:click=move |_| {
                    set_month.update(|m| *m = shift_month(*m, true));
                }>
                    "›"
                </button>
            </div>

            <div class="calendar-grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="calendar-weekday">{*label}</div> })
                    .collect_view()}

                <For
                    each={move || month_grid(month.get()).into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(idx, _)| *idx
                    children=move |(_, cell)| {
                        match cell {
                            None => view! { <div class="calendar-cell empty"></div> }.into_any(),
                            Some(day) => {
                                let date = move || {
                                    month.get().with_day(day).expect("day within month")
                                };
                                let is_today = move || date() == today;
                                let day_meetings = move || meetings_on(&meetings.get(), date());
                                view! {
                                    <div
                                        class=move || {
                                            if is_today() { "calendar-cell today" } else { "calendar-cell" }
                                        }
                                        on:click=move |_| on_day_click.run(date())
                                    >
                                        <span class="calendar-day">{day}</span>
                                        <For
                                            each=day_meetings
                                            key=|m| m.id
                                            children=move |meeting| {
                                                let id = meeting.id;
                                                view! {
                                                    <div
                                                        class="calendar-meeting"
                                                        title=meeting.title.clone()
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            on_meeting_click.run(id);
                                                        }
                                                    >
                                                        {meeting.title.clone()}
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_leading_blanks() {
        // March 2026 starts on a Sunday: no blanks, 31 days
        let cells = month_grid(day(2026, 3, 1));
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0], Some(1));

        // May 2026 starts on a Friday: five blanks first
        let cells = month_grid(day(2026, 5, 1));
        assert_eq!(&cells[..6], &[None, None, None, None, None, Some(1)]);
        assert_eq!(cells.len(), 5 + 31);
    }

    #[test]
    fn test_month_grid_leap_february() {
        let cells = month_grid(day(2028, 2, 1));
        let days: Vec<_> = cells.iter().filter(|c| c.is_some()).collect();
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn test_shift_month_across_year() {
        assert_eq!(shift_month(day(2026, 12, 15), true), day(2027, 1, 1));
        assert_eq!(shift_month(day(2026, 1, 15), false), day(2025, 12, 1));
    }

    #[test]
    fn test_meetings_on_matches_date_prefix() {
        let meeting = Meeting {
            id: 1,
            title: "Standup".to_string(),
            description: None,
            meeting_time: "2026-03-10T09:30:00".to_string(),
            group_id: None,
            is_private: false,
            tags: None,
            summary: None,
            created_by: 1,
            created_at: "2026-03-01T00:00:00".to_string(),
            creator_name: None,
            group_name: None,
        };
        let other = Meeting {
            id: 2,
            meeting_time: "2026-03-11T09:30:00".to_string(),
            ..meeting.clone()
        };

        let found = meetings_on(&[meeting, other], day(2026, 3, 10));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
