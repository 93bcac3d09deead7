//! Dashboard View
//!
//! Landing page: stat cards, upcoming meetings, recent activity.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::datetime::{format_date_time, format_meeting_date, parse_timestamp};
use crate::models::{AuditLog, Meeting};
use crate::store::{use_app_store, AppStateStoreFields};

/// Next few meetings after `now`, soonest first
fn upcoming(meetings: &[Meeting], now: chrono::NaiveDateTime, limit: usize) -> Vec<Meeting> {
    let mut future: Vec<Meeting> = meetings
        .iter()
        .filter(|m| parse_timestamp(&m.meeting_time).map(|t| t > now).unwrap_or(false))
        .cloned()
        .collect();
    future.sort_by_key(|m| parse_timestamp(&m.meeting_time));
    future.truncate(limit);
    future
}

/// Dashboard page
#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (activity, set_activity) = signal(Vec::<AuditLog>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            if let Ok(logs) = api::recent_logs(5).await {
                set_activity.set(logs);
            }
        });
    });

    let upcoming_meetings = move || {
        let now = chrono::Local::now().naive_local();
        upcoming(&store.meetings().get(), now, 3)
    };

    let user_name = move || {
        ctx.current_user
            .get()
            .map(|u| u.name)
            .unwrap_or_else(|| "Researcher".to_string())
    };

    view! {
        <div class="dashboard">
            <div class="page-header">
                <h1>"Welcome, " {user_name} "!"</h1>
                <p class="dashboard-subtitle">"Here is what's happening in your lab today."</p>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-label">"Groups"</span>
                    <span class="stat-value">{move || store.groups().get().len()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Upcoming Meetings"</span>
                    <span class="stat-value">{move || upcoming_meetings().len()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Inventory Items"</span>
                    <span class="stat-value">{move || store.inventory().get().len()}</span>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>"Upcoming Meetings"</h2>
                    <button class="view-all" on:click=move |_| ctx.navigate(Route::Meetings)>
                        "View Calendar"
                    </button>
                </div>
                <Show
                    when=move || !upcoming_meetings().is_empty()
                    fallback=|| view! { <p class="empty-state">"No upcoming meetings scheduled."</p> }
                >
                    <div class="meeting-list-mini">
                        <For
                            each=upcoming_meetings
                            key=|m| m.id
                            children=move |meeting| {
                                view! {
                                    <div class="meeting-item-mini">
                                        <div class="meeting-info">
                                            <span class="meeting-title">{meeting.title.clone()}</span>
                                            <span class="meeting-time">
                                                {format_meeting_date(&meeting.meeting_time)}
                                            </span>
                                        </div>
                                        {meeting.group_name.clone().map(|g| view! {
                                            <span class="meeting-tag">{g}</span>
                                        })}
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>"Your Groups"</h2>
                    <button class="view-all" on:click=move |_| ctx.navigate(Route::Groups)>
                        "Manage"
                    </button>
                </div>
                <Show
                    when=move || !store.groups().get().is_empty()
                    fallback=|| view! { <p class="empty-state">"Not assigned to any groups."</p> }
                >
                    <div class="group-list-mini">
                        <For
                            each={move || store.groups().get().into_iter().take(5).collect::<Vec<_>>()}
                            key=|g| g.id
                            children=move |group| {
                                let id = group.id;
                                view! {
                                    <div
                                        class="group-item-mini row-link"
                                        on:click=move |_| ctx.navigate(Route::GroupDetail(id))
                                    >
                                        <span class="group-name">{group.name.clone()}</span>
                                        <span class="group-role">
                                            {group.lead_name.clone().unwrap_or_else(|| "Research Group".to_string())}
                                        </span>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <div class="card full-width">
                <div class="card-header">
                    <h2>"Recent Activity"</h2>
                </div>
                <Show
                    when=move || !activity.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No recent activity logged."</p> }
                >
                    <div class="activity-feed">
                        <For
                            each=move || activity.get()
                            key=|log| log.id
                            children=move |log| {
                                view! {
                                    <div class="activity-log-item">
                                        <div class="log-content">
                                            <p>
                                                <strong>
                                                    {log.user_name.clone().unwrap_or_else(|| "System".to_string())}
                                                </strong>
                                                " "
                                                {log.action.clone()}
                                            </p>
                                            {log.details.clone().map(|d| view! {
                                                <span class="log-details">{d}</span>
                                            })}
                                            <span class="log-time">{format_date_time(&log.created_at)}</span>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn meeting(id: u32, time: &str) -> Meeting {
        Meeting {
            id,
            title: format!("Meeting {}", id),
            description: None,
            meeting_time: time.to_string(),
            group_id: None,
            is_private: false,
            tags: None,
            summary: None,
            created_by: 1,
            created_at: "2026-01-01T00:00:00".to_string(),
            creator_name: None,
            group_name: None,
        }
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let now =
            NaiveDateTime::parse_from_str("2026-03-10T12:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let meetings = vec![
            meeting(1, "2026-03-09T10:00:00"), // past
            meeting(2, "2026-03-12T10:00:00"),
            meeting(3, "2026-03-11T10:00:00"),
            meeting(4, "2026-03-13T10:00:00"),
            meeting(5, "2026-03-14T10:00:00"),
        ];

        let next = upcoming(&meetings, now, 3);
        let ids: Vec<u32> = next.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
    }

    #[test]
    fn test_upcoming_skips_unparseable() {
        let now =
            NaiveDateTime::parse_from_str("2026-03-10T12:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let meetings = vec![meeting(1, "tbd")];
        assert!(upcoming(&meetings, now, 3).is_empty());
    }
}
