//! Meetings View
//!
//! Meeting list and month calendar with RSVP and a create modal.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, MeetingCalendar};
use crate::context::AppContext;
use crate::datetime::format_meeting_date;
use crate::markdown::render_markdown_inline;
use crate::models::MeetingCreate;
use crate::store::{store_remove_meeting, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    List,
    Calendar,
}

/// Meetings page
#[component]
pub fn MeetingsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (view_mode, set_view_mode) = signal(ViewMode::List);
    let (show_create, set_show_create) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (rsvp_notice, set_rsvp_notice) = signal::<Option<String>>(None);

    // Form state
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (meeting_time, set_meeting_time) = signal(String::new());
    let (group_id, set_group_id) = signal::<Option<u32>>(None);
    let (is_private, set_is_private) = signal(false);

    // Refresh meetings whenever a mutation triggers a reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_meetings().await {
                Ok(list) => store.meetings().set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[MEETINGS] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load meetings".to_string()));
                }
            }
        });
    });

    // The lab-level group is the default target when one matches the
    // configured lab name; else the first group
    let default_group_id = move || {
        let groups = store.groups().get();
        let lab_name = ctx.config.get().lab_name;
        groups
            .iter()
            .find(|g| g.name == lab_name)
            .or_else(|| groups.first())
            .map(|g| g.id)
    };

    let open_create = move |date: Option<NaiveDate>| {
        set_title.set(String::new());
        set_description.set(String::new());
        set_meeting_time.set(
            date.map(|d| d.format("%Y-%m-%dT10:00").to_string())
                .unwrap_or_default(),
        );
        set_group_id.set(default_group_id());
        set_is_private.set(false);
        set_show_create.set(true);
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = MeetingCreate {
            title: title.get(),
            description: {
                let d = description.get();
                (!d.is_empty()).then_some(d)
            },
            meeting_time: meeting_time.get(),
            group_id: group_id.get(),
            is_private: is_private.get(),
        };
        if payload.title.is_empty() || payload.meeting_time.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create_meeting(&payload).await {
                Ok(_) => {
                    set_show_create.set(false);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MEETINGS] Create failed: {}", e).into());
                    set_error.set(Some("Failed to create meeting".to_string()));
                }
            }
        });
    };

    let rsvp = move |meeting_id: u32, response: &'static str| {
        spawn_local(async move {
            match api::respond_to_meeting(meeting_id, response).await {
                Ok(()) => set_rsvp_notice.set(Some(format!("RSVP recorded: {}", response))),
                Err(e) => {
                    web_sys::console::error_1(&format!("[MEETINGS] RSVP failed: {}", e).into());
                    set_error.set(Some("Failed to record RSVP".to_string()));
                }
            }
        });
    };

    let delete_meeting = move |meeting_id: u32| {
        spawn_local(async move {
            match api::delete_meeting(meeting_id).await {
                // Fine-grained removal; no need to refetch the whole list
                Ok(()) => store_remove_meeting(&store, meeting_id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[MEETINGS] Delete failed: {}", e).into());
                    set_error.set(Some("Failed to delete meeting".to_string()));
                }
            }
        });
    };

    view! {
        <div class="meetings-page">
            <div class="page-header">
                <h1>"Meetings"</h1>
                <button class="btn btn-primary" on:click=move |_| open_create(None)>
                    "Schedule Meeting"
                </button>
            </div>

            <div class="tabs">
                <button
                    class=move || if view_mode.get() == ViewMode::List { "tab active" } else { "tab" }
                    on:click=move |_| set_view_mode.set(ViewMode::List)
                >
                    "List"
                </button>
                <button
                    class=move || if view_mode.get() == ViewMode::Calendar { "tab active" } else { "tab" }
                    on:click=move |_| set_view_mode.set(ViewMode::Calendar)
                >
                    "Calendar"
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}
            {move || rsvp_notice.get().map(|notice| view! {
                <div class="alert alert-info">{notice}</div>
            })}

            <Show when=move || view_mode.get() == ViewMode::List>
                <Show
                    when=move || !store.meetings().get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No meetings scheduled."</p> }
                >
                    <div class="meeting-list">
                        <For
                            each=move || store.meetings().get()
                            key=|m| m.id
                            children=move |meeting| {
                                let id = meeting.id;
                                let created_by = meeting.created_by;
                                let can_delete = move || {
                                    ctx.is_admin()
                                        || ctx.current_user.get().map(|u| u.id) == Some(created_by)
                                };
                                view! {
                                    <div class="meeting-card">
                                        <div class="meeting-info">
                                            <span class="meeting-title">{meeting.title.clone()}</span>
                                            <span class="meeting-time">
                                                {format_meeting_date(&meeting.meeting_time)}
                                            </span>
                                            {meeting.description.clone().map(|d| view! {
                                                <span
                                                    class="meeting-description"
                                                    inner_html=render_markdown_inline(&d)
                                                ></span>
                                            })}
                                            {meeting.group_name.clone().map(|g| view! {
                                                <span class="meeting-tag">{g}</span>
                                            })}
                                        </div>
                                        <div class="meeting-actions">
                                            <button class="btn btn-sm" on:click=move |_| rsvp(id, "join")>
                                                "Join"
                                            </button>
                                            <button
                                                class="btn btn-sm"
                                                on:click=move |_| rsvp(id, "wont_join")
                                            >
                                                "Can't join"
                                            </button>
                                            <Show when=can_delete>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-sm btn-danger"
                                                    label="Delete"
                                                    on_confirm=move |_| delete_meeting(id)
                                                />
                                            </Show>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || view_mode.get() == ViewMode::Calendar>
                <MeetingCalendar
                    meetings=Signal::derive(move || store.meetings().get())
                    on_day_click=move |date| open_create(Some(date))
                    on_meeting_click=move |_id: u32| {}
                />
            </Show>

            <Show when=move || show_create.get()>
                <div class="modal-overlay" on:click=move |_| set_show_create.set(false)>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Schedule Meeting"</h2>
                        <form on:submit=on_create>
                            <div class="form-group">
                                <label>"Title"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || title.get()
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Description"</label>
                                <textarea
                                    rows=3
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="form-group">
                                <label>"When"</label>
                                <input
                                    type="datetime-local"
                                    required
                                    prop:value=move || meeting_time.get()
                                    on:input=move |ev| set_meeting_time.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Group"</label>
                                <select on:change=move |ev| {
                                    set_group_id.set(event_target_value(&ev).parse::<u32>().ok());
                                }>
                                    <option value="">"None"</option>
                                    <For
                                        each=move || store.groups().get()
                                        key=|g| g.id
                                        children=move |group| {
                                            let selected = move || group_id.get() == Some(group.id);
                                            view! {
                                                <option value=group.id.to_string() selected=selected>
                                                    {group.name.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </div>
                            <div class="form-group checkbox-group">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || is_private.get()
                                        on:change=move |ev| set_is_private.set(event_target_checked(&ev))
                                    />
                                    "Private meeting"
                                </label>
                            </div>
                            <div class="modal-actions">
                                <button type="button" class="btn" on:click=move |_| set_show_create.set(false)>
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">"Create"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
