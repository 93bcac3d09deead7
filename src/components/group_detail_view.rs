//! Group Detail View
//!
//! Single group with its member list and admin membership management.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Route};
use crate::datetime::format_date;
use crate::models::{Group, Membership};
use crate::store::{use_app_store, AppStateStoreFields};

/// Detail page for one group
#[component]
pub fn GroupDetailView(group_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (group, set_group) = signal::<Option<Group>>(None);
    let (members, set_members) = signal(Vec::<Membership>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (new_member_id, set_new_member_id) = signal::<Option<u32>>(None);

    // Fresh fetch on mount and after every membership mutation. In-flight
    // responses are not cancelled when the selected group changes.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_group(group_id).await {
                Ok(g) => set_group.set(Some(g)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUP] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load group".to_string()));
                }
            }
            if let Ok(list) = api::group_members(group_id).await {
                set_members.set(list);
            }
        });
    });

    let add_member = move |_| {
        let Some(user_id) = new_member_id.get() else {
            return;
        };
        spawn_local(async move {
            match api::add_member(group_id, user_id).await {
                Ok(()) => {
                    set_new_member_id.set(None);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUP] Add member failed: {}", e).into());
                    set_error.set(Some("Failed to add member".to_string()));
                }
            }
        });
    };

    let remove_member = move |user_id: u32| {
        spawn_local(async move {
            match api::remove_member(group_id, user_id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUP] Remove member failed: {}", e).into());
                    set_error.set(Some("Failed to remove member".to_string()));
                }
            }
        });
    };

    view! {
        <div class="group-detail-page">
            <button class="btn btn-link" on:click=move |_| ctx.navigate(Route::Groups)>
                "← Back to Groups"
            </button>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            {move || group.get().map(|g| {
                let id = g.id;
                let has_project = g.has_project;
                view! {
                    <div class="page-header">
                        <h1>{g.name.clone()}</h1>
                        <Show when=move || has_project>
                            <button
                                class="btn"
                                on:click=move |_| ctx.navigate(Route::GroupProject(id))
                            >
                                "Project"
                            </button>
                        </Show>
                    </div>
                    <p class="group-description">
                        {g.description.clone().unwrap_or_else(|| "No description.".to_string())}
                    </p>
                    {g.lead_name.clone().map(|lead| view! {
                        <p class="group-lead">"Lead: " {lead}</p>
                    })}
                }
            })}

            <div class="card">
                <h3>"Members"</h3>
                <Show
                    when=move || !members.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No members yet."</p> }
                >
                    <ul class="member-list">
                        <For
                            each=move || members.get()
                            key=|m| m.id
                            children=move |member| {
                                let user_id = member.user_id;
                                let display = member
                                    .user_name
                                    .clone()
                                    .unwrap_or_else(|| format!("User #{}", user_id));
                                view! {
                                    <li class="member-row">
                                        <span
                                            class="row-link"
                                            on:click=move |_| {
                                                ctx.navigate(Route::Research(Some(user_id)));
                                            }
                                        >
                                            {display}
                                        </span>
                                        <span class="member-email">
                                            {member.user_email.clone().unwrap_or_default()}
                                        </span>
                                        <span class="member-joined" title="Joined">
                                            {format_date(&member.joined_at)}
                                        </span>
                                        <Show when=move || ctx.is_admin()>
                                            <DeleteConfirmButton
                                                button_class="btn btn-sm btn-danger"
                                                label="Remove"
                                                on_confirm=move |_| remove_member(user_id)
                                            />
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>

                <Show when=move || ctx.is_admin()>
                    <div class="add-member-row">
                        <select on:change=move |ev| {
                            set_new_member_id.set(event_target_value(&ev).parse::<u32>().ok());
                        }>
                            <option value="">"Select member..."</option>
                            <For
                                each=move || store.users().get()
                                key=|u| u.id
                                children=move |user| {
                                    view! {
                                        <option value=user.id.to_string()>{user.name.clone()}</option>
                                    }
                                }
                            />
                        </select>
                        <button class="btn btn-primary" on:click=add_member>
                            "Add Member"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
