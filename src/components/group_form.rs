//! Group Form Modal
//!
//! Create/edit modal for research groups with parent and lead selectors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::GroupCreateArgs;
use crate::models::{GroupNode, User};
use crate::tree::VIRTUAL_ROOT_ID;

/// Group being edited, captured when the modal opens
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFormTarget {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub lead_id: Option<u32>,
}

/// Modal form for creating or editing a group
#[component]
pub fn GroupFormModal(
    editing: Option<GroupFormTarget>,
    /// Flattened candidates for the parent selector
    parent_options: Vec<GroupNode>,
    users: Vec<User>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|g| g.id);
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(editing.as_ref().map(|g| g.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        editing
            .as_ref()
            .and_then(|g| g.description.clone())
            .unwrap_or_default(),
    );
    let (parent_id, set_parent_id) = signal::<Option<u32>>(None);
    let (lead_id, set_lead_id) = signal(editing.as_ref().and_then(|g| g.lead_id));
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.is_empty() {
            return;
        }
        let description = description.get();
        let parent = parent_id.get();
        let lead = lead_id.get();

        spawn_local(async move {
            let args = GroupCreateArgs {
                name: &name,
                description: (!description.is_empty()).then_some(description.as_str()),
                parent_id: parent,
                lead_id: lead,
            };
            let result = match editing_id {
                Some(id) => api::update_group(id, &args).await.map(|_| ()),
                None => api::create_group(&args).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUPS] Save failed: {}", e).into());
                    set_error.set(Some(e));
                }
            }
        });
    };

    // The virtual root is display-only; it is never a valid parent
    let parent_options: Vec<GroupNode> = parent_options
        .into_iter()
        .filter(|g| g.id != VIRTUAL_ROOT_ID && Some(g.id) != editing_id)
        .collect();

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Research Group" } else { "Create Research Group" }}</h2>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
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

                    <Show when=move || !is_edit>
                        <div class="form-group">
                            <label>"Parent Group (optional)"</label>
                            <select on:change=move |ev| {
                                set_parent_id.set(event_target_value(&ev).parse::<u32>().ok());
                            }>
                                <option value="">"None (Top-level group)"</option>
                                {parent_options
                                    .iter()
                                    .map(|group| {
                                        view! {
                                            <option value=group.id.to_string()>{group.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </Show>

                    <div class="form-group">
                        <label>"Group Lead (optional)"</label>
                        <select on:change=move |ev| {
                            set_lead_id.set(event_target_value(&ev).parse::<u32>().ok());
                        }>
                            <option value="">"None"</option>
                            {users
                                .iter()
                                .map(|user| {
                                    let selected = Some(user.id) == lead_id.get_untracked();
                                    view! {
                                        <option value=user.id.to_string() selected=selected>
                                            {user.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {if is_edit { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
