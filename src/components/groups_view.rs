//! Groups View
//!
//! Research-tree and flat-list views over the group hierarchy, with
//! admin-only create/edit/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, GroupFormModal, GroupFormTarget, GroupTreeView};
use crate::context::{AppContext, Route};
use crate::models::GroupNode;
use crate::store::{store_remove_group, use_app_store, AppStateStoreFields};
use crate::tree::{build_display_root, flatten};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Research,
    List,
}

/// Groups page: tree/list tabs plus the admin modal
#[component]
pub fn GroupsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (view_mode, set_view_mode) = signal(ViewMode::Research);
    let (nodes, set_nodes) = signal(Vec::<GroupNode>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<GroupFormTarget>>(None);

    // Fetch the tree fresh on mount and whenever a mutation triggers a reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::group_tree().await {
                Ok(tree) => {
                    web_sys::console::log_1(
                        &format!("[GROUPS] Loaded {} top-level nodes", tree.len()).into(),
                    );
                    set_nodes.set(tree);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUPS] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load groups".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let display_root = move || build_display_root(&nodes.get(), &ctx.config.get().lab_name);
    let flat_rows = move || flatten(&nodes.get());

    let delete_group = move |id: u32| {
        spawn_local(async move {
            match api::delete_group(id).await {
                Ok(()) => {
                    store_remove_group(&store, id);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[GROUPS] Delete failed: {}", e).into());
                    set_error.set(Some("Failed to delete group".to_string()));
                }
            }
        });
    };

    view! {
        <div class="groups-page">
            <div class="page-header">
                <h1>"Research Groups"</h1>
                <Show when=move || ctx.is_admin()>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "Create Group"
                    </button>
                </Show>
            </div>

            <div class="tabs">
                <button
                    class=move || if view_mode.get() == ViewMode::Research { "tab active" } else { "tab" }
                    on:click=move |_| set_view_mode.set(ViewMode::Research)
                >
                    "Research View"
                </button>
                <button
                    class=move || if view_mode.get() == ViewMode::List { "tab active" } else { "tab" }
                    on:click=move |_| set_view_mode.set(ViewMode::List)
                >
                    "List View"
                </button>
            </div>

            <Show when=move || loading.get()>
                <p>"Loading groups..."</p>
            </Show>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <Show when=move || !loading.get() && view_mode.get() == ViewMode::Research>
                <div class="group-tree-container">
                    {move || view! { <GroupTreeView root=display_root() /> }}
                </div>
            </Show>

            <Show when=move || !loading.get() && view_mode.get() == ViewMode::List>
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Members"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=flat_rows
                                key=|node| node.id
                                children=move |node| {
                                    let id = node.id;
                                    let lead_id = node.lead_id;
                                    let has_project = node.has_project;
                                    let title = node.name.clone();
                                    let description_text = node
                                        .description
                                        .clone()
                                        .unwrap_or_else(|| "-".to_string());
                                    let edit_target = GroupFormTarget {
                                        id,
                                        name: node.name.clone(),
                                        description: node.description.clone(),
                                        lead_id,
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <strong
                                                    class="row-link"
                                                    on:click=move |_| ctx.navigate(Route::GroupDetail(id))
                                                >
                                                    {title}
                                                </strong>
                                            </td>
                                            <td>{description_text}</td>
                                            <td>{node.member_count}</td>
                                            <td>
                                                <Show when=move || has_project>
                                                    <button
                                                        class="btn btn-sm"
                                                        on:click=move |_| ctx.navigate(Route::GroupProject(id))
                                                    >
                                                        "Project"
                                                    </button>
                                                </Show>
                                                <Show when=move || ctx.is_admin()>
                                                    {
                                                        let edit_target = edit_target.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn-sm"
                                                                on:click=move |_| {
                                                                    set_editing.set(Some(edit_target.clone()));
                                                                    set_show_form.set(true);
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <DeleteConfirmButton
                                                                button_class="btn btn-sm btn-danger"
                                                                label="Delete"
                                                                on_confirm=move |_| delete_group(id)
                                                            />
                                                        }
                                                    }
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <GroupFormModal
                    editing=editing.get_untracked()
                    parent_options=flatten(&nodes.get_untracked())
                    users=store.users().get_untracked()
                    on_saved=move |_| {
                        set_show_form.set(false);
                        ctx.reload();
                    }
                    on_cancel=move |_| set_show_form.set(false)
                />
            </Show>
        </div>
    }
}
