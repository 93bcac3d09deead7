//! Inventory View
//!
//! Equipment table with create/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{InventoryCreate, InventoryItem};
use crate::store::{
    store_remove_inventory_item, store_update_inventory_item, use_app_store, AppStateStoreFields,
};

const STATUS_OPTIONS: &[&str] = &["available", "in_use", "maintenance", "retired"];

/// Inventory page
#[component]
pub fn InventoryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Form state
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1i32);
    let (location, set_location) = signal(String::new());
    let (status, set_status) = signal(String::from("available"));
    let (notes, set_notes) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_inventory().await {
                Ok(items) => store.inventory().set(items),
                Err(e) => {
                    web_sys::console::error_1(&format!("[INVENTORY] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load inventory".to_string()));
                }
            }
        });
    });

    let open_create = move |_| {
        set_editing_id.set(None);
        set_name.set(String::new());
        set_description.set(String::new());
        set_quantity.set(1);
        set_location.set(String::new());
        set_status.set("available".to_string());
        set_notes.set(String::new());
        set_show_form.set(true);
    };

    let open_edit = move |item: InventoryItem| {
        set_editing_id.set(Some(item.id));
        set_name.set(item.name);
        set_description.set(item.description.unwrap_or_default());
        set_quantity.set(item.quantity);
        set_location.set(item.location.unwrap_or_default());
        set_status.set(item.status);
        set_notes.set(item.notes.unwrap_or_default());
        set_show_form.set(true);
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get();
        if item_name.is_empty() {
            return;
        }
        let payload = InventoryCreate {
            name: item_name,
            description: {
                let d = description.get();
                (!d.is_empty()).then_some(d)
            },
            quantity: quantity.get(),
            location: {
                let l = location.get();
                (!l.is_empty()).then_some(l)
            },
            status: Some(status.get()),
            notes: {
                let n = notes.get();
                (!n.is_empty()).then_some(n)
            },
        };
        let editing = editing_id.get();

        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_inventory_item(id, &payload).await.map(|updated| {
                    // Fine-grained update: swap the row in place
                    store_update_inventory_item(&store, updated);
                }),
                None => api::create_inventory_item(&payload).await.map(|_| ctx.reload()),
            };
            match result {
                Ok(()) => set_show_form.set(false),
                Err(e) => {
                    web_sys::console::error_1(&format!("[INVENTORY] Save failed: {}", e).into());
                    set_error.set(Some("Failed to save item".to_string()));
                }
            }
        });
    };

    let delete_item = move |id: u32| {
        spawn_local(async move {
            match api::delete_inventory_item(id).await {
                Ok(()) => store_remove_inventory_item(&store, id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[INVENTORY] Delete failed: {}", e).into());
                    set_error.set(Some("Failed to delete item".to_string()));
                }
            }
        });
    };

    view! {
        <div class="inventory-page">
            <div class="page-header">
                <h1>"Inventory"</h1>
                <button class="btn btn-primary" on:click=open_create>"Add Item"</button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <Show
                when=move || !store.inventory().get().is_empty()
                fallback=|| view! { <p class="empty-state">"No inventory recorded."</p> }
            >
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Quantity"</th>
                                <th>"Location"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.inventory().get()
                                key=|item| (item.id, item.quantity, item.status.clone())
                                children=move |item| {
                                    let id = item.id;
                                    let status_class = format!("status-badge status-{}", item.status);
                                    let edit_item = item.clone();
                                    view! {
                                        <tr>
                                            <td>{item.name.clone()}</td>
                                            <td>{item.quantity}</td>
                                            <td>{item.location.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <span class=status_class>
                                                    {item.status.replace('_', " ")}
                                                </span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-sm"
                                                    on:click=move |_| open_edit(edit_item.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-sm btn-danger"
                                                    label="Delete"
                                                    on_confirm=move |_| delete_item(id)
                                                />
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
                <div class="modal-overlay" on:click=move |_| set_show_form.set(false)>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing_id.get().is_some() { "Edit Item" } else { "Add Item" }}</h2>
                        <form on:submit=on_save>
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
                                    rows=2
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="form-group">
                                <label>"Quantity"</label>
                                <input
                                    type="number"
                                    min=0
                                    prop:value=move || quantity.get().to_string()
                                    on:input=move |ev| {
                                        set_quantity.set(event_target_value(&ev).parse().unwrap_or(0));
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label>"Location"</label>
                                <input
                                    type="text"
                                    prop:value=move || location.get()
                                    on:input=move |ev| set_location.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Status"</label>
                                <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                                    {STATUS_OPTIONS
                                        .iter()
                                        .map(|option| {
                                            let value = *option;
                                            let selected = move || status.get() == value;
                                            view! {
                                                <option value=value selected=selected>
                                                    {value.replace('_', " ")}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>"Notes"</label>
                                <textarea
                                    rows=2
                                    prop:value=move || notes.get()
                                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="modal-actions">
                                <button type="button" class="btn" on:click=move |_| set_show_form.set(false)>
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">"Save"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
