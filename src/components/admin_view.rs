//! Admin View
//!
//! Lab settings form and config backup management.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::datetime::format_date_time;
use crate::models::{AppConfig, BackupInfo};

/// Admin settings page
#[component]
pub fn AdminView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (lab_name, set_lab_name) = signal(ctx.config.get_untracked().lab_name);
    let (timezone, set_timezone) = signal(ctx.config.get_untracked().timezone);
    let (backups, set_backups) = signal(Vec::<BackupInfo>::new());
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_backups = move || {
        spawn_local(async move {
            match api::list_backups().await {
                Ok(list) => set_backups.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ADMIN] Backup list failed: {}", e).into());
                    set_error.set(Some("Failed to load backups".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load_backups();
    });

    let save_config = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = AppConfig {
            lab_name: lab_name.get(),
            timezone: timezone.get(),
        };
        spawn_local(async move {
            match api::update_config(&config).await {
                Ok(()) => {
                    ctx.apply_config(config);
                    set_notice.set(Some("Settings saved".to_string()));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ADMIN] Config save failed: {}", e).into());
                    set_error.set(Some("Failed to save settings".to_string()));
                }
            }
        });
    };

    let create_backup = move |_| {
        spawn_local(async move {
            match api::create_backup().await {
                Ok(()) => {
                    set_notice.set(Some("Backup created".to_string()));
                    load_backups();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ADMIN] Backup failed: {}", e).into());
                    set_error.set(Some("Failed to create backup".to_string()));
                }
            }
        });
    };

    let restore = move |filename: String| {
        spawn_local(async move {
            match api::restore_backup(&filename).await {
                Ok(()) => {
                    // Server-side config changed under us; reload it there,
                    // then pull it fresh
                    let _ = api::reload_config().await;
                    if let Ok(config) = api::app_config().await {
                        set_lab_name.set(config.lab_name.clone());
                        set_timezone.set(config.timezone.clone());
                        ctx.apply_config(config);
                    }
                    set_notice.set(Some(format!("Restored {}", filename)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ADMIN] Restore failed: {}", e).into());
                    set_error.set(Some("Failed to restore backup".to_string()));
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <div class="page-header">
                <h1>"Admin Settings"</h1>
            </div>

            {move || notice.get().map(|n| view! {
                <div class="alert alert-info">{n}</div>
            })}
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <div class="card">
                <h3>"Lab Settings"</h3>
                <form on:submit=save_config>
                    <div class="form-group">
                        <label>"Lab name"</label>
                        // Also decides which top-level group anchors the tree view
                        <input
                            type="text"
                            required
                            prop:value=move || lab_name.get()
                            on:input=move |ev| set_lab_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Timezone"</label>
                        <input
                            type="text"
                            placeholder="e.g. Europe/Berlin"
                            prop:value=move || timezone.get()
                            on:input=move |ev| set_timezone.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">"Save Settings"</button>
                </form>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Config Backups"</h3>
                    <button class="btn" on:click=create_backup>"Create Backup"</button>
                </div>
                <Show
                    when=move || !backups.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No backups yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"File"</th>
                                <th>"Created"</th>
                                <th>"Size"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || backups.get()
                                key=|b| b.filename.clone()
                                children=move |backup| {
                                    let filename = backup.filename.clone();
                                    view! {
                                        <tr>
                                            <td>{backup.filename.clone()}</td>
                                            <td>{format_date_time(&backup.created_at)}</td>
                                            <td>{format!("{} B", backup.size)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-sm"
                                                    on:click=move |_| restore(filename.clone())
                                                >
                                                    "Restore"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
