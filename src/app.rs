//! LabDesk Frontend App
//!
//! Root component: context and store setup, startup loads, view switching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    AdminView, DashboardView, GroupDetailView, GroupProjectView, GroupsView, InventoryView,
    LoginView, MeetingsView, NavTabBar, ResearchView,
};
use crate::context::{AppContext, Route};
use crate::models::{AppConfig, User};
use crate::store::{AppState, AppStateStoreFields, AppStore};
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
    // State
    let current_user = signal::<Option<User>>(None);
    let config = signal(AppConfig::default());
    let route = signal(Route::Dashboard);
    let reload_trigger = signal(0u32);
    let (session_loading, set_session_loading) = signal(true);

    let store: AppStore = Store::new(AppState::default());

    // Provide context to all children
    let ctx = AppContext::new(current_user, config, route, reload_trigger);
    provide_context(ctx);
    provide_context(store);

    // Load config once at startup; available pre-login for the header
    Effect::new(move |_| {
        spawn_local(async move {
            match api::app_config().await {
                Ok(loaded) => ctx.apply_config(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Config load failed: {}", e).into());
                }
            }
        });
    });

    // Resume the session if a token is stored
    Effect::new(move |_| {
        spawn_local(async move {
            if api::stored_token().is_some() {
                match api::current_user().await {
                    Ok(user) => {
                        web_sys::console::log_1(
                            &format!("[APP] Session resumed for {}", user.email).into(),
                        );
                        ctx.sign_in(user);
                    }
                    Err(_) => api::clear_token(),
                }
            }
            set_session_loading.set(false);
        });
    });

    // Shared lists refresh on login and on every reload trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.current_user.get().is_none() {
            return;
        }
        spawn_local(async move {
            if let Ok(groups) = api::list_groups().await {
                store.groups().set(groups);
            }
            if let Ok(users) = api::list_users().await {
                store.users().set(users);
            }
            if let Ok(meetings) = api::list_meetings().await {
                store.meetings().set(meetings);
            }
            if let Ok(inventory) = api::list_inventory().await {
                store.inventory().set(inventory);
            }
        });
    });

    let logged_in = move || ctx.current_user.get().is_some();

    view! {
        <div class="app-layout">
            <Show when=move || !session_loading.get()>
                <Show
                    when=logged_in
                    fallback=|| view! { <LoginView /> }
                >
                    <NavTabBar />
                    <main class="main-content">
                        {move || match ctx.route.get() {
                            Route::Dashboard => view! { <DashboardView /> }.into_any(),
                            Route::Groups => view! { <GroupsView /> }.into_any(),
                            Route::GroupDetail(id) => {
                                view! { <GroupDetailView group_id=id /> }.into_any()
                            }
                            Route::GroupProject(id) => {
                                view! { <GroupProjectView group_id=id /> }.into_any()
                            }
                            Route::Meetings => view! { <MeetingsView /> }.into_any(),
                            Route::Inventory => view! { <InventoryView /> }.into_any(),
                            Route::Research(user_id) => {
                                view! { <ResearchView user_id=user_id /> }.into_any()
                            }
                            Route::Admin => view! { <AdminView /> }.into_any(),
                        }}
                    </main>
                </Show>
            </Show>
        </div>
    }
}
