//! Navigation Tab Bar
//!
//! Top-level navigation between views; admin-only tabs hidden for members.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

const TABS: &[(&str, Route)] = &[
    ("Dashboard", Route::Dashboard),
    ("Groups", Route::Groups),
    ("Meetings", Route::Meetings),
    ("Inventory", Route::Inventory),
    ("My Research", Route::Research(None)),
];

/// Does this tab own the current route? Detail routes highlight their
/// parent tab.
fn tab_active(tab: Route, current: Route) -> bool {
    match (tab, current) {
        (Route::Groups, Route::GroupDetail(_))
        | (Route::Groups, Route::GroupProject(_))
        | (Route::Research(None), Route::Research(_)) => true,
        _ => tab == current,
    }
}

/// Navigation bar with the configured lab name and logout
#[component]
pub fn NavTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-tab-bar">
            <h2 class="nav-brand">{move || ctx.config.get().lab_name}</h2>

            <div class="nav-tabs">
                {TABS
                    .iter()
                    .map(|(label, route)| {
                        let route = *route;
                        let is_active = move || tab_active(route, ctx.route.get());
                        view! {
                            <button
                                class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                                on:click=move |_| ctx.navigate(route)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}

                <Show when=move || ctx.is_admin()>
                    <button
                        class=move || {
                            if ctx.route.get() == Route::Admin { "nav-tab active" } else { "nav-tab" }
                        }
                        on:click=move |_| ctx.navigate(Route::Admin)
                    >
                        "Admin"
                    </button>
                </Show>
            </div>

            <div class="nav-session">
                <span class="nav-user">
                    {move || ctx.current_user.get().map(|u| u.name).unwrap_or_default()}
                </span>
                <button class="btn btn-sm" on:click=move |_| ctx.sign_out()>
                    "Log out"
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes_highlight_parent_tab() {
        assert!(tab_active(Route::Groups, Route::Groups));
        assert!(tab_active(Route::Groups, Route::GroupDetail(3)));
        assert!(tab_active(Route::Groups, Route::GroupProject(3)));
        assert!(tab_active(Route::Research(None), Route::Research(Some(7))));
        assert!(!tab_active(Route::Meetings, Route::GroupDetail(3)));
    }
}
