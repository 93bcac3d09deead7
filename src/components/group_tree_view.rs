//! Group Tree View Component
//!
//! Recursive rendering of the group hierarchy: node header, member pills,
//! then nested subgroups.

use leptos::prelude::*;

use crate::context::{AppContext, Route};
use crate::models::GroupNode;

/// Tree view anchored on the display root from `tree::build_display_root`
#[component]
pub fn GroupTreeView(root: GroupNode) -> impl IntoView {
    view! {
        <div class="group-tree-wrapper">
            <GroupTreeNodeView node=root is_root=true />
        </div>
    }
}

/// A single node card; recurses into children.
///
/// Returns `AnyView` so the self-referential call site type-erases.
#[component]
pub fn GroupTreeNodeView(node: GroupNode, is_root: bool) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = node.id;
    let lead_id = node.lead_id;
    let name = node.name.clone();
    let has_children = !node.children.is_empty();
    let has_members = !node.members.is_empty();
    let members = node.members.clone();
    let children = node.children.clone();

    // The root has no backend resource to navigate to
    let title_class = if is_root { "group-title root" } else { "group-title" };

    view! {
        <div class="group-card-node">
            <div class="group-node-header">
                <h3
                    class=title_class
                    on:click=move |_| {
                        if !is_root {
                            ctx.navigate(Route::GroupDetail(id));
                        }
                    }
                >
                    {name}
                </h3>
            </div>

            // Members as non-recursive leaf pills
            <Show when=move || has_members>
                <div class="members-container">
                    {members
                        .iter()
                        .map(|member| {
                            let is_lead = Some(member.user_id) == lead_id;
                            let user_id = member.user_id;
                            let user_name = member.user_name.clone();
                            let pill_class = if is_lead { "member-pill is-lead" } else { "member-pill" };
                            view! {
                                <div
                                    class=pill_class
                                    title=member.user_email.clone()
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.navigate(Route::Research(Some(user_id)));
                                    }
                                >
                                    <span class="member-name">{user_name}</span>
                                    <Show when=move || is_lead>
                                        <span class="member-role">"group lead"</span>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            // Nested subgroups; the root suppresses the section label
            <Show when=move || has_children>
                <div class="subgroups-container">
                    <Show when=move || !is_root>
                        <h4 class="subgroups-label">"Subgroups"</h4>
                    </Show>
                    <div class="subgroups-list">
                        {children
                            .iter()
                            .map(|child| {
                                let child = child.clone();
                                view! { <GroupTreeNodeView node=child is_root=false /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
