//! UI Components
//!
//! Reusable Leptos components and views.

mod admin_view;
mod dashboard_view;
mod delete_confirm_button;
mod gantt_chart;
mod group_detail_view;
mod group_form;
mod group_project_view;
mod group_tree_view;
mod groups_view;
mod inventory_view;
mod login_view;
mod markdown_textarea;
mod meeting_calendar;
mod meetings_view;
mod nav_tab_bar;
mod research_view;
mod task_form;

pub use admin_view::AdminView;
pub use dashboard_view::DashboardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use gantt_chart::{GanttChart, GanttRow};
pub use group_detail_view::GroupDetailView;
pub use group_form::{GroupFormModal, GroupFormTarget};
pub use group_project_view::GroupProjectView;
pub use group_tree_view::GroupTreeView;
pub use groups_view::GroupsView;
pub use inventory_view::InventoryView;
pub use login_view::LoginView;
pub use markdown_textarea::MarkdownTextarea;
pub use meeting_calendar::MeetingCalendar;
pub use meetings_view::MeetingsView;
pub use nav_tab_bar::NavTabBar;
pub use research_view::ResearchView;
pub use task_form::{next_status, TaskForm};
