//! Task Form Component
//!
//! Inline form for adding a plan/project task.

use leptos::prelude::*;

use crate::models::TaskCreate;

pub const TASK_STATUSES: &[&str] = &["not_started", "in_progress", "completed", "blocked"];

/// Next status in display order, wrapping; unknown statuses reset to the first
pub fn next_status(current: &str) -> &'static str {
    let idx = TASK_STATUSES.iter().position(|s| *s == current);
    match idx {
        Some(i) => TASK_STATUSES[(i + 1) % TASK_STATUSES.len()],
        None => TASK_STATUSES[0],
    }
}

/// Inline add-task form shared by research plans and group projects
#[component]
pub fn TaskForm(#[prop(into)] on_submit: Callback<TaskCreate>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (status, set_status) = signal(String::from("not_started"));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task_title = title.get();
        if task_title.is_empty() {
            return;
        }
        let task = TaskCreate {
            title: task_title,
            description: None,
            start_date: {
                let d = start_date.get();
                (!d.is_empty()).then_some(d)
            },
            end_date: {
                let d = end_date.get();
                (!d.is_empty()).then_some(d)
            },
            status: Some(status.get()),
        };
        on_submit.run(task);
        set_title.set(String::new());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_status.set("not_started".to_string());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || start_date.get()
                on:input=move |ev| set_start_date.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || end_date.get()
                on:input=move |ev| set_end_date.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                {TASK_STATUSES
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
            <button type="submit" class="btn btn-sm btn-primary">"Add Task"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_status_cycles() {
        assert_eq!(next_status("not_started"), "in_progress");
        assert_eq!(next_status("in_progress"), "completed");
        assert_eq!(next_status("blocked"), "not_started");
        assert_eq!(next_status("bogus"), "not_started");
    }
}
