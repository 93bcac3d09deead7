//! Group Project View
//!
//! A group's shared project: markdown fields, task table, and timeline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::ProjectUpdateArgs;
use crate::components::{
    next_status, DeleteConfirmButton, GanttChart, GanttRow, MarkdownTextarea, TaskForm,
};
use crate::context::{AppContext, Route};
use crate::markdown::render_markdown;
use crate::models::{GroupProject, GroupTask, TaskCreate};

/// Project page for one group
#[component]
pub fn GroupProjectView(group_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (project, set_project) = signal::<Option<GroupProject>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);

    let (problem, set_problem) = signal(String::new());
    let (progress, set_progress) = signal(String::new());
    let (comments, set_comments) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::group_project(group_id).await {
                Ok(p) => {
                    set_problem.set(p.problem_statement.clone().unwrap_or_default());
                    set_progress.set(p.research_progress.clone().unwrap_or_default());
                    set_comments.set(p.comments.clone().unwrap_or_default());
                    set_project.set(Some(p));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load project".to_string()));
                }
            }
        });
    });

    let save_project = move |_| {
        let problem = problem.get();
        let progress = progress.get();
        let comments = comments.get();
        spawn_local(async move {
            let args = ProjectUpdateArgs {
                problem_statement: Some(&problem),
                research_progress: Some(&progress),
                github_link: None,
                manuscript_link: None,
                comments: Some(&comments),
            };
            match api::update_group_project(group_id, &args).await {
                Ok(_) => {
                    set_editing.set(false);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] Save failed: {}", e).into());
                    set_error.set(Some("Failed to save project".to_string()));
                }
            }
        });
    };

    let add_task = move |task| {
        spawn_local(async move {
            match api::create_group_task(group_id, &task).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] Add task failed: {}", e).into());
                    set_error.set(Some("Failed to add task".to_string()));
                }
            }
        });
    };

    let delete_task = move |task_id: u32| {
        spawn_local(async move {
            match api::delete_group_task(group_id, task_id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] Delete task failed: {}", e).into());
                    set_error.set(Some("Failed to delete task".to_string()));
                }
            }
        });
    };

    // Clicking the status badge advances the task to the next status
    let cycle_status = move |task: GroupTask| {
        let payload = TaskCreate {
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: task.start_date.clone(),
            end_date: task.end_date.clone(),
            status: Some(next_status(&task.status).to_string()),
        };
        spawn_local(async move {
            match api::update_group_task(group_id, task.id, &payload).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[PROJECT] Update task failed: {}", e).into());
                    set_error.set(Some("Failed to update task".to_string()));
                }
            }
        });
    };

    view! {
        <div class="project-page">
            <button
                class="btn btn-link"
                on:click=move |_| ctx.navigate(Route::GroupDetail(group_id))
            >
                "← Back to Group"
            </button>

            <div class="page-header">
                <h1>"Group Project"</h1>
                <Show when=move || !editing.get()>
                    <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                </Show>
                <Show when=move || editing.get()>
                    <button class="btn btn-primary" on:click=save_project>"Save"</button>
                </Show>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <div class="card">
                <h3>"Problem Statement"</h3>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div
                            class="markdown-content"
                            inner_html=move || render_markdown(&problem.get())
                        ></div>
                    }
                >
                    <MarkdownTextarea value=problem set_value=set_problem />
                </Show>
            </div>

            <div class="card">
                <h3>"Progress"</h3>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div
                            class="markdown-content"
                            inner_html=move || render_markdown(&progress.get())
                        ></div>
                    }
                >
                    <MarkdownTextarea value=progress set_value=set_progress />
                </Show>
            </div>

            <div class="card">
                <h3>"Tasks"</h3>
                {move || {
                    let tasks = project.get().map(|p| p.tasks).unwrap_or_default();
                    if tasks.is_empty() {
                        view! { <p class="text-muted">"No tasks added yet."</p> }.into_any()
                    } else {
                        let rows: Vec<GanttRow> = tasks.iter().map(GanttRow::from).collect();
                        view! {
                            <ul class="task-list">
                                {tasks
                                    .iter()
                                    .map(|task| {
                                        let task_id = task.id;
                                        let cycle_target = task.clone();
                                        view! {
                                            <li class="task-row">
                                                <span
                                                    class=format!("task-status task-{}", task.status)
                                                    on:click=move |_| cycle_status(cycle_target.clone())
                                                >
                                                    {task.status.replace('_', " ")}
                                                </span>
                                                <span class="task-title">{task.title.clone()}</span>
                                                <span class="task-dates">
                                                    {task.start_date.clone().unwrap_or_default()}
                                                    " → "
                                                    {task.end_date.clone().unwrap_or_default()}
                                                </span>
                                                <DeleteConfirmButton
                                                    button_class="btn btn-sm btn-danger"
                                                    label="×"
                                                    on_confirm=move |_| delete_task(task_id)
                                                />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <GanttChart tasks=rows />
                        }
                        .into_any()
                    }
                }}

                <TaskForm on_submit=add_task />
            </div>

            <div class="card">
                <h3>"Comments"</h3>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div
                            class="markdown-content"
                            inner_html=move || render_markdown(&comments.get())
                        ></div>
                    }
                >
                    <MarkdownTextarea
                        value=comments
                        set_value=set_comments
                        placeholder="Add comments (Markdown supported)..."
                    />
                </Show>
            </div>
        </div>
    }
}
