//! Research View
//!
//! A member's research plan: markdown fields, task list, and timeline.
//! The session user's own plan is editable; other members' plans are
//! read-only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::PlanUpdateArgs;
use crate::components::{
    next_status, DeleteConfirmButton, GanttChart, GanttRow, MarkdownTextarea, TaskForm,
};
use crate::context::AppContext;
use crate::markdown::render_markdown;
use crate::models::{ResearchPlan, ResearchTask, TaskCreate};

/// Research plan page; `user_id` of `None` means the session user's own plan
#[component]
pub fn ResearchView(user_id: Option<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_own = move || match user_id {
        None => true,
        Some(id) => ctx.current_user.get().map(|u| u.id) == Some(id),
    };

    let (plan, set_plan) = signal::<Option<ResearchPlan>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);

    // Edit buffers
    let (problem, set_problem) = signal(String::new());
    let (progress, set_progress) = signal(String::new());
    let (comments, set_comments) = signal(String::new());
    let (github_link, set_github_link) = signal(String::new());
    let (manuscript_link, set_manuscript_link) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            let result = match user_id {
                Some(id) => api::research_plan(id).await,
                None => api::my_plan().await,
            };
            match result {
                Ok(p) => {
                    set_problem.set(p.problem_statement.clone().unwrap_or_default());
                    set_progress.set(p.research_progress.clone().unwrap_or_default());
                    set_comments.set(p.comments.clone().unwrap_or_default());
                    set_github_link.set(p.github_link.clone().unwrap_or_default());
                    set_manuscript_link.set(p.manuscript_link.clone().unwrap_or_default());
                    set_plan.set(Some(p));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RESEARCH] Load failed: {}", e).into());
                    set_error.set(Some("Failed to load research plan".to_string()));
                }
            }
        });
    });

    let save_plan = move |_| {
        let problem = problem.get();
        let progress = progress.get();
        let comments = comments.get();
        let github = github_link.get();
        let manuscript = manuscript_link.get();
        spawn_local(async move {
            let args = PlanUpdateArgs {
                problem_statement: Some(&problem),
                research_progress: Some(&progress),
                github_link: Some(&github),
                manuscript_link: Some(&manuscript),
                comments: Some(&comments),
            };
            match api::update_my_plan(&args).await {
                Ok(_) => {
                    set_editing.set(false);
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RESEARCH] Save failed: {}", e).into());
                    set_error.set(Some("Failed to save plan".to_string()));
                }
            }
        });
    };

    let add_task = move |task| {
        spawn_local(async move {
            match api::create_research_task(&task).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[RESEARCH] Add task failed: {}", e).into());
                    set_error.set(Some("Failed to add task".to_string()));
                }
            }
        });
    };

    let delete_task = move |task_id: u32| {
        spawn_local(async move {
            match api::delete_research_task(task_id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[RESEARCH] Delete task failed: {}", e).into());
                    set_error.set(Some("Failed to delete task".to_string()));
                }
            }
        });
    };

    // Clicking the status badge advances the task to the next status
    let cycle_status = move |task: ResearchTask| {
        let payload = TaskCreate {
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: task.start_date.clone(),
            end_date: task.end_date.clone(),
            status: Some(next_status(&task.status).to_string()),
        };
        spawn_local(async move {
            match api::update_research_task(task.id, &payload).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[RESEARCH] Update task failed: {}", e).into());
                    set_error.set(Some("Failed to update task".to_string()));
                }
            }
        });
    };

    view! {
        <div class="research-page">
            <div class="page-header">
                <h1>{move || if is_own() { "My Research" } else { "Research Plan" }}</h1>
                <Show when=move || is_own() && !editing.get()>
                    <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                </Show>
                <Show when=move || is_own() && editing.get()>
                    <button class="btn btn-primary" on:click=save_plan>"Save"</button>
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
                <h3>"Links"</h3>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <ul class="link-list">
                            {move || {
                                let github = github_link.get();
                                (!github.is_empty()).then(|| view! {
                                    <li><a href=github.clone() target="_blank">"Repository"</a></li>
                                })
                            }}
                            {move || {
                                let manuscript = manuscript_link.get();
                                (!manuscript.is_empty()).then(|| view! {
                                    <li><a href=manuscript.clone() target="_blank">"Manuscript"</a></li>
                                })
                            }}
                        </ul>
                    }
                >
                    <div class="form-group">
                        <label>"Repository link"</label>
                        <input
                            type="url"
                            prop:value=move || github_link.get()
                            on:input=move |ev| set_github_link.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Manuscript link"</label>
                        <input
                            type="url"
                            prop:value=move || manuscript_link.get()
                            on:input=move |ev| set_manuscript_link.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
            </div>

            <div class="card">
                <h3>"Tasks"</h3>
                {move || {
                    let tasks = plan.get().map(|p| p.tasks).unwrap_or_default();
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
                                        let own = is_own();
                                        let cycle_target = task.clone();
                                        view! {
                                            <li class="task-row">
                                                <span
                                                    class=format!("task-status task-{}", task.status)
                                                    on:click=move |_| {
                                                        if own {
                                                            cycle_status(cycle_target.clone());
                                                        }
                                                    }
                                                >
                                                    {task.status.replace('_', " ")}
                                                </span>
                                                <span class="task-title">{task.title.clone()}</span>
                                                <span class="task-dates">
                                                    {task.start_date.clone().unwrap_or_default()}
                                                    " → "
                                                    {task.end_date.clone().unwrap_or_default()}
                                                </span>
                                                <Show when=move || own>
                                                    <DeleteConfirmButton
                                                        button_class="btn btn-sm btn-danger"
                                                        label="×"
                                                        on_confirm=move |_| delete_task(task_id)
                                                    />
                                                </Show>
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

                <Show when=is_own>
                    <TaskForm on_submit=add_task />
                </Show>
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
