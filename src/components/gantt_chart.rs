//! Gantt Chart Component
//!
//! Timeline view over plan/project tasks using the fixed 21-day window.

use leptos::prelude::*;

use crate::gantt::{bar_layout, parse_wire_date, BarLayout, GanttWindow};
use crate::models::{GroupTask, ResearchTask};

/// One timeline row, decoupled from the concrete task type
#[derive(Debug, Clone, PartialEq)]
pub struct GanttRow {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
}

impl From<&GroupTask> for GanttRow {
    fn from(task: &GroupTask) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: task.start_date.clone(),
            end_date: task.end_date.clone(),
            status: task.status.clone(),
        }
    }
}

impl From<&ResearchTask> for GanttRow {
    fn from(task: &ResearchTask) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            start_date: task.start_date.clone(),
            end_date: task.end_date.clone(),
            status: task.status.clone(),
        }
    }
}

fn tooltip(row: &GanttRow) -> String {
    let mut text = format!("{}\nStatus: {}", row.title, row.status.replace('_', " "));
    if let Some(description) = &row.description {
        text.push_str(&format!("\nDescription: {}", description));
    }
    if let Some(start) = &row.start_date {
        text.push_str(&format!("\nStart: {}", start));
    }
    if let Some(end) = &row.end_date {
        text.push_str(&format!("\nDue: {}", end));
    }
    text
}

/// Fixed-window timeline: one row per task, today marker overlaid
#[component]
pub fn GanttChart(tasks: Vec<GanttRow>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let window = GanttWindow::around(today);

    view! {
        <div class="gantt-chart">
            <h4>"Timeline View"</h4>
            <div class="gantt-container">
                <div class="gantt-timeline">
                    {tasks
                        .iter()
                        .map(|row| {
                            let layout = bar_layout(
                                parse_wire_date(row.start_date.as_deref()),
                                parse_wire_date(row.end_date.as_deref()),
                                &window,
                            );
                            let title_text = tooltip(row);
                            let label = row.title.clone();
                            let bar = match layout {
                                BarLayout::Positioned { left_pct, width_pct } => {
                                    let width = width_pct.max(crate::gantt::MIN_BAR_WIDTH_PCT);
                                    let bar_class =
                                        format!("gantt-bar gantt-bar-pill gantt-bar-{}", row.status);
                                    view! {
                                        <div
                                            class=bar_class
                                            style=format!("left: {}%; width: {}%;", left_pct, width)
                                            title=title_text
                                        >
                                            <span class="gantt-bar-label">{label}</span>
                                        </div>
                                    }
                                    .into_any()
                                }
                                BarLayout::Unscheduled => view! {
                                    <div class="gantt-no-dates" title=title_text>
                                        {format!("{} - No dates set", label)}
                                    </div>
                                }
                                .into_any(),
                            };
                            view! {
                                <div class="gantt-row-full">
                                    <div class="gantt-bar-container">{bar}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {window.today_offset_pct(today).map(|pct| view! {
                    <div class="gantt-today-marker" style=format!("left: {}%;", pct)>
                        <div class="gantt-today-line"></div>
                        <div class="gantt-today-label">"Today"</div>
                    </div>
                })}
            </div>
        </div>
    }
}
