//! Markdown Textarea Component
//!
//! Textarea with an Edit / Preview tab toggle.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::markdown::render_markdown;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Edit,
    Preview,
}

/// Markdown editor with preview toggle
#[component]
pub fn MarkdownTextarea(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let (mode, set_mode) = signal(Mode::Edit);
    let rows = rows.unwrap_or(6);
    let placeholder = if placeholder.is_empty() {
        "Enter text (Markdown supported)...".to_string()
    } else {
        placeholder
    };

    let rendered_html = move || render_markdown(&value.get());

    view! {
        <div class="markdown-textarea">
            <div class="markdown-tabs">
                <button
                    type="button"
                    class=move || if mode.get() == Mode::Edit { "markdown-tab active" } else { "markdown-tab" }
                    on:click=move |_| set_mode.set(Mode::Edit)
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class=move || if mode.get() == Mode::Preview { "markdown-tab active" } else { "markdown-tab" }
                    on:click=move |_| set_mode.set(Mode::Preview)
                >
                    "Preview"
                </button>
            </div>

            <Show when=move || mode.get() == Mode::Edit>
                <textarea
                    class="form-control markdown-editor"
                    rows=rows
                    placeholder=placeholder.clone()
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_value.set(textarea.value());
                    }
                ></textarea>
            </Show>

            <Show when=move || mode.get() == Mode::Preview>
                <div class="markdown-preview" inner_html=rendered_html></div>
            </Show>
        </div>
    }
}
