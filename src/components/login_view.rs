//! Login View
//!
//! Email/password form; stores the bearer token and loads the session user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;

/// Login screen shown while no session user is present
#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }
        set_busy.set(true);

        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    api::store_token(&token.access_token);
                    match api::current_user().await {
                        Ok(user) => {
                            web_sys::console::log_1(
                                &format!("[AUTH] Signed in as {}", user.email).into(),
                            );
                            ctx.sign_in(user);
                        }
                        Err(e) => {
                            // Token did not survive the round trip; drop it
                            api::clear_token();
                            web_sys::console::error_1(
                                &format!("[AUTH] Session load failed: {}", e).into(),
                            );
                            set_error.set(Some("Login failed".to_string()));
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[AUTH] Login failed: {}", e).into());
                    set_error.set(Some("Invalid email or password".to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || ctx.config.get().lab_name}</h1>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
