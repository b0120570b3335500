//! Login Page
//!
//! Exchanges credentials for a session token and enters the app.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Disposed with the view; late responses detect teardown through it
    let alive = StoredValue::new(());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        set_error.set(String::new());
        let user = username.get();
        let pass = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&user, &pass).await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(token) => {
                    session.login(token);
                    navigate("/habits", Default::default());
                    return;
                }
                Err(ApiError::Network) => {
                    set_error.set("An unexpected error occurred.".to_string());
                }
                // Wrong password and server-side rejection read the same here
                Err(_) => set_error.set("Invalid credentials.".to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>
            <form class="auth-form" on:submit=on_submit>
                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <p class="error-message">{msg}</p> })
                }}
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
            <p class="auth-switch">"No account yet? " <a href="/register">"Register"</a></p>
        </div>
    }
}
