//! Register Page
//!
//! Creates an account. Password equality is checked locally before any
//! network call; success lands on the login page without auto-signing-in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};

/// Local check run before the register call goes out
fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Disposed with the view; late responses detect teardown through it
    let alive = StoredValue::new(());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let user = username.get();
        let pass = password.get();
        if !passwords_match(&pass, &confirm_password.get()) {
            set_error.set("Passwords do not match.".to_string());
            return;
        }
        set_submitting.set(true);
        set_error.set(String::new());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&user, &pass).await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(()) => {
                    navigate("/login", Default::default());
                    return;
                }
                Err(ApiError::Validation(msg)) => set_error.set(msg),
                Err(err) => {
                    log::error!("registration failed: {}", err);
                    set_error.set("An unexpected error occurred.".to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>
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
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
            <p class="auth-switch">"Already registered? " <a href="/login">"Login"</a></p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_passwords_fail_locally() {
        assert!(!passwords_match("a", "b"));
        assert!(!passwords_match("secret", ""));
    }

    #[test]
    fn test_matching_passwords_pass() {
        assert!(passwords_match("secret", "secret"));
        assert!(passwords_match("", ""));
    }
}
