//! Create Habit Page
//!
//! Form for a new habit; one create call, then back to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::components::FrequencySelect;
use crate::context::use_session;
use crate::models::{Frequency, HabitPayload};

#[component]
pub fn CreateHabitPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (frequency, set_frequency) = signal(Frequency::Daily);
    let (reminder_time, set_reminder_time) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Disposed with the view; late responses detect teardown through it
    let alive = StoredValue::new(());

    let cancel_navigate = navigate.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        // Empty reminder/description go out as absent fields, not ""
        let payload = HabitPayload::from_form(
            &name.get(),
            &description.get(),
            frequency.get(),
            &reminder_time.get(),
        );
        if payload.name.is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(String::new());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::create_habit(&payload).await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(_) => {
                    navigate("/habits", Default::default());
                    return;
                }
                Err(ApiError::Unauthorized) => {
                    // The session expired; dropping it swaps this gated
                    // view for the login redirect
                    session.logout();
                    return;
                }
                Err(ApiError::Validation(msg)) => set_error.set(msg),
                Err(err) => {
                    log::error!("creating habit failed: {}", err);
                    set_error.set("An unexpected error occurred. Please try again.".to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="habit-form-page">
            <h2>"Create a new habit"</h2>
            <p class="form-subtitle">"Build a better version of yourself, one habit at a time."</p>
            <form class="habit-form" on:submit=on_submit>
                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <p class="error-message">{msg}</p> })
                }}

                <div class="form-group">
                    <label for="habit-name">"Name"</label>
                    <input
                        type="text"
                        id="habit-name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="habit-description">"Description (optional)"</label>
                    <textarea
                        id="habit-description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="habit-frequency">"Frequency"</label>
                        <FrequencySelect value=frequency set_value=set_frequency />
                    </div>
                    <div class="form-group">
                        <label for="habit-reminder">"Reminder"</label>
                        <input
                            type="time"
                            id="habit-reminder"
                            prop:value=move || reminder_time.get()
                            on:input=move |ev| set_reminder_time.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-button"
                        on:click=move |_| cancel_navigate("/habits", Default::default())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="save-button" disabled=move || submitting.get()>
                        "Save habit"
                    </button>
                </div>
            </form>
        </div>
    }
}
