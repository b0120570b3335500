//! Edit Habit Page
//!
//! Pre-populates the form from a fetch-by-id keyed on the route param,
//! submits a full-record update, then navigates back after a short
//! confirmation pause. A missing habit redirects to the list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{self, ApiError};
use crate::components::FrequencySelect;
use crate::context::use_session;
use crate::models::{Frequency, HabitPayload};
use crate::store::LoadState;

/// How long the success note stays up before navigating back
const CONFIRMATION_DELAY_MS: u32 = 1_500;

#[component]
pub fn EditHabitPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();

    let habit_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    };

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (frequency, set_frequency) = signal(Frequency::Daily);
    let (reminder_time, set_reminder_time) = signal(String::new());
    let (load_state, set_load_state) = signal(LoadState::Idle);
    let (error, set_error) = signal(String::new());
    let (success, set_success) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Bumped on every (re)fetch and disposed with the view; a fetch whose
    // generation no longer matches has been superseded and its result is
    // dropped.
    let generation = StoredValue::new(0u64);

    let fetch_navigate = navigate.clone();
    Effect::new(move |_| {
        let navigate = fetch_navigate.clone();
        let Some(id) = habit_id() else {
            // An unparseable id behaves like a missing habit
            navigate("/habits", Default::default());
            return;
        };
        let this_generation = generation.with_value(|g| g + 1);
        generation.set_value(this_generation);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_habit(id).await;
            if generation.try_get_value() != Some(this_generation) {
                return;
            }
            match result {
                Ok(habit) => {
                    set_name.set(habit.name);
                    set_description.set(habit.description.unwrap_or_default());
                    set_frequency.set(habit.frequency);
                    set_reminder_time.set(habit.reminder_time.unwrap_or_default());
                    set_load_state.set(LoadState::Loaded);
                }
                Err(ApiError::NotFound) => navigate("/habits", Default::default()),
                Err(ApiError::Unauthorized) => {
                    // The session expired; dropping it swaps this gated
                    // view for the login redirect
                    session.logout();
                }
                Err(err) => {
                    log::error!("loading habit {} failed: {}", id, err);
                    set_load_state.set(LoadState::Failed("Could not load the habit.".to_string()));
                }
            }
        });
    });

    // Navigation back to the list is driven by this signal so the submit
    // handler itself never has to hold the navigator
    let (saved, set_saved) = signal(false);
    let done_navigate = navigate.clone();
    Effect::new(move |_| {
        if saved.get() {
            done_navigate("/habits", Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(id) = habit_id() else {
            return;
        };
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
        set_success.set(String::new());
        spawn_local(async move {
            let result = api::update_habit(id, &payload).await;
            if generation.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(_) => {
                    set_success.set("Habit updated.".to_string());
                    TimeoutFuture::new(CONFIRMATION_DELAY_MS).await;
                    if generation.try_get_value().is_none() {
                        return;
                    }
                    // Navigating tears this view down; nothing left to reset
                    set_saved.set(true);
                    return;
                }
                Err(ApiError::Unauthorized) => {
                    session.logout();
                    return;
                }
                Err(ApiError::Validation(msg)) => set_error.set(msg),
                Err(err) => {
                    log::error!("updating habit {} failed: {}", id, err);
                    set_error.set("An unexpected error occurred. Please try again.".to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="habit-form-page">
            <h2>"Edit habit"</h2>
            {move || match load_state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <p class="loading">"Loading habit..."</p> }.into_any()
                }
                LoadState::Failed(msg) => view! { <p class="error-message">{msg}</p> }.into_any(),
                LoadState::Loaded => {
                    view! {
                        <form class="habit-form" on:submit=on_submit.clone()>
                            {move || {
                                let msg = error.get();
                                (!msg.is_empty())
                                    .then(|| view! { <p class="error-message">{msg}</p> })
                            }}
                            {move || {
                                let msg = success.get();
                                (!msg.is_empty())
                                    .then(|| view! { <p class="success-message">{msg}</p> })
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
                                        on:input=move |ev| {
                                            set_reminder_time.set(event_target_value(&ev))
                                        }
                                    />
                                </div>
                            </div>

                            <div class="form-actions">
                                <a href="/habits" class="cancel-button">
                                    "Cancel"
                                </a>
                                <button
                                    type="submit"
                                    class="save-button"
                                    disabled=move || submitting.get()
                                >
                                    "Save changes"
                                </button>
                            </div>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
