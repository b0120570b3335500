//! Habit Card Component
//!
//! One habit in the list: toggle completion, edit, delete. Mutations go
//! to the server first; only the server-confirmed result is committed to
//! the habit store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::context::use_session;
use crate::models::Habit;
use crate::store::{store_remove_habit, store_update_habit, use_habit_store};

use super::DeleteConfirmModal;

/// A single habit card
#[component]
pub fn HabitCard(habit: Habit) -> impl IntoView {
    let session = use_session();
    let store = use_habit_store();
    let navigate = use_navigate();

    let id = habit.id;
    // Mirror of the server-side completion flag; overwritten by responses,
    // never flipped locally.
    let (is_completed, set_is_completed) = signal(habit.is_completed);
    let (toggling, set_toggling) = signal(false);
    let (confirming_delete, set_confirming_delete) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    // Disposed with the card; late responses detect teardown through it
    let alive = StoredValue::new(());

    let edit_navigate = navigate.clone();
    let on_edit = move |_| {
        edit_navigate(&format!("/edit-habit/{}", id), Default::default());
    };

    let toggle_habit = habit.clone();
    let on_toggle = move |_| {
        // A second click while a toggle is outstanding is ignored
        if toggling.get() {
            return;
        }
        set_toggling.set(true);
        set_action_error.set(None);
        let habit = toggle_habit.clone();
        spawn_local(async move {
            let result = api::toggle_complete(id).await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(confirmed) => {
                    set_is_completed.set(confirmed.is_completed);
                    store_update_habit(
                        &store,
                        Habit {
                            is_completed: confirmed.is_completed,
                            ..habit
                        },
                    );
                }
                Err(ApiError::Unauthorized) => {
                    // The session expired; dropping it swaps the gated
                    // subtree (this card included) for the login redirect
                    session.logout();
                    return;
                }
                Err(err) => {
                    log::error!("toggling habit {} failed: {}", id, err);
                    set_action_error.set(Some("Could not update the habit. Try again.".to_string()));
                }
            }
            set_toggling.set(false);
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        set_action_error.set(None);
        spawn_local(async move {
            let result = api::delete_habit(id).await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(()) => {
                    // Removing the entry unmounts this card, modal included
                    store_remove_habit(&store, id);
                    return;
                }
                Err(ApiError::Unauthorized) => {
                    session.logout();
                    return;
                }
                Err(err) => {
                    // Modal stays open so the delete can be retried
                    log::error!("deleting habit {} failed: {}", id, err);
                    set_action_error.set(Some("Could not delete the habit. Try again.".to_string()));
                }
            }
            set_deleting.set(false);
        });
    });
    let on_delete_cancel = Callback::new(move |_: ()| set_confirming_delete.set(false));

    let name = habit.name.clone();
    // The server serializes a blank description as "", not null
    let description = habit.description.clone().filter(|text| !text.is_empty());
    let reminder_time = habit.reminder_time.clone();
    let frequency = habit.frequency;

    view! {
        <div class="habit-card">
            <div class="habit-card-body">
                <h3 class="habit-name">{name.clone()}</h3>
                {description.map(|text| view! { <p class="habit-description">{text}</p> })}
                <p class="habit-frequency">"Frequency: " {frequency.as_str()}</p>
                {reminder_time.map(|time| view! { <p class="habit-reminder">"Reminder: " {time}</p> })}
            </div>
            <div class="habit-card-actions">
                <button class="edit-btn" title="Edit habit" on:click=on_edit>
                    "Edit"
                </button>
                <button
                    class=move || {
                        if is_completed.get() { "toggle-btn completed" } else { "toggle-btn" }
                    }
                    disabled=move || toggling.get()
                    title="Toggle completion"
                    on:click=on_toggle
                >
                    {move || if is_completed.get() { "Completed" } else { "Mark complete" }}
                </button>
                <button
                    class="delete-btn"
                    title="Delete habit"
                    on:click=move |_| set_confirming_delete.set(true)
                >
                    "×"
                </button>
            </div>
            <div class="habit-card-status">
                <span>"Today"</span>
                <span class=move || {
                    if is_completed.get() { "status done" } else { "status pending" }
                }>{move || if is_completed.get() { "Completed" } else { "Pending" }}</span>
            </div>
            {move || action_error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
            <DeleteConfirmModal
                title=format!("Delete \"{}\"?", name)
                open=confirming_delete
                busy=deleting
                on_confirm=on_delete
                on_cancel=on_delete_cancel
            />
        </div>
    }
}
