//! Home Page
//!
//! The authenticated habit list. Fetches the collection once per mount,
//! then keeps it current purely through store reconciliation - no refetch
//! after a card mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::components::{HabitCard, Navbar};
use crate::context::use_session;
use crate::store::{HabitsState, HabitsStateStoreFields, LoadState};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    // The collection lives exactly as long as this view
    let store = Store::new(HabitsState::default());
    provide_context(store);

    let (load_state, set_load_state) = signal(LoadState::Idle);

    // Disposed with the view; late responses detect teardown through it
    let alive = StoredValue::new(());

    Effect::new(move |_| {
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::list_habits().await;
            if alive.try_get_value().is_none() {
                return;
            }
            match result {
                Ok(habits) => {
                    *store.habits().write() = habits;
                    set_load_state.set(LoadState::Loaded);
                }
                Err(ApiError::Unauthorized) => {
                    // The session expired; dropping it swaps this gated
                    // view for the login redirect
                    session.logout();
                }
                Err(err) => {
                    log::error!("loading habits failed: {}", err);
                    set_load_state.set(LoadState::Failed("Could not load your habits.".to_string()));
                }
            }
        });
    });

    let progress_summary = move || {
        let habits = store.habits().get();
        let done = habits.iter().filter(|h| h.is_completed).count();
        format!("Today's progress: {}/{} habits completed", done, habits.len())
    };

    view! {
        <div class="page">
            <Navbar />
            <main class="habit-list-page">
                <div class="habit-list-header">
                    <h2>"My Habits"</h2>
                    <Show when=move || !store.habits().get().is_empty()>
                        <p class="progress-summary">{progress_summary}</p>
                    </Show>
                </div>
                {move || match load_state.get() {
                    LoadState::Idle | LoadState::Loading => {
                        view! { <p class="loading">"Loading habits..."</p> }.into_any()
                    }
                    LoadState::Failed(msg) => {
                        view! { <p class="error-message">{msg}</p> }.into_any()
                    }
                    LoadState::Loaded => {
                        view! {
                            <Show
                                when=move || !store.habits().get().is_empty()
                                fallback=|| {
                                    view! {
                                        <div class="empty-state">
                                            <h3>"No habits yet"</h3>
                                            <p>
                                                "Start by creating your first habit to build a better routine."
                                            </p>
                                            <a href="/create-habit" class="create-link">
                                                "Create my first habit"
                                            </a>
                                        </div>
                                    }
                                }
                            >
                                <div class="habit-grid">
                                    <For
                                        each=move || store.habits().get()
                                        key=|habit| habit.id
                                        children=move |habit| view! { <HabitCard habit=habit /> }
                                    />
                                </div>
                            </Show>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
