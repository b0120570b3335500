//! Delete Confirm Modal Component
//!
//! Two-phase confirmation gate for destructive actions: nothing is deleted
//! until the user confirms explicitly. The caller keeps it open after a
//! failed delete so the action stays retryable.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `title` - Question shown to the user (e.g. the habit being deleted)
/// * `open` - Whether the modal is visible
/// * `busy` - Disables both actions while a request is in flight
/// * `on_confirm` - Callback run when the user confirms
/// * `on_cancel` - Callback run when the user backs out
#[component]
pub fn DeleteConfirmModal(
    #[prop(into)] title: String,
    open: ReadSignal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <p class="modal-title">{title.clone()}</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            "Delete"
                        </button>
                        <button
                            class="cancel-btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
