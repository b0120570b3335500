//! Frequency Selector Component
//!
//! Reusable habit frequency dropdown.

use leptos::prelude::*;

use crate::models::Frequency;

/// Frequency options in display order
pub const FREQUENCIES: &[Frequency] = &[Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

/// Frequency dropdown for habit forms
#[component]
pub fn FrequencySelect(
    value: ReadSignal<Frequency>,
    set_value: WriteSignal<Frequency>,
) -> impl IntoView {
    view! {
        <select
            id="habit-frequency"
            on:change=move |ev| set_value.set(Frequency::from_str(&event_target_value(&ev)))
        >
            {FREQUENCIES
                .iter()
                .map(|&freq| {
                    view! {
                        <option value=freq.as_str() selected=move || value.get() == freq>
                            {freq.as_str()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
