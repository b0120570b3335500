//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_modal;
mod frequency_select;
mod habit_card;
mod navbar;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use frequency_select::{FrequencySelect, FREQUENCIES};
pub use habit_card::HabitCard;
pub use navbar::Navbar;
