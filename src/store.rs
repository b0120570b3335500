//! Habit Collection Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The habit list
//! page owns one store per mount; cards commit server-confirmed changes
//! through the action helpers below instead of refetching the collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Habit;

/// Authoritative in-memory habit collection
#[derive(Clone, Debug, Default, Store)]
pub struct HabitsState {
    /// All habits of the signed-in user, in server order
    pub habits: Vec<Habit>,
}

/// Type alias for the store
pub type HabitStore = Store<HabitsState>;

/// Get the habit store from context
pub fn use_habit_store() -> HabitStore {
    expect_context::<HabitStore>()
}

/// Per-view fetch lifecycle
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

// ========================
// Reconciliation
// ========================
//
// The collection is never refetched after a child mutation. The server
// response to the mutating call is authoritative and replaces the one
// affected element; ordering and all other elements are untouched.

/// Replace the habit with the same id; unknown ids are a no-op
pub fn reconcile_update(habits: &mut Vec<Habit>, updated: Habit) {
    if let Some(existing) = habits.iter_mut().find(|h| h.id == updated.id) {
        *existing = updated;
    }
}

/// Remove the habit with the given id; unknown ids are a no-op
pub fn reconcile_delete(habits: &mut Vec<Habit>, id: u32) {
    habits.retain(|h| h.id != id);
}

// ========================
// Store Actions
// ========================

/// Commit a server-confirmed habit into the store by ID
pub fn store_update_habit(store: &HabitStore, updated: Habit) {
    let binding = store.habits();
    let mut habits = binding.write();
    reconcile_update(&mut habits, updated);
}

/// Remove a deleted habit from the store by ID
pub fn store_remove_habit(store: &HabitStore, id: u32) {
    let binding = store.habits();
    let mut habits = binding.write();
    reconcile_delete(&mut habits, id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn make_habit(id: u32, name: &str, is_completed: bool) -> Habit {
        Habit {
            id,
            name: name.to_string(),
            description: None,
            frequency: Frequency::Daily,
            reminder_time: None,
            is_completed,
        }
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut habits = vec![
            make_habit(1, "Read", false),
            make_habit(2, "Run", false),
            make_habit(3, "Meditate", true),
        ];

        reconcile_update(&mut habits, make_habit(2, "Run 5k", true));

        assert_eq!(habits.len(), 3);
        // Same position, new value, neighbors untouched
        assert_eq!(habits[0], make_habit(1, "Read", false));
        assert_eq!(habits[1].name, "Run 5k");
        assert!(habits[1].is_completed);
        assert_eq!(habits[2], make_habit(3, "Meditate", true));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut habits = vec![make_habit(1, "Read", false)];
        let before = habits.clone();

        reconcile_update(&mut habits, make_habit(42, "Ghost", false));

        assert_eq!(habits, before);
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut habits = vec![
            make_habit(1, "Read", false),
            make_habit(2, "Run", false),
            make_habit(3, "Meditate", true),
        ];

        reconcile_delete(&mut habits, 2);

        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].id, 1);
        assert_eq!(habits[1].id, 3);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut habits = vec![make_habit(1, "Read", false), make_habit(2, "Run", false)];
        let before = habits.clone();

        reconcile_delete(&mut habits, 99);

        assert_eq!(habits, before);
    }
}
