//! Navbar Component
//!
//! Header for the habit list: brand link, new-habit link, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <a href="/habits" class="navbar-brand">"Habit Tracker"</a>
            <div class="navbar-actions">
                <a href="/create-habit" class="navbar-link">"New habit"</a>
                <button class="logout-btn" on:click=on_logout>"Log out"</button>
            </div>
        </nav>
    }
}
