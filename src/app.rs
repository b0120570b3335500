//! Habit Tracker Frontend App
//!
//! Root component: session provider, router, and auth gating.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::context::{use_session, SessionContext};
use crate::pages::{CreateHabitPage, EditHabitPage, HomePage, LoginPage, RegisterPage};

#[component]
pub fn App() -> impl IntoView {
    // Seed the session from persisted storage and share it app-wide
    let session = SessionContext::load();
    provide_context(session);

    view! {
        <Router>
            <div class="app">
                <Routes fallback=|| view! { <RootRedirect /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route
                        path=path!("/habits")
                        view=|| view! { <RequireAuth><HomePage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/create-habit")
                        view=|| view! { <RequireAuth><CreateHabitPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/edit-habit/:id")
                        view=|| view! { <RequireAuth><EditHabitPage /></RequireAuth> }
                    />
                </Routes>
            </div>
        </Router>
    }
}

/// Gate for protected views: without a session token nothing mounts and
/// the user is sent to the login page
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Unknown paths land on the habit list or the login page
#[component]
fn RootRedirect() -> impl IntoView {
    let session = use_session();
    let target = if session.is_authenticated() {
        "/habits"
    } else {
        "/login"
    };
    view! { <Redirect path=target /> }
}
