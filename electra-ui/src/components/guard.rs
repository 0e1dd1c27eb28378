//! Route Guard
//!
//! Wraps every page: the shared navigation guard decides whether the page
//! renders or the browser is sent elsewhere.

use electra::router::{resolve, Navigation, Route as Screen};
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Render `children` only when the session may open `screen`
#[component]
pub fn Guarded(screen: Screen, children: ChildrenFn) -> impl IntoView {
    let session = use_global_state().session;

    move || match resolve(&session.get(), screen.path()) {
        Navigation::Render(_) => children().into_view(),
        Navigation::Redirect(to) => view! { <Redirect path=to.path() /> }.into_view(),
    }
}

/// Catch-all for paths outside the route table: legacy aliases and unknown
/// paths are redirected
#[component]
pub fn Fallback() -> impl IntoView {
    let session = use_global_state().session;
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match resolve(&session.get(), &path) {
            Navigation::Redirect(to) => view! { <Redirect path=to.path() /> }.into_view(),
            Navigation::Render(_) => view! { <NotFound /> }.into_view(),
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Screen::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
