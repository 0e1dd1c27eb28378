//! Loading Component
//!
//! Spinner and inline error states for pages that fetch on mount.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline error shown in place of content that failed to load
#[component]
pub fn LoadError(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg p-4">
            {message}
        </div>
    }
}
