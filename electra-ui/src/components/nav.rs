//! Navigation Component
//!
//! Header with the links the signed-in role may follow.

use electra::router::Route as Screen;
use electra::session::Role;
use electra::views::{ADMIN_TILES, VOTER_TILES};
use leptos::*;
use leptos_router::*;

use crate::state::{use_global_state, LocalStore};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let session = state.session;
    let navigate = use_navigate();

    let logout = move |_| {
        let route = match electra::views::logout(&mut LocalStore::new()) {
            Ok(route) => route,
            Err(e) => {
                state.report(&e);
                Screen::Landing
            }
        };
        state.sign_out();
        navigate(route.path(), Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Screen::Dashboard.path() class="flex items-center space-x-3">
                        <span class="text-2xl">"🗳"</span>
                        <span class="text-xl font-bold text-white">"Electra"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {move || {
                            let session = session.get();
                            let tiles: &[_] = match session.role {
                                Some(Role::Admin) if session.authenticated => &ADMIN_TILES,
                                Some(Role::Voter) if session.authenticated => &VOTER_TILES,
                                _ => &[],
                            };
                            tiles
                                .iter()
                                .map(|tile| view! { <NavLink href=tile.route.path() label=tile.title /> })
                                .collect_view()
                        }}

                        {
                            let logout = logout.clone();
                            move || {
                                if session.get().authenticated {
                                    let logout = logout.clone();
                                    view! {
                                        <button
                                            on:click=logout
                                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                                        >
                                            "Logout"
                                        </button>
                                    }
                                    .into_view()
                                } else {
                                    view! {
                                        <NavLink href=Screen::Login.path() label="Login" />
                                        <NavLink href=Screen::Signup.path() label="Sign Up" />
                                    }
                                    .into_view()
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
