//! Dashboard Pages
//!
//! Tile grids for both roles; the voter dashboard also shows recent
//! notifications and where their candidacy stands.

use electra::display::or_dash;
use electra::views::{self, CandidacySummary, Tile, VoterDashboard as Board, ADMIN_TILES, VOTER_TILES, VOTING_PLACEHOLDER};
use leptos::*;
use leptos_router::*;

use crate::components::{LoadError, Loading};
use crate::state::{use_global_state, LocalStore};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>
                <p class="text-gray-400 mt-1">
                    {move || state.context.get().map(|ctx| format!("Welcome, {}", ctx.display_name()))}
                </p>
            </div>
            <TileGrid tiles=&ADMIN_TILES />
        </div>
    }
}

#[component]
pub fn AdminVoting() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-4">"Voting"</h1>
            <p class="text-gray-400">{VOTING_PLACEHOLDER}</p>
        </section>
    }
}

#[component]
pub fn VoterDashboard() -> impl IntoView {
    let state = use_global_state();
    let board = create_rw_signal(None::<Board>);
    let failed = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let Some(ctx) = state.context.get_untracked() else {
            return;
        };
        spawn_local(async move {
            state.loading.set(true);
            match views::load_voter_dashboard(&state.api(), &LocalStore::new(), &ctx).await {
                Ok(loaded) => board.set(Some(loaded)),
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            {move || match (board.get(), failed.get()) {
                (Some(board), _) => view! { <VoterSummary board=board /> }.into_view(),
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
            <TileGrid tiles=&VOTER_TILES />
        </div>
    }
}

#[component]
fn VoterSummary(board: Board) -> impl IntoView {
    let candidacy = board.candidacy.map(|summary| match summary {
        CandidacySummary::Applied { position, status, reference_number } => format!(
            "Your application for {} is {} (ref {})",
            position,
            status,
            or_dash(reference_number.as_deref())
        ),
        CandidacySummary::CanApply { deadline } => format!(
            "Nominations are open until {}.",
            or_dash(deadline.as_deref())
        ),
        CandidacySummary::Closed { reason } => reason,
    });

    view! {
        <div>
            <h1 class="text-3xl font-bold">{board.greeting}</h1>
            <p class="text-gray-400 mt-1">
                {board.voter_id.map(|id| format!("Voter ID {}", id))}
                {board.phase.map(|phase| format!(" · Election phase: {}", phase.label()))}
            </p>
        </div>

        {candidacy.map(|text| view! {
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-2">"Candidacy"</h2>
                <p>{text}</p>
            </section>
        })}

        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">
                {format!("Notifications ({} unread)", board.unread)}
            </h2>
            {if board.recent.is_empty() {
                view! { <p class="text-gray-400 text-sm">"Nothing new."</p> }.into_view()
            } else {
                board.recent.into_iter().map(|n| view! {
                    <div class="py-2 border-b border-gray-700 last:border-0">
                        <span class="font-medium">{n.title_or_default().to_string()}</span>
                        <p class="text-gray-400 text-sm">{n.message.clone().unwrap_or_default()}</p>
                    </div>
                }).collect_view()
            }}
            <A href=electra::Route::Notifications.path() class="text-primary-400 text-sm">"All notifications"</A>
        </section>
    }
}

#[component]
fn TileGrid(tiles: &'static [Tile]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-4">
            {tiles.iter().map(|tile| view! {
                <A href=tile.route.path() class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors">
                    <h3 class="text-lg font-semibold">{tile.title}</h3>
                    <p class="text-gray-400 text-sm mt-1">{tile.description}</p>
                </A>
            }).collect_view()}
        </div>
    }
}
