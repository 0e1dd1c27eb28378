//! Election Results Page

use electra::views::{PositionStandings, ResultsView};
use leptos::*;

use crate::components::{LoadError, Loading};
use crate::state::use_global_state;

#[component]
pub fn ElectionResults() -> impl IntoView {
    let state = use_global_state();
    let results = create_rw_signal(None::<ResultsView>);
    let failed = create_rw_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match ResultsView::load(&state.api()).await {
                Ok(loaded) => results.set(Some(loaded)),
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Election Results"</h1>
            {move || match (results.get(), failed.get()) {
                (Some(view), _) if !view.published => view! {
                    <p class="text-gray-400">"Results have not been published yet."</p>
                }.into_view(),
                (Some(view), _) if view.positions.is_empty() => view! {
                    <p class="text-gray-400">"No results to show."</p>
                }.into_view(),
                (Some(view), _) => view
                    .positions
                    .into_iter()
                    .map(|standings| view! { <Standings standings=standings /> })
                    .collect_view(),
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Standings(standings: PositionStandings) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex justify-between items-baseline mb-4">
                <h2 class="text-xl font-semibold">{standings.position}</h2>
                <span class="text-gray-400 text-sm">{format!("{} votes", standings.total_votes)}</span>
            </div>
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="p-2">"#"</th>
                        <th class="p-2">"Candidate"</th>
                        <th class="p-2">"Voter ID"</th>
                        <th class="p-2 text-right">"Votes"</th>
                    </tr>
                </thead>
                <tbody>
                    {standings.rows.into_iter().map(|row| view! {
                        <tr class="border-t border-gray-700" class:text-green-400=row.leading class:font-semibold=row.leading>
                            <td class="p-2">{row.rank}</td>
                            <td class="p-2">
                                {row.name}
                                {row.leading.then(|| view! { <span class="ml-2 text-xs">"Leading"</span> })}
                            </td>
                            <td class="p-2">{row.voter_id}</td>
                            <td class="p-2 text-right">{row.votes}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
