//! Candidate Applications Page (admin)
//!
//! Filterable list of applications with an approve/reject panel.

use electra::display::{format_timestamp, or_dash};
use electra::model::{ApplicationStatus, CandidateApplication};
use electra::views::ApplicationsBoard;
use leptos::*;

use crate::components::{LoadError, Loading, SelectField, SubmitButton, TextArea};
use crate::state::{use_global_state, GlobalState};

const STATUS_OPTIONS: [ApplicationStatus; 3] = [
    ApplicationStatus::Pending,
    ApplicationStatus::Approved,
    ApplicationStatus::Rejected,
];

/// Run `change` on a copy of the board, then store it back
fn with_board<F, Fut>(state: GlobalState, board: RwSignal<Option<ApplicationsBoard>>, change: F)
where
    F: FnOnce(ApplicationsBoard) -> Fut + 'static,
    Fut: std::future::Future<Output = (ApplicationsBoard, Result<Option<String>, electra::ViewError>)> + 'static,
{
    let Some(current) = board.get_untracked() else {
        return;
    };
    spawn_local(async move {
        state.loading.set(true);
        let (updated, result) = change(current).await;
        board.set(Some(updated));
        match result {
            Ok(Some(message)) => state.show_success(&message),
            Ok(None) => {}
            Err(e) => state.report(&e),
        }
        state.loading.set(false);
    });
}

#[component]
pub fn CandidateApplications() -> impl IntoView {
    let state = use_global_state();
    let board = create_rw_signal(None::<ApplicationsBoard>);
    let failed = create_rw_signal(None::<String>);
    let status_filter = create_rw_signal(String::new());
    let position_filter = create_rw_signal(String::new());

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match ApplicationsBoard::load(&state.api(), Default::default()).await {
                Ok(loaded) => board.set(Some(loaded)),
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    // Refetch when a filter changes; the first run only records the values
    create_effect(move |previous: Option<(String, String)>| {
        let filters = (status_filter.get(), position_filter.get());
        if previous.is_some_and(|p| p != filters) {
            let (status, position) = filters.clone();
            with_board(state, board, move |mut b| async move {
                b.query.status = status.parse::<ApplicationStatus>().ok();
                b.query.position = Some(position).filter(|p| !p.trim().is_empty());
                let result = b.reload(&state.api()).await;
                (b, result.map(|_| None))
            });
        }
        filters
    });

    let positions = create_memo(move |_| {
        board.with(|b| b.as_ref().map(ApplicationsBoard::positions).unwrap_or_default())
    });
    let reviewing = create_memo(move |_| {
        board.with(|b| b.as_ref().is_some_and(|b| b.review.is_some()))
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <h1 class="text-3xl font-bold">"Candidate Applications"</h1>
                <div class="flex space-x-4">
                    <SelectField
                        label="Status"
                        value=status_filter
                        options=STATUS_OPTIONS.iter().map(|s| (s.as_str().to_string(), s.as_str().to_string())).collect()
                        placeholder="All"
                    />
                    {move || view! {
                        <SelectField
                            label="Position"
                            value=position_filter
                            options=positions.get().into_iter().map(|p| (p.clone(), p)).collect()
                            placeholder="All"
                        />
                    }}
                </div>
            </div>

            {move || reviewing.get().then(|| view! { <ReviewPanel board=board /> })}

            {move || match (board.get(), failed.get()) {
                (Some(b), _) if b.applications.is_empty() => {
                    view! { <p class="text-gray-400">"No applications."</p> }.into_view()
                }
                (Some(b), _) => view! { <ApplicationTable loaded=b board=board /> }.into_view(),
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ApplicationTable(
    loaded: ApplicationsBoard,
    board: RwSignal<Option<ApplicationsBoard>>,
) -> impl IntoView {
    let rows: Vec<(CandidateApplication, Vec<_>)> = loaded
        .applications
        .iter()
        .map(|app| (app.clone(), loaded.document_links(app)))
        .collect();

    view! {
        <div class="overflow-x-auto bg-gray-800 rounded-xl">
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="p-3">"Ref"</th>
                        <th class="p-3">"Name"</th>
                        <th class="p-3">"Voter ID"</th>
                        <th class="p-3">"Position"</th>
                        <th class="p-3">"Branch"</th>
                        <th class="p-3">"Applied"</th>
                        <th class="p-3">"Documents"</th>
                        <th class="p-3">"Status"</th>
                        <th class="p-3"></th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|(app, docs)| {
                        let id = app.id.clone().unwrap_or_default();
                        view! {
                            <tr class="border-t border-gray-700 align-top">
                                <td class="p-3">{or_dash(app.reference_number.as_deref()).to_string()}</td>
                                <td class="p-3">{or_dash(app.full_name.as_deref()).to_string()}</td>
                                <td class="p-3">{or_dash(app.voter_id.as_deref()).to_string()}</td>
                                <td class="p-3">{or_dash(app.position.as_deref()).to_string()}</td>
                                <td class="p-3">{or_dash(app.branch_name.as_deref()).to_string()}</td>
                                <td class="p-3">{app.applied_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                <td class="p-3 space-x-2">
                                    {docs.into_iter().map(|d| view! {
                                        <a href=d.url target="_blank" class="text-primary-400 hover:underline">{d.label}</a>
                                    }).collect_view()}
                                </td>
                                <td class="p-3">{app.status_label()}</td>
                                <td class="p-3">
                                    <button
                                        on:click=move |_| board.update(|b| {
                                            if let Some(b) = b {
                                                b.start_review(&id);
                                            }
                                        })
                                        class="text-primary-400 hover:underline"
                                    >
                                        "Review"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ReviewPanel(board: RwSignal<Option<ApplicationsBoard>>) -> impl IntoView {
    let state = use_global_state();
    let decision = create_rw_signal(ApplicationStatus::Approved.as_str().to_string());
    let remarks = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let status = decision.get_untracked().parse().unwrap_or(ApplicationStatus::Approved);
        let admin_remarks = remarks.get_untracked();

        busy.set(true);
        with_board(state, board, move |mut b| async move {
            if let Some(review) = b.review.as_mut() {
                review.status = status;
                review.admin_remarks = admin_remarks;
            }
            let result = b.submit_review(&state.api()).await;
            busy.set(false);
            (b, result)
        });
    };

    let cancel = move |_| {
        board.update(|b| {
            if let Some(b) = b {
                b.cancel_review();
            }
        })
    };

    let title = move || {
        board.with(|b| {
            let b = b.as_ref()?;
            let id = b.review.as_ref()?.application_id.clone();
            let app = b.applications.iter().find(|a| a.id.as_deref() == Some(id.as_str()))?;
            Some(format!(
                "Review {} for {}",
                or_dash(app.full_name.as_deref()),
                or_dash(app.position.as_deref())
            ))
        })
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            <form on:submit=on_submit class="space-y-4">
                <SelectField
                    label="Decision"
                    value=decision
                    options=vec![
                        ("Approved".to_string(), "Approve".to_string()),
                        ("Rejected".to_string(), "Reject".to_string()),
                    ]
                />
                <TextArea label="Remarks" value=remarks rows=3 />
                <div class="flex space-x-2">
                    <SubmitButton label="Submit Decision" busy=busy />
                    <button
                        type="button"
                        on:click=cancel
                        class="px-6 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg"
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
