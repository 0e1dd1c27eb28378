//! Candidate Application Page
//!
//! Shows the voter's application if there is one, otherwise the form while
//! they are eligible, otherwise why they cannot apply.

use electra::display::{format_address, format_age, format_timestamp, or_dash};
use electra::forms::CandidacyForm;
use electra::model::{CandidateApplication as Application, POSITIONS};
use electra::views::CandidacyView;
use leptos::html::Input;
use leptos::*;

use crate::api::read_attachment;
use crate::components::{LoadError, Loading, SelectField, SubmitButton, TextArea, TextField};
use crate::state::use_global_state;

#[component]
pub fn CandidateApplication() -> impl IntoView {
    let state = use_global_state();
    let candidacy = create_rw_signal(None::<CandidacyView>);
    let failed = create_rw_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match CandidacyView::load(&state.api()).await {
                Ok(view) => candidacy.set(Some(view)),
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold">"Apply as Candidate"</h1>
            {move || match (candidacy.get(), failed.get()) {
                (Some(view), _) => view! { <CandidacyBody current=view candidacy=candidacy /> }.into_view(),
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn CandidacyBody(
    current: CandidacyView,
    candidacy: RwSignal<Option<CandidacyView>>,
) -> impl IntoView {
    let voter = current.voter().cloned();
    let config = current.config().cloned();
    let application = current.application().cloned();
    let can_apply = current.can_apply();
    let blocked = current.blocked_reason().map(str::to_string);

    view! {
        {voter.map(|v| view! {
            <section class="bg-gray-800 rounded-xl p-6 grid md:grid-cols-2 gap-2 text-sm">
                <div>"Name: " {or_dash(v.display_name()).to_string()}</div>
                <div>"Voter ID: " {or_dash(v.voter_id.as_deref()).to_string()}</div>
                <div>"Age: " {format_age(v.date_of_birth.as_deref())}</div>
                <div>"Branch: " {or_dash(v.branch_name.as_deref()).to_string()}</div>
                <div class="md:col-span-2">"Address: " {format_address(v.address.as_ref())}</div>
            </section>
        })}

        {config.map(|c| view! {
            <p class="text-gray-400">
                {format!("Election phase: {}", c.phase.label())}
                {c.nomination_last_date.map(|d| format!(" · Nominations close {}", d))}
            </p>
        })}

        {match (application, can_apply) {
            (Some(app), _) => view! { <ApplicationStatus app=app /> }.into_view(),
            (None, true) => view! { <ApplicationForm candidacy=candidacy /> }.into_view(),
            (None, false) => view! {
                <LoadError message=blocked.unwrap_or_else(|| "You cannot apply right now.".to_string()) />
            }.into_view(),
        }}
    }
}

#[component]
fn ApplicationStatus(app: Application) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-2">
            <h2 class="text-xl font-semibold">"Your Application"</h2>
            <div>"Reference: " {or_dash(app.reference_number.as_deref()).to_string()}</div>
            <div>"Position: " {or_dash(app.position.as_deref()).to_string()}</div>
            <div>"Status: " <span class="font-semibold">{app.status_label()}</span></div>
            <div>"Applied: " {app.applied_at.as_deref().map(format_timestamp).unwrap_or_default()}</div>
            {app.admin_remarks.filter(|r| !r.is_empty()).map(|r| view! {
                <div class="text-gray-400">"Remarks: " {r}</div>
            })}
        </section>
    }
}

#[component]
fn ApplicationForm(candidacy: RwSignal<Option<CandidacyView>>) -> impl IntoView {
    let state = use_global_state();

    let position = create_rw_signal(String::new());
    let symbol = create_rw_signal(String::new());
    let statement = create_rw_signal(String::new());
    let experience = create_rw_signal(String::new());
    let declaration = create_rw_signal(false);
    let busy = create_rw_signal(false);

    let identity_proof = create_node_ref::<Input>();
    let membership_proof = create_node_ref::<Input>();
    let supporting_document = create_node_ref::<Input>();
    let candidate_photo = create_node_ref::<Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut current) = candidacy.get_untracked() else {
            return;
        };
        let inputs = [identity_proof, membership_proof, supporting_document, candidate_photo]
            .map(|node| node.get_untracked());

        busy.set(true);
        spawn_local(async move {
            let mut files = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let read = match input {
                    Some(input) => read_attachment(input).await,
                    None => Ok(None),
                };
                match read {
                    Ok(file) => files.push(file),
                    Err(e) => {
                        state.show_error(&e);
                        busy.set(false);
                        return;
                    }
                }
            }
            let mut files = files.into_iter();

            let form = CandidacyForm {
                position: position.get_untracked(),
                symbol: symbol.get_untracked(),
                statement: statement.get_untracked(),
                experience: experience.get_untracked(),
                declaration: declaration.get_untracked(),
                identity_proof: files.next().flatten(),
                membership_proof: files.next().flatten(),
                supporting_document: files.next().flatten(),
                candidate_photo: files.next().flatten(),
            };

            match current.submit(&state.api(), form).await {
                Ok(saved) => {
                    state.show_success(&saved.message);
                    candidacy.set(Some(current));
                    if let Some(e) = saved.reload_error {
                        state.report(&e);
                    }
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <form on:submit=on_submit class="space-y-4">
                <SelectField
                    label="Position"
                    value=position
                    options=POSITIONS.iter().map(|p| (p.to_string(), p.to_string())).collect()
                    placeholder="Select a position"
                />
                <TextField label="Symbol (optional)" value=symbol />
                <TextArea label="Statement" value=statement />
                <TextArea label="Experience (optional)" value=experience rows=3 />

                <FileField label="Identity proof" node=identity_proof />
                <FileField label="Membership proof" node=membership_proof />
                <FileField label="Supporting document (optional)" node=supporting_document />
                <FileField label="Candidate photo (optional)" node=candidate_photo accept="image/*" />

                <label class="flex items-center space-x-2">
                    <input
                        type="checkbox"
                        prop:checked=move || declaration.get()
                        on:change=move |ev| declaration.set(event_target_checked(&ev))
                    />
                    <span class="text-sm">"I declare that the information provided is true."</span>
                </label>

                <SubmitButton label="Submit Application" busy=busy />
            </form>
        </section>
    }
}

#[component]
fn FileField(
    label: &'static str,
    node: NodeRef<Input>,
    #[prop(default = "application/pdf,image/*")]
    accept: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input type="file" accept=accept node_ref=node class="text-sm" />
        </div>
    }
}
