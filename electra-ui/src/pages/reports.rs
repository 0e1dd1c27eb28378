//! Report Pages
//!
//! Voters flag a wrong field in their record; admins read the reports.

use electra::display::{format_timestamp, or_dash};
use electra::forms::ReportForm;
use electra::model::{VoterReport, REPORT_FIELDS};
use electra::views;
use leptos::*;

use crate::components::{LoadError, Loading, SelectField, SubmitButton, TextArea};
use crate::state::use_global_state;

#[component]
pub fn ReportVoterError() -> impl IntoView {
    let state = use_global_state();
    let field = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = ReportForm {
            field: field.get(),
            description: description.get(),
        };

        busy.set(true);
        spawn_local(async move {
            match views::submit_report(&state.api(), &form).await {
                Ok(message) => {
                    state.show_success(&message);
                    field.set(String::new());
                    description.set(String::new());
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-2xl mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-2">"Report an Error"</h1>
            <p class="text-gray-400 text-sm mb-6">
                "Tell the election office which part of your voter record is wrong."
            </p>
            <form on:submit=on_submit class="space-y-4">
                <SelectField
                    label="Field"
                    value=field
                    options=REPORT_FIELDS.iter().map(|f| (f.to_string(), f.to_string())).collect()
                    placeholder="Select a field"
                />
                <TextArea label="What is wrong?" value=description />
                <SubmitButton label="Submit Report" busy=busy />
            </form>
        </section>
    }
}

#[component]
pub fn AdminReports() -> impl IntoView {
    let state = use_global_state();
    let reports = create_rw_signal(None::<Vec<VoterReport>>);
    let failed = create_rw_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match views::load_reports(&state.api()).await {
                Ok(loaded) => reports.set(Some(loaded)),
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
            <h1 class="text-3xl font-bold">"Voter Reports"</h1>
            {move || match (reports.get(), failed.get()) {
                (Some(list), _) if list.is_empty() => {
                    view! { <p class="text-gray-400">"No reports."</p> }.into_view()
                }
                (Some(list), _) => view! { <ReportTable reports=list /> }.into_view(),
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ReportTable(reports: Vec<VoterReport>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-gray-800 rounded-xl">
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="p-3">"Voter ID"</th>
                        <th class="p-3">"Field"</th>
                        <th class="p-3">"Description"</th>
                        <th class="p-3">"Status"</th>
                        <th class="p-3">"Reported"</th>
                    </tr>
                </thead>
                <tbody>
                    {reports.into_iter().map(|r| view! {
                        <tr class="border-t border-gray-700 align-top">
                            <td class="p-3">{or_dash(r.voter_id.as_deref()).to_string()}</td>
                            <td class="p-3">{or_dash(r.field.as_deref()).to_string()}</td>
                            <td class="p-3">{or_dash(r.description.as_deref()).to_string()}</td>
                            <td class="p-3">{or_dash(r.status.as_deref()).to_string()}</td>
                            <td class="p-3">{r.created_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
