//! Voter Pages
//!
//! Voter list for voters, the admin list with inline editing, and voter
//! registration.

use electra::forms::{NewVoterForm, VoterEditor};
use electra::model::VoterUpdate;
use electra::views::{self, VoterRoster, VoterRow};
use leptos::*;

use crate::components::{LoadError, Loading, SubmitButton, TextField};
use crate::state::{use_global_state, GlobalState};

/// Editable fields in form order
const EDIT_FIELDS: [(&str, &str); 7] = [
    ("full_name", "Full Name"),
    ("date_of_birth", "Date of Birth"),
    ("address", "Address"),
    ("email", "Email"),
    ("phone_no", "Phone"),
    ("branch_name", "Branch"),
    ("photo_url", "Photo URL"),
];

fn field_value(update: &VoterUpdate, key: &str) -> String {
    match key {
        "full_name" => &update.full_name,
        "date_of_birth" => &update.date_of_birth,
        "address" => &update.address,
        "email" => &update.email,
        "phone_no" => &update.phone_no,
        "branch_name" => &update.branch_name,
        "photo_url" => &update.photo_url,
        _ => return String::new(),
    }
    .to_string()
}

fn load_roster(state: GlobalState, roster: RwSignal<Option<VoterRoster>>, failed: RwSignal<Option<String>>) {
    spawn_local(async move {
        state.loading.set(true);
        match VoterRoster::load(&state.api()).await {
            Ok(loaded) => roster.set(Some(loaded)),
            Err(e) => {
                failed.set(Some(e.to_string()));
                state.report(&e);
            }
        }
        state.loading.set(false);
    });
}

#[component]
pub fn VotersList() -> impl IntoView {
    view! { <Roster admin=false /> }
}

#[component]
pub fn AdminVotersList() -> impl IntoView {
    view! { <Roster admin=true /> }
}

#[component]
fn Roster(admin: bool) -> impl IntoView {
    let state = use_global_state();
    let roster = create_rw_signal(None::<VoterRoster>);
    let failed = create_rw_signal(None::<String>);
    let search = create_rw_signal(String::new());
    let editor = create_rw_signal(None::<VoterEditor>);

    let editing = create_memo(move |_| editor.with(Option::is_some));

    create_effect(move |_| load_roster(state, roster, failed));

    let on_search = move |ev| {
        let input = event_target_value(&ev);
        let applied = roster
            .try_update(|r| r.as_mut().map(|r| r.search(&input).to_string()))
            .flatten()
            .unwrap_or_default();
        search.set(applied);
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{if admin { "Voters List (Admin)" } else { "Voters List" }}</h1>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Search by voter ID"
                    prop:value=move || search.get()
                    on:input=on_search
                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600"
                />
            </div>

            {move || editing.get().then(|| view! { <EditPanel roster=roster editor=editor /> })}

            {move || match (roster.get(), failed.get()) {
                (Some(roster), _) => {
                    let rows = roster.rows();
                    if rows.is_empty() {
                        view! { <p class="text-gray-400">"No voters found."</p> }.into_view()
                    } else {
                        view! { <RosterTable rows=rows admin=admin roster_data=roster editor=editor /> }.into_view()
                    }
                }
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn RosterTable(
    rows: Vec<VoterRow>,
    admin: bool,
    roster_data: VoterRoster,
    editor: RwSignal<Option<VoterEditor>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-gray-800 rounded-xl">
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="p-3">"#"</th>
                        <th class="p-3">"Photo"</th>
                        <th class="p-3">"Voter ID"</th>
                        <th class="p-3">"Name"</th>
                        <th class="p-3">"Age"</th>
                        <th class="p-3">"Address"</th>
                        {admin.then(|| view! {
                            <th class="p-3">"Email"</th>
                            <th class="p-3">"Phone"</th>
                            <th class="p-3">"Branch"</th>
                            <th class="p-3"></th>
                        })}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        let voter_id = row.voter_id.clone();
                        let can_edit = roster_data.edit(&voter_id);
                        view! {
                            <tr class="border-t border-gray-700">
                                <td class="p-3">{row.serial}</td>
                                <td class="p-3">
                                    {row.photo.map(|src| view! { <img src=src class="w-10 h-10 rounded-full object-cover" /> })}
                                </td>
                                <td class="p-3">{row.voter_id}</td>
                                <td class="p-3">{row.name}</td>
                                <td class="p-3">{row.age}</td>
                                <td class="p-3">{row.address}</td>
                                {admin.then(move || view! {
                                    <td class="p-3">{row.email}</td>
                                    <td class="p-3">{row.phone_no}</td>
                                    <td class="p-3">{row.branch_name}</td>
                                    <td class="p-3">
                                        {can_edit.map(|found| view! {
                                            <button
                                                on:click=move |_| editor.set(Some(found.clone()))
                                                class="text-primary-400 hover:underline"
                                            >
                                                "Edit"
                                            </button>
                                        })}
                                    </td>
                                })}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn EditPanel(
    roster: RwSignal<Option<VoterRoster>>,
    editor: RwSignal<Option<VoterEditor>>,
) -> impl IntoView {
    let state = use_global_state();
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(current), Some(mut loaded)) = (editor.get_untracked(), roster.get_untracked()) else {
            return;
        };

        busy.set(true);
        spawn_local(async move {
            match loaded.save(&state.api(), &current).await {
                Ok(saved) => {
                    roster.set(Some(loaded));
                    editor.set(None);
                    state.show_success(&saved.message);
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
            <h2 class="text-xl font-semibold mb-4">
                {move || editor.get().map(|e| format!("Edit voter {}", e.voter_id))}
            </h2>
            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                {EDIT_FIELDS.into_iter().map(|(key, label)| {
                    let input_type = if key == "date_of_birth" { "date" } else { "text" };
                    view! {
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">{label}</label>
                        <input
                            type=input_type
                            prop:value=move || editor.get().map(|e| field_value(&e.fields, key)).unwrap_or_default()
                            on:input=move |ev| editor.update(|e| {
                                if let Some(e) = e {
                                    e.set(key, event_target_value(&ev));
                                }
                            })
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
                        />
                    </div>
                    }
                }).collect_view()}
                <div class="flex space-x-2 md:col-span-2">
                    <SubmitButton label="Save" busy=busy />
                    <button
                        type="button"
                        on:click=move |_| editor.set(None)
                        class="px-6 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg"
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}

#[component]
pub fn AddVoter() -> impl IntoView {
    let state = use_global_state();

    let voter_id = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let date_of_birth = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone_no = create_rw_signal(String::new());
    let branch_name = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = NewVoterForm {
            voter_id: voter_id.get(),
            full_name: full_name.get(),
            date_of_birth: date_of_birth.get(),
            address: address.get(),
            email: email.get(),
            phone_no: phone_no.get(),
            branch_name: branch_name.get(),
        };

        busy.set(true);
        spawn_local(async move {
            match views::add_voter(&state.api(), &form).await {
                Ok(message) => {
                    state.show_success(&message);
                    for field in [voter_id, full_name, date_of_birth, address, email, phone_no, branch_name] {
                        field.set(String::new());
                    }
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-2xl mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Add New Voter"</h1>
            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                <TextField label="Voter ID" value=voter_id />
                <TextField label="Full Name" value=full_name />
                <TextField label="Date of Birth" value=date_of_birth input_type="date" />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="Phone" value=phone_no input_type="tel" />
                <TextField label="Branch" value=branch_name />
                <div class="md:col-span-2">
                    <TextField label="Address" value=address />
                </div>
                <div class="md:col-span-2">
                    <SubmitButton label="Add Voter" busy=busy />
                </div>
            </form>
        </section>
    }
}
