//! Nomination Portal Page (admin)
//!
//! Election phase, nomination deadline and the deadline reminder.

use electra::model::Phase;
use electra::views;
use electra::FormError;
use leptos::*;

use crate::components::{LoadError, Loading, SelectField, SubmitButton, TextArea, TextField};
use crate::state::use_global_state;

#[component]
pub fn NominationPortal() -> impl IntoView {
    let state = use_global_state();
    let loaded = create_rw_signal(false);
    let failed = create_rw_signal(None::<String>);

    let phase = create_rw_signal(Phase::default().as_str().to_string());
    let deadline = create_rw_signal(String::new());
    let notes = create_rw_signal(String::new());
    let busy = create_rw_signal(false);
    let reminding = create_rw_signal(false);

    let fill = move |portal: &views::NominationPortal| {
        phase.set(portal.form.phase.as_str().to_string());
        deadline.set(portal.form.nomination_last_date.clone());
        notes.set(portal.form.notes.clone());
    };

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match views::NominationPortal::load(&state.api()).await {
                Ok(portal) => {
                    fill(&portal);
                    loaded.set(true);
                }
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    // Portal built from what is currently in the form
    let current = move || -> Result<views::NominationPortal, FormError> {
        let mut portal = views::NominationPortal::default();
        portal.form.set_phase(&phase.get_untracked())?;
        portal.form.nomination_last_date = deadline.get_untracked();
        portal.form.notes = notes.get_untracked();
        Ok(portal)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut portal = match current() {
            Ok(portal) => portal,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        busy.set(true);
        spawn_local(async move {
            match portal.save(&state.api()).await {
                Ok(saved) => {
                    fill(&portal);
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

    let send_reminder = move |_| {
        let Ok(portal) = current() else {
            return;
        };

        reminding.set(true);
        spawn_local(async move {
            match portal.send_reminder(&state.api()).await {
                Ok(Some(message)) => state.show_success(&message),
                Ok(None) => state.show_error("Reminders can only be sent while nominations are open."),
                Err(e) => state.report(&e),
            }
            reminding.set(false);
        });
    };

    let nomination_open = move || phase.get() == Phase::Nomination.as_str();

    view! {
        <section class="max-w-2xl mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Nomination Portal"</h1>
            {move || match (loaded.get(), failed.get()) {
                (true, _) => view! {
                    <form on:submit=on_submit class="space-y-4">
                        <SelectField
                            label="Election phase"
                            value=phase
                            options=Phase::ALL.iter().map(|p| (p.as_str().to_string(), p.label().to_string())).collect()
                        />
                        <TextField label="Nomination last date" value=deadline input_type="date" />
                        <TextArea label="Notes" value=notes rows=3 />
                        <SubmitButton label="Save" busy=busy />
                    </form>
                    <button
                        on:click=send_reminder
                        disabled=move || reminding.get() || !nomination_open()
                        class="mt-4 w-full bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 rounded-lg py-3"
                    >
                        {move || if reminding.get() { "Sending..." } else { "Send deadline reminder" }}
                    </button>
                }.into_view(),
                (false, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (false, None) => view! { <Loading /> }.into_view(),
            }}
        </section>
    }
}
