//! Notification Pages
//!
//! The voter's notification feed and the admin composer.

use electra::display::format_timestamp;
use electra::forms::NotificationForm;
use electra::views::{self, NotificationFeed};
use leptos::*;

use crate::components::{LoadError, Loading, SubmitButton, TextArea, TextField};
use crate::state::{use_global_state, LocalStore};

#[component]
pub fn Notifications() -> impl IntoView {
    let state = use_global_state();
    let feed = create_rw_signal(None::<NotificationFeed>);
    let failed = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let Some(ctx) = state.context.get_untracked() else {
            return;
        };
        spawn_local(async move {
            state.loading.set(true);
            match NotificationFeed::load(&state.api(), &LocalStore::new(), &ctx).await {
                Ok(loaded) => feed.set(Some(loaded)),
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    state.report(&e);
                }
            }
            state.loading.set(false);
        });
    });

    let dismiss = move |id: String| {
        let result = feed
            .try_update(|f| f.as_mut().map(|f| f.dismiss(&mut LocalStore::new(), &id)))
            .flatten();
        if let Some(Err(e)) = result {
            state.report(&e);
        }
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold">"Notifications"</h1>
            {move || match (feed.get(), failed.get()) {
                (Some(loaded), _) => {
                    let visible: Vec<_> = loaded.visible().into_iter().cloned().collect();
                    if visible.is_empty() {
                        view! { <p class="text-gray-400">"No notifications."</p> }.into_view()
                    } else {
                        visible.into_iter().map(|n| {
                            let id = n.id.clone();
                            view! {
                                <article class="bg-gray-800 rounded-xl p-5 flex justify-between gap-4">
                                    <div>
                                        <h2 class="font-semibold">{n.title_or_default().to_string()}</h2>
                                        <p class="text-gray-300 mt-1">{n.message.clone().unwrap_or_default()}</p>
                                        <p class="text-gray-500 text-xs mt-2">
                                            {n.created_at.as_deref().map(format_timestamp).unwrap_or_default()}
                                        </p>
                                    </div>
                                    {id.map(|id| view! {
                                        <button
                                            on:click=move |_| dismiss(id.clone())
                                            class="text-gray-400 hover:text-white self-start"
                                            title="Dismiss"
                                        >
                                            "✕"
                                        </button>
                                    })}
                                </article>
                            }
                        }).collect_view()
                    }
                }
                (None, Some(message)) => view! { <LoadError message=message /> }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn SendNotification() -> impl IntoView {
    let state = use_global_state();
    let title = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = NotificationForm {
            title: title.get(),
            message: message.get(),
        };

        busy.set(true);
        spawn_local(async move {
            match views::send_notification(&state.api(), &form).await {
                Ok(sent) => {
                    state.show_success(&sent);
                    title.set(String::new());
                    message.set(String::new());
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-2xl mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Send Notification"</h1>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Title" value=title />
                <TextArea label="Message" value=message rows=5 />
                <SubmitButton label="Send" busy=busy />
            </form>
        </section>
    }
}
