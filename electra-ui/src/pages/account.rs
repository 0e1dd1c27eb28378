//! Account Pages
//!
//! Landing, sign-in and the two registration screens.

use electra::forms::{AdminSignupForm, LoginForm, SignupForm};
use electra::router::Route as Screen;
use electra::session::Role;
use leptos::*;
use leptos_router::*;

use crate::components::{SelectField, SubmitButton, TextField};
use crate::state::{use_global_state, LocalStore};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-6">
            <h1 class="text-4xl font-bold">"Electra"</h1>
            <p class="text-gray-400 max-w-xl">
                "Voter registry, candidate nominations and results for your organisation's elections."
            </p>
            <div class="flex space-x-4">
                <A href=Screen::Login.path() class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium">
                    "Login"
                </A>
                <A href=Screen::Signup.path() class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium">
                    "Voter Sign Up"
                </A>
                <A href=Screen::AdminSignup.path() class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium">
                    "Admin Sign Up"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let role = create_rw_signal(Role::Voter.as_str().to_string());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get(),
            password: password.get(),
            role: role.get().parse().unwrap_or(Role::Voter),
        };

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = state.api();
            match electra::views::login(&api, &mut LocalStore::new(), &form).await {
                Ok(ctx) => {
                    let target = Screen::dashboard_for(ctx.role);
                    state.show_success(&format!("Welcome, {}", ctx.display_name()));
                    state.signed_in(ctx);
                    navigate(target.path(), Default::default());
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Login"</h1>
            <form on:submit=on_submit class="space-y-4">
                <SelectField
                    label="Sign in as"
                    value=role
                    options=vec![
                        (Role::Voter.as_str().to_string(), "Voter".to_string()),
                        (Role::Admin.as_str().to_string(), "Admin".to_string()),
                    ]
                />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="Password" value=password input_type="password" />
                <SubmitButton label="Login" busy=busy />
            </form>
            <p class="text-sm text-gray-400 mt-4">
                "No account? "
                <A href=Screen::Signup.path() class="text-primary-400">"Sign up"</A>
            </p>
        </section>
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let voter_id = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            voter_id: voter_id.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match electra::views::signup(&state.api(), &form).await {
                Ok(message) => {
                    state.show_success(&message);
                    navigate(Screen::Login.path(), Default::default());
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Voter Sign Up"</h1>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Voter ID" value=voter_id placeholder="e.g. 1021" />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="Password" value=password input_type="password" />
                <TextField label="Confirm Password" value=confirm input_type="password" />
                <SubmitButton label="Create Account" busy=busy />
            </form>
        </section>
    }
}

#[component]
pub fn AdminSignup() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = AdminSignupForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };

        busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match electra::views::admin_signup(&state.api(), &form).await {
                Ok(message) => {
                    state.show_success(&message);
                    navigate(Screen::Login.path(), Default::default());
                }
                Err(e) => state.report(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-6">
            <h1 class="text-2xl font-bold mb-6">"Admin Sign Up"</h1>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="Password" value=password input_type="password" />
                <TextField label="Confirm Password" value=confirm input_type="password" />
                <SubmitButton label="Create Admin Account" busy=busy />
            </form>
        </section>
    }
}
