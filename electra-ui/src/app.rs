//! App Root Component
//!
//! Routing and global providers. Every route is wrapped in [`Guarded`].

use electra::router::Route as Screen;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Fallback, Guarded, Loading, Nav, Toast};
use crate::pages::*;
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=Screen::Landing.path() view=|| view! {
                            <Guarded screen=Screen::Landing><Landing /></Guarded>
                        } />
                        <Route path=Screen::Login.path() view=|| view! {
                            <Guarded screen=Screen::Login><Login /></Guarded>
                        } />
                        <Route path=Screen::Signup.path() view=|| view! {
                            <Guarded screen=Screen::Signup><Signup /></Guarded>
                        } />
                        <Route path=Screen::AdminSignup.path() view=|| view! {
                            <Guarded screen=Screen::AdminSignup><AdminSignup /></Guarded>
                        } />
                        <Route path=Screen::Dashboard.path() view=|| view! {
                            <Guarded screen=Screen::Dashboard><Loading /></Guarded>
                        } />

                        // Admin
                        <Route path=Screen::AdminDashboard.path() view=|| view! {
                            <Guarded screen=Screen::AdminDashboard><AdminDashboard /></Guarded>
                        } />
                        <Route path=Screen::AddVoter.path() view=|| view! {
                            <Guarded screen=Screen::AddVoter><AddVoter /></Guarded>
                        } />
                        <Route path=Screen::AdminVotersList.path() view=|| view! {
                            <Guarded screen=Screen::AdminVotersList><AdminVotersList /></Guarded>
                        } />
                        <Route path=Screen::AdminCandidateApplications.path() view=|| view! {
                            <Guarded screen=Screen::AdminCandidateApplications><CandidateApplications /></Guarded>
                        } />
                        <Route path=Screen::AdminNominationPortal.path() view=|| view! {
                            <Guarded screen=Screen::AdminNominationPortal><NominationPortal /></Guarded>
                        } />
                        <Route path=Screen::AdminVoting.path() view=|| view! {
                            <Guarded screen=Screen::AdminVoting><AdminVoting /></Guarded>
                        } />
                        <Route path=Screen::AdminReports.path() view=|| view! {
                            <Guarded screen=Screen::AdminReports><AdminReports /></Guarded>
                        } />
                        <Route path=Screen::SendNotification.path() view=|| view! {
                            <Guarded screen=Screen::SendNotification><SendNotification /></Guarded>
                        } />

                        // Voter
                        <Route path=Screen::VoterDashboard.path() view=|| view! {
                            <Guarded screen=Screen::VoterDashboard><VoterDashboard /></Guarded>
                        } />
                        <Route path=Screen::ReportVoterError.path() view=|| view! {
                            <Guarded screen=Screen::ReportVoterError><ReportVoterError /></Guarded>
                        } />
                        <Route path=Screen::VotersList.path() view=|| view! {
                            <Guarded screen=Screen::VotersList><VotersList /></Guarded>
                        } />
                        <Route path=Screen::CandidateApplication.path() view=|| view! {
                            <Guarded screen=Screen::CandidateApplication><CandidateApplication /></Guarded>
                        } />
                        <Route path=Screen::ElectionResults.path() view=|| view! {
                            <Guarded screen=Screen::ElectionResults><ElectionResults /></Guarded>
                        } />
                        <Route path=Screen::Notifications.path() view=|| view! {
                            <Guarded screen=Screen::Notifications><Notifications /></Guarded>
                        } />

                        <Route path="/*any" view=Fallback />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing who is signed in and which API is in use
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();
    let context = state.context;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || match context.get() {
                        Some(ctx) => format!("Signed in as {} ({})", ctx.display_name(), ctx.role),
                        None => "Not signed in".to_string(),
                    }}
                </div>

                <div class="text-gray-500">{api::get_api_base()}</div>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
