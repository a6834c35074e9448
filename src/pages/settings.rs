//! Settings Page
//!
//! API connection configuration and account actions.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Quill dashboard"</p>
            </div>

            <ApiSettings />

            <AccountSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_: web_sys::MouseEvent| {
        let url = api_url.get();
        api::set_api_base(&url);
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Quill API URL"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Account actions: session status and logout
#[component]
fn AccountSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    let navigate = use_navigate();
    let state_for_logout = state.clone();
    let on_logout = move |_: web_sys::MouseEvent| {
        state_for_logout.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Account"</h2>

            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-400">"Session:"</span>
                    {move || {
                        if session.get().is_some() {
                            view! { <span class="text-green-400">"Signed in"</span> }.into_view()
                        } else {
                            view! { <span class="text-gray-400">"Signed out"</span> }.into_view()
                        }
                    }}
                </div>

                {move || {
                    if session.get().is_some() {
                        view! {
                            <button
                                on:click=on_logout.clone()
                                class="px-4 py-2 bg-red-700 hover:bg-red-600 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Log Out"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </section>
    }
}
