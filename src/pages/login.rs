//! Login Page
//!
//! Credential form that opens a session on success.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(token) => {
                    state_clone.sign_in(token);
                    state_clone.show_success("Login successful!");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-6">"Welcome back"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6">
                    "No account yet? "
                    <A href="/signup" class="text-primary-400 hover:text-primary-300">
                        "Sign up"
                    </A>
                </p>
            </div>
        </div>
    }
}
