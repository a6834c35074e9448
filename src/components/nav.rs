//! Navigation Component
//!
//! Header navigation bar with brand, links, and the logout control.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    let navigate = use_navigate();
    let state_for_logout = state.clone();
    let on_logout = move |_: web_sys::MouseEvent| {
        state_for_logout.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🖋️"</span>
                        <span class="text-xl font-bold text-white">"Quill"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            if session.get().is_some() {
                                view! {
                                    <NavLink href="/" label="Dashboard" />
                                    <NavLink href="/settings" label="Settings" />
                                    <button
                                        on:click=on_logout.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Log Out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Log In" />
                                    <NavLink href="/signup" label="Sign Up" />
                                    <NavLink href="/settings" label="Settings" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
