//! Dashboard Page
//!
//! Authenticated view listing the user's posts with the blog form. Every
//! successful mutation bumps the refresh counter, which re-runs the fetch
//! effect and rebuilds the whole list from the server's response.

use leptos::*;

use crate::api;
use crate::components::{BlogCard, BlogForm, ListSkeleton};
use crate::state::global::GlobalState;
use crate::state::session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch on mount and again whenever a mutation bumps the counter
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.refresh.get();

        // No token means no fetch: redirect to login first
        let Some(token) = session::require_auth() else {
            return;
        };

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_blogs(&token).await {
                Ok(blogs) => {
                    state.blogs.set(blogs);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load blogs: {}", e).into());
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    let blogs = state.blogs;
    let loading = state.loading;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Your Blog"</h1>
                    <p class="text-gray-400 mt-1">"Write, edit, and discuss your posts"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        let count = blogs.get().len();
                        if count == 1 {
                            "1 post".to_string()
                        } else {
                            format!("{} posts", count)
                        }
                    }}
                </div>
            </div>

            // Composer / editor
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Write a Post"</h2>
                <BlogForm />
            </section>

            // Post list, rebuilt wholesale on every refresh
            <section>
                <h2 class="text-lg font-semibold mb-4">"Posts"</h2>
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        let posts = blogs.get();
                        if posts.is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm">
                                    "No posts yet. Write your first one above."
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {posts.into_iter().map(|blog| view! {
                                        <BlogCard blog=blog />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}
