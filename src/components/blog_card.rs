//! Blog Card Component
//!
//! Renders one post with its image, comments, and action controls. Every
//! handler is a closure owned by the component; nothing is attached to the
//! global namespace.

use leptos::*;

use crate::api;
use crate::state::global::{Blog, Comment, GlobalState};

/// A single blog post with edit/delete controls and its comment thread
#[component]
pub fn BlogCard(blog: Blog) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let blog_for_edit = blog.clone();
    let state_for_edit = state.clone();
    let on_edit = move |_: web_sys::MouseEvent| {
        state_for_edit.editing.set(Some(blog_for_edit.clone()));
    };

    let blog_id = blog.id;
    let state_for_delete = state.clone();
    let on_delete = move |_: web_sys::MouseEvent| {
        let Some(token) = state_for_delete.session.get() else {
            return;
        };

        let state_clone = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_blog(&token, blog_id).await {
                Ok(()) => {
                    state_clone.show_success("Blog deleted!");
                    state_clone.request_refresh();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
        });
    };

    view! {
        <article class="bg-gray-800 rounded-xl p-6 space-y-4">
            // Title and post actions
            <div class="flex items-start justify-between">
                <h3 class="text-xl font-semibold">{blog.title.clone()}</h3>
                <div class="flex items-center space-x-2">
                    <button
                        on:click=on_edit
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                    >
                        "Edit"
                    </button>
                    <button
                        on:click=on_delete
                        class="px-3 py-1 bg-red-700 hover:bg-red-600 rounded text-sm transition-colors"
                    >
                        "Delete"
                    </button>
                </div>
            </div>

            // Optional post image
            {blog.image_url.clone().map(|url| view! {
                <img src=url alt="Blog image" class="rounded-lg max-w-sm" />
            })}

            <p class="text-gray-300 whitespace-pre-wrap">{blog.content.clone()}</p>

            // Comment entry and thread
            <div class="border-t border-gray-700 pt-4 space-y-3">
                <CommentEntry blog_id=blog.id />

                {blog.comments.iter().map(|comment| view! {
                    <CommentRow comment=comment.clone() />
                }).collect_view()}
            </div>
        </article>
    }
}

/// Input row for adding a comment to a post
#[component]
fn CommentEntry(blog_id: i64) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (content, set_content) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = content.get();
        if text.is_empty() {
            state.show_error("Comment cannot be empty");
            return;
        }

        let Some(token) = state.session.get() else {
            return;
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_comment(&token, blog_id, &text).await {
                Ok(_) => {
                    set_content.set(String::new());
                    state_clone.request_refresh();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2">
            <input
                type="text"
                placeholder="Add a comment"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded px-3 py-2 text-sm
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-3 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                       rounded text-sm transition-colors"
            >
                {move || if submitting.get() { "..." } else { "Comment" }}
            </button>
        </form>
    }
}

/// One comment with its delete control
#[component]
fn CommentRow(comment: Comment) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let comment_id = comment.id;
    let on_delete = move |_: web_sys::MouseEvent| {
        let Some(token) = state.session.get() else {
            return;
        };

        let state_clone = state.clone();
        spawn_local(async move {
            match api::delete_comment(&token, comment_id).await {
                Ok(()) => {
                    state_clone.show_success("Comment deleted!");
                    state_clone.request_refresh();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="flex items-center justify-between bg-gray-700/50 rounded px-3 py-2">
            <p class="text-sm text-gray-300">{comment.content}</p>
            <button
                on:click=on_delete
                class="text-gray-400 hover:text-white text-sm ml-3"
            >
                "Delete"
            </button>
        </div>
    }
}
