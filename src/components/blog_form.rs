//! Blog Form Component
//!
//! Form for publishing posts. The same form doubles as the editor: picking
//! a post to edit populates the fields and the hidden post id, and a
//! populated id switches the submit from create to update.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Blog create/edit form component
#[component]
pub fn BlogForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (blog_id, set_blog_id) = create_signal(None::<i64>);
    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (image_url, set_image_url) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Populate the fields when a post is picked for editing
    let editing = state.editing;
    create_effect(move |_| {
        if let Some(blog) = editing.get() {
            set_blog_id.set(Some(blog.id));
            set_title.set(blog.title);
            set_content.set(blog.content);
            set_image_url.set(blog.image_url.unwrap_or_default());
        }
    });

    let reset_fields = move || {
        set_blog_id.set(None);
        set_title.set(String::new());
        set_content.set(String::new());
        set_image_url.set(String::new());
    };

    let state_for_cancel = state.clone();
    let cancel_edit = move |_: web_sys::MouseEvent| {
        state_for_cancel.editing.set(None);
        reset_fields();
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = state_for_submit.session.get() else {
            return;
        };

        let id = blog_id.get();
        let t = title.get();
        let c = content.get();
        let url = image_url.get();

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            let image = if url.is_empty() { None } else { Some(url.as_str()) };

            let result = match id {
                Some(id) => api::update_blog(&token, id, &t, &c, image).await,
                None => api::create_blog(&token, &t, &c, image).await,
            };

            match result {
                Ok(_) => {
                    state_clone.show_success(if id.is_some() {
                        "Blog updated!"
                    } else {
                        "Blog posted!"
                    });
                    state_clone.editing.set(None);
                    reset_fields();
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
        <form on:submit=on_submit class="space-y-4">
            // Hidden post id: populated only in edit mode
            <input
                type="hidden"
                name="blog_id"
                prop:value=move || blog_id.get().map(|id| id.to_string()).unwrap_or_default()
            />

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                <input
                    type="text"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Content"</label>
                <textarea
                    required
                    rows=5
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Image URL (optional)"</label>
                <input
                    type="url"
                    prop:value=move || image_url.get()
                    on:input=move |ev| set_image_url.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>"Saving..."</span>
                        }.into_view()
                    } else if blog_id.get().is_some() {
                        view! { <span>"Update Post"</span> }.into_view()
                    } else {
                        view! { <span>"Publish"</span> }.into_view()
                    }}
                </button>

                // Leave edit mode without saving
                {move || {
                    if blog_id.get().is_some() {
                        view! {
                            <button
                                type="button"
                                on:click=cancel_edit.clone()
                                class="px-6 bg-gray-700 hover:bg-gray-600 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </form>
    }
}
