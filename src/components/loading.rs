//! Loading Component
//!
//! Skeleton states shown while the blog list is in flight.

use leptos::*;

/// Skeleton loader for the blog list
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl h-32" />
            }).collect_view()}
        </div>
    }
}
