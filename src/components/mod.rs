//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod blog_card;
pub mod blog_form;
pub mod loading;
pub mod nav;
pub mod toast;

pub use blog_card::BlogCard;
pub use blog_form::BlogForm;
pub use loading::ListSkeleton;
pub use nav::Nav;
pub use toast::Toast;
