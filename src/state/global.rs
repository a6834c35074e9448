//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Bearer token for the signed-in user, mirroring local storage
    pub session: RwSignal<Option<String>>,
    /// Blog posts from the most recent fetch
    pub blogs: RwSignal<Vec<Blog>>,
    /// Post currently loaded into the blog form for editing
    pub editing: RwSignal<Option<Blog>>,
    /// Bumped after every successful mutation to trigger a re-fetch
    pub refresh: RwSignal<u32>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Blog post from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author_id: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comment nested under a blog post
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub blog_id: i64,
    pub content: String,
    pub author_id: i64,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(session::get_token()),
        blogs: create_rw_signal(Vec::new()),
        editing: create_rw_signal(None),
        refresh: create_rw_signal(0),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Persist the token and mark the session active
    pub fn sign_in(&self, token: String) {
        session::save_token(&token);
        self.session.set(Some(token));
    }

    /// Drop the token and all per-session state
    pub fn sign_out(&self) {
        session::clear_token();
        self.session.set(None);
        self.blogs.set(Vec::new());
        self.editing.set(None);
    }

    /// Ask the dashboard to re-fetch the full blog list
    pub fn request_refresh(&self) {
        self.refresh.update(|n| *n = n.wrapping_add(1));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_deserializes_nested_comments() {
        let json = r#"{
            "id": 1,
            "title": "First post",
            "content": "hello",
            "image_url": "http://example.com/a.png",
            "author_id": 2,
            "comments": [
                {"id": 5, "blog_id": 1, "content": "nice", "author_id": 3}
            ]
        }"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert_eq!(blog.id, 1);
        assert_eq!(blog.image_url.as_deref(), Some("http://example.com/a.png"));
        assert_eq!(blog.comments.len(), 1);
        assert_eq!(blog.comments[0].blog_id, 1);
    }

    #[test]
    fn test_blog_optional_fields_default() {
        let json = r#"{"id": 1, "title": "t", "content": "c", "author_id": 2}"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert!(blog.image_url.is_none());
        assert!(blog.comments.is_empty());
    }

    #[test]
    fn test_blog_null_image_url() {
        let json = r#"{"id": 1, "title": "t", "content": "c", "image_url": null, "author_id": 2, "comments": []}"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert!(blog.image_url.is_none());
    }
}
