//! HTTP API Client
//!
//! Functions for communicating with the Quill REST API.

use gloo_net::http::Request;

use crate::state::global::{Blog, Comment};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("quill_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("quill_api_url", url);
        }
    }
}

// ============ Response Types ============

/// Account record returned by signup
#[derive(Debug, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    detail: String,
}

// ============ Request Helpers ============

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Endpoint for blog writes: the collection for creates, the item for updates
fn blog_url(api_base: &str, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{}/blogs/{}", api_base, id),
        None => format!("{}/blogs/", api_base),
    }
}

/// Empty comments are rejected here, before any request is issued
fn comment_is_valid(content: &str) -> bool {
    !content.is_empty()
}

/// Encode form fields as application/x-www-form-urlencoded
fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    fn push_encoded(value: &str, out: &mut String) {
        for byte in value.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                    out.push(byte as char)
                }
                b' ' => out.push('+'),
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
    }

    let mut result = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        push_encoded(key, &mut result);
        result.push('=');
        push_encoded(value, &mut result);
    }
    result
}

// ============ Auth ============

/// Register a new account
pub async fn signup(username: &str, email: &str, password: &str) -> Result<User, String> {
    #[derive(serde::Serialize)]
    struct SignupRequest {
        username: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/signup", api_base))
        .json(&SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Signup failed".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange credentials for an access token
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    let api_base = get_api_base();
    let body = form_urlencode(&[("username", username), ("password", password)]);

    let response = Request::post(&format!("{}/login", api_base))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Login failed".to_string() });
        return Err(error.detail);
    }

    let token: TokenResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(token.access_token)
}

// ============ Blogs ============

/// Fetch the signed-in user's blog posts, with nested comments
pub async fn fetch_blogs(token: &str) -> Result<Vec<Blog>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/blogs/", api_base))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to load blogs".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new blog post
pub async fn create_blog(
    token: &str,
    title: &str,
    content: &str,
    image_url: Option<&str>,
) -> Result<Blog, String> {
    save_blog(token, None, title, content, image_url).await
}

/// Update an existing blog post
pub async fn update_blog(
    token: &str,
    id: i64,
    title: &str,
    content: &str,
    image_url: Option<&str>,
) -> Result<Blog, String> {
    save_blog(token, Some(id), title, content, image_url).await
}

/// A populated id issues PUT against the post, an absent id issues POST
async fn save_blog(
    token: &str,
    id: Option<i64>,
    title: &str,
    content: &str,
    image_url: Option<&str>,
) -> Result<Blog, String> {
    #[derive(serde::Serialize)]
    struct BlogRequest {
        title: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    }

    let api_base = get_api_base();
    let url = blog_url(&api_base, id);

    let builder = match id {
        Some(_) => Request::put(&url),
        None => Request::post(&url),
    };

    let response = builder
        .header("Authorization", &bearer(token))
        .json(&BlogRequest {
            title: title.to_string(),
            content: content.to_string(),
            image_url: image_url.map(|u| u.to_string()),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to save blog".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a blog post
pub async fn delete_blog(token: &str, id: i64) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/blogs/{}", api_base, id))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to delete blog".to_string() });
        return Err(error.detail);
    }

    Ok(())
}

// ============ Comments ============

/// Add a comment to a blog post
pub async fn create_comment(token: &str, blog_id: i64, content: &str) -> Result<Comment, String> {
    if !comment_is_valid(content) {
        return Err("Comment cannot be empty".to_string());
    }

    #[derive(serde::Serialize)]
    struct CommentRequest {
        blog_id: i64,
        content: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/comments/", api_base))
        .header("Authorization", &bearer(token))
        .json(&CommentRequest {
            blog_id,
            content: content.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to add comment".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a comment
pub async fn delete_comment(token: &str, id: i64) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/comments/{}", api_base, id))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to delete comment".to_string() });
        return Err(error.detail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_url_create_vs_update() {
        assert_eq!(blog_url("http://localhost:8000", None), "http://localhost:8000/blogs/");
        assert_eq!(blog_url("http://localhost:8000", Some(7)), "http://localhost:8000/blogs/7");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("tok1"), "Bearer tok1");
    }

    #[test]
    fn test_empty_comment_rejected() {
        assert!(!comment_is_valid(""));
        assert!(comment_is_valid("looks good"));
    }

    #[test]
    fn test_form_urlencode_plain() {
        assert_eq!(
            form_urlencode(&[("username", "a"), ("password", "b")]),
            "username=a&password=b"
        );
    }

    #[test]
    fn test_form_urlencode_reserved_characters() {
        assert_eq!(
            form_urlencode(&[("password", "p&ss word=1")]),
            "password=p%26ss+word%3D1"
        );
    }

    #[test]
    fn test_token_response_shape() {
        let json = r#"{"access_token": "tok1", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "tok1");
    }

    #[test]
    fn test_api_error_detail() {
        let json = r#"{"detail": "Invalid credentials"}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.detail, "Invalid credentials");
    }
}
