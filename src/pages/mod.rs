//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod login;
pub mod settings;
pub mod signup;

pub use dashboard::Dashboard;
pub use login::Login;
pub use settings::Settings;
pub use signup::Signup;
