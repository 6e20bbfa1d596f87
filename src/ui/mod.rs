//! Leptos components for the login flow

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod common;
pub mod login_view;
pub mod pages;

pub use login_view::{LoginForm, LoginView};
pub use pages::{DashboardPage, LoginPage, NotFoundPage};
