//! Login page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::login_view::LoginView;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login"/>
        <LoginView />
    }
}
