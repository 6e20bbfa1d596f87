//! Dashboard page component
//!
//! Target of the post-login redirect. What the dashboard shows is owned by
//! the dashboard itself; this page only confirms a session token is present.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::TOKEN_KEY;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    // Filled in after hydration so server and client render the same markup
    let has_token = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::core::KeyValueStore;
        use crate::ui::browser::BrowserStorage;

        has_token.set(BrowserStorage.get(TOKEN_KEY).is_some());
    });

    view! {
        <Title text="Dashboard"/>
        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <h1 class="text-2xl font-semibold mb-4">"Dashboard"</h1>
            <Show
                when=move || has_token.get()
                fallback=|| view! {
                    <p class="text-gray-600">
                        "Nessuna sessione attiva. "
                        <A href="/login" attr:class="text-blue-600">"Accedi"</A>
                    </p>
                }
            >
                <p class="text-gray-600">{format!("Sessione salvata in \"{}\".", TOKEN_KEY)}</p>
            </Show>
        </div>
    }
}
