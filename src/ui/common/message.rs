//! Message line shown above forms

use leptos::prelude::*;

/// Error message component
/// Renders nothing while the signal holds `None`
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="text-red-500 mb-2" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
