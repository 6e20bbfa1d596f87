//! Login form component
//!
//! Collects an email and a password, posts them to the login endpoint and
//! either stores the returned token and moves on to the dashboard, or shows
//! the invalid credentials message and stays usable for another try.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::{LoginField, LoginSettings, LoginState, SubmitTicket};
use crate::ui::common::ErrorMessage;

/// Login view: owns the form state and sends the request
#[component]
pub fn LoginView(
    /// Endpoint, redirect target, storage key and duplicate-submit policy
    #[prop(optional)]
    settings: Option<LoginSettings>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let state = RwSignal::new(LoginState::new(settings));
    let navigate = use_navigate();

    let on_submit = move || {
        let Some(ticket) = state.try_update(LoginState::begin_submit).flatten() else {
            return;
        };

        spawn_submit(state, settings, ticket, navigate.clone());
    };

    view! { <LoginForm state=state on_submit=on_submit /> }
}

/// Form markup over a [`LoginState`]: error line, two inputs and the button
#[component]
pub fn LoginForm<F>(
    /// Form state; inputs read from and write to it
    state: RwSignal<LoginState>,
    /// Called on every submit, after the browser default is prevented
    on_submit: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let error = Signal::derive(move || state.with(|s| s.error_text().map(str::to_string)));

    view! {
        <div class="flex items-center justify-center h-screen">
            <form
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit();
                }
                class="bg-white p-6 rounded-xl shadow-md w-full max-w-sm"
            >
                <h2 class="text-2xl font-semibold mb-4">"Login"</h2>

                <ErrorMessage error=error />

                <LoginInput
                    field=LoginField::Email
                    value=Signal::derive(move || state.with(|s| s.email().to_string()))
                    on_input=Callback::new(move |value: String| state.update(|s| s.set_email(value)))
                />
                <LoginInput
                    field=LoginField::Password
                    value=Signal::derive(move || state.with(|s| s.password().to_string()))
                    on_input=Callback::new(move |value: String| state.update(|s| s.set_password(value)))
                />

                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white py-2 rounded disabled:opacity-50"
                    disabled=move || state.with(LoginState::is_locked)
                >
                    "Accedi"
                </button>
            </form>
        </div>
    }
}

/// Controlled input: shows exactly what the state holds
#[component]
fn LoginInput(
    field: LoginField,
    /// Current value
    value: Signal<String>,
    /// Called with the new value on every keystroke
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            name=field.name()
            placeholder=field.placeholder()
            aria-label=field.placeholder()
            autocomplete=field.autocomplete()
            class="w-full p-2 border rounded mb-3"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Run the request in the background and apply its outcome.
///
/// Results arriving after the view is gone are dropped by `try_update`.
#[cfg(feature = "hydrate")]
fn spawn_submit<N>(
    state: RwSignal<LoginState>,
    settings: LoginSettings,
    ticket: SubmitTicket,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    use leptos::logging::log;
    use leptos::task::spawn_local;

    use crate::core::{Transition, submit_login};
    use crate::ui::browser::{BrowserStorage, FetchAuthClient};

    spawn_local(async move {
        let client = FetchAuthClient::new(settings.endpoint);
        let outcome = submit_login(&client, &BrowserStorage, &settings, &ticket.credentials).await;

        if let Err(ref e) = outcome {
            log!("Login failed: {}", e);
        }

        if let Some(Transition::Navigate(path)) = state.try_update(|s| s.finish(outcome)) {
            navigate(path, NavigateOptions::default());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_submit<N>(
    _state: RwSignal<LoginState>,
    _settings: LoginSettings,
    _ticket: SubmitTicket,
    _navigate: N,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
}
