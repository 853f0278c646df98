//! Login and Registration Pages

use leptos::*;
use leptos_router::*;
use octofit::router::Route;
use octofit::views::auth::{self, LoginForm, RegistrationForm};

use crate::state::use_global_state;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get(),
            password: password.get(),
        };
        let client = state.client.clone();
        let navigate = navigate.clone();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match auth::login(&client, &form).await {
                Ok(_) => navigate(Route::Dashboard.path(), Default::default()),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Login" error=error>
            <form on:submit=on_submit class="space-y-4">
                <Field label="Username" kind="text" value=username />
                <Field label="Password" kind="password" value=password />
                <SubmitButton loading=loading idle="Login" busy="Logging in..." />
            </form>
            <p class="text-center text-gray-400 mt-4">
                <A href="/register" class="text-primary-400 hover:underline">
                    "Don't have an account? Register"
                </A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let client = state.client.clone();
        let navigate = navigate.clone();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match auth::register(&client, &form).await {
                Ok(_) => navigate(Route::Dashboard.path(), Default::default()),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Register" error=error>
            <form on:submit=on_submit class="space-y-4">
                <Field label="Username" kind="text" value=username />
                <Field label="Email" kind="email" value=email />
                <Field label="Password" kind="password" value=password />
                <Field label="Confirm Password" kind="password" value=confirm_password />
                <SubmitButton loading=loading idle="Register" busy="Registering..." />
            </form>
            <p class="text-center text-gray-400 mt-4">
                <A href="/login" class="text-primary-400 hover:underline">
                    "Already have an account? Login"
                </A>
            </p>
        </AuthCard>
    }
}

#[component]
fn AuthCard(
    title: &'static str,
    error: ReadSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-12 bg-gray-800 rounded-xl p-8">
            <h2 class="text-2xl font-bold text-center mb-6">{title}</h2>
            {move || error.get().map(|e| view! {
                <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3 mb-4 break-words">
                    {e}
                </div>
            })}
            {children()}
        </div>
    }
}

#[component]
fn Field(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn SubmitButton(
    loading: ReadSignal<bool>,
    idle: &'static str,
    busy: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || loading.get()
            class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   rounded-lg font-medium transition-colors"
        >
            {move || if loading.get() { busy } else { idle }}
        </button>
    }
}
