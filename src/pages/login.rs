//! Login page with sign-in and account-creation forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Gender, RegisterRequest};
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    // Already signed in? Straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session.state.get();
        if !state.is_loading && state.is_authenticated {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let registering = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let female = RwSignal::new(false);

    let error = move || session.state.with(|s| s.error.clone());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            session.state.update(|s| {
                s.error = Some("Enter both email and password.".to_owned());
            });
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                session.login(&email_value, &password_value).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Ok(age_value) = age.get().trim().parse::<u32>() else {
            session.state.update(|s| s.error = Some("Enter a valid age.".to_owned()));
            return;
        };
        let request = RegisterRequest {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            age: age_value,
            mobile_number: mobile.get().trim().to_owned(),
            job_type: None,
            gender: if female.get() { Gender::Female } else { Gender::Male },
            role: None,
        };
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            session.state.update(|s| {
                s.error = Some("Name, email, and password are required.".to_owned());
            });
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                session.register(request).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"StayHub"</h1>
                <p class="login-card__subtitle">
                    {move || if registering.get() { "Create your account" } else { "Welcome back" }}
                </p>

                <Show
                    when=move || registering.get()
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_login>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    class="login-button"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    "Sign In"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="number"
                            min="18"
                            placeholder="Age"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="tel"
                            placeholder="Mobile number"
                            prop:value=move || mobile.get()
                            on:input=move |ev| mobile.set(event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            on:change=move |ev| female.set(event_target_value(&ev) == "female")
                        >
                            <option value="male">"Male"</option>
                            <option value="female">"Female"</option>
                        </select>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Create Account"
                        </button>
                    </form>
                </Show>

                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">
                        {move || error().unwrap_or_default()}
                    </p>
                </Show>

                <div class="login-divider"></div>
                <button
                    class="login-switch"
                    on:click=move |_| {
                        session.state.update(|s| s.clear_error());
                        registering.update(|r| *r = !*r);
                    }
                >
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
