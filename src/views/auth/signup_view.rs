use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::models::{SignUpOutcome, SignUpRequest};
use crate::router::Route;

#[function_component(SignUpView)]
pub fn sign_up_view() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let outcome = session.as_ref().and_then(|s| s.state.sign_up.clone());

    {
        let dismiss = session.as_ref().map(|s| s.dismiss_notices.clone());
        use_effect_with((), move |_| {
            if let Some(dismiss) = dismiss {
                dismiss.emit(());
            }
            || ()
        });
    }

    // Registration does not sign in; send the user to the sign-in form
    {
        let navigator = navigator.clone();
        let dismiss = session.as_ref().map(|s| s.dismiss_notices.clone());
        use_effect_with(outcome.clone(), move |outcome| {
            if *outcome == Some(SignUpOutcome::Success) {
                if let Some(dismiss) = dismiss {
                    dismiss.emit(());
                }
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            }
            || ()
        });
    }

    let Some(session) = session else {
        return html! {};
    };

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let sign_up = session.sign_up.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username), Some(email), Some(password)) = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                sign_up.emit(SignUpRequest {
                    username: username.value(),
                    email: email.value(),
                    password: password.value(),
                });
            }
        })
    };

    let to_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let error = match outcome {
        Some(SignUpOutcome::Rejected(message)) => Some(message),
        Some(SignUpOutcome::NetworkError(_)) => {
            Some("Signup failed. Please check your connection and try again.".to_string())
        }
        _ => None,
    };
    let pending = session.state.pending;

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-body">
                    <h2 class="auth-title">{"Create account"}</h2>

                    if let Some(error) = error {
                        <div class="auth-error">{error}</div>
                    }

                    <form class="auth-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="username">{"Username"}</label>
                            <input type="text" id="username" placeholder="john" ref={username_ref} required=true />
                        </div>

                        <div class="form-group">
                            <label for="email">{"Email address"}</label>
                            <input type="email" id="email" placeholder="you@example.com" ref={email_ref} required=true />
                        </div>

                        <div class="form-group">
                            <label for="password">{"Password"}</label>
                            <input type="password" id="password" placeholder="••••••••" ref={password_ref} required=true />
                        </div>

                        <button type="submit" class="btn-primary" disabled={pending}>
                            { if pending { "Loading..." } else { "Sign Up" } }
                        </button>
                    </form>
                </div>

                <div class="auth-footer">
                    {"Already have an account? "}
                    <button class="link-button" onclick={to_login}>{"Sign in"}</button>
                </div>
            </div>
        </div>
    }
}
