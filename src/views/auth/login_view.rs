use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::router::Route;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let authenticated = session
        .as_ref()
        .map(|s| s.state.is_authenticated())
        .unwrap_or(false);

    // Fresh form on every visit
    {
        let dismiss = session.as_ref().map(|s| s.dismiss_notices.clone());
        use_effect_with((), move |_| {
            if let Some(dismiss) = dismiss {
                dismiss.emit(());
            }
            || ()
        });
    }

    // Sign-in has no return value; success shows up as an authenticated session
    {
        let navigator = navigator.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            }
            || ()
        });
    }

    let Some(session) = session else {
        return html! {};
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let sign_in = session.sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            sign_in.emit(((*email).clone(), (*password).clone()));
        })
    };

    let to_signup = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::SignUp);
            }
        })
    };

    let pending = session.state.pending;

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-body">
                    <h2 class="auth-title">{"Sign in"}</h2>

                    if let Some(error) = session.state.last_error.clone() {
                        <div class="auth-error">{error}</div>
                    }

                    <form class="auth-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="email">{"Email address"}</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="you@example.com"
                                value={(*email).clone()}
                                oninput={on_email_change}
                                required=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{"Password"}</label>
                            <input
                                type="password"
                                id="password"
                                placeholder="••••••••"
                                value={(*password).clone()}
                                oninput={on_password_change}
                                required=true
                            />
                        </div>

                        <button type="submit" class="btn-primary" disabled={pending}>
                            { if pending { "Loading..." } else { "Sign in" } }
                        </button>
                    </form>
                </div>

                <div class="auth-footer">
                    {"Don't have an account? "}
                    <button class="link-button" onclick={to_signup}>{"Sign up"}</button>
                </div>
            </div>
        </div>
    }
}
