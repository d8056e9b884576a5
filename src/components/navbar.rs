use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::router::Route;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let dropdown_open = use_state(|| false);

    let Some(session) = session else {
        return html! {};
    };
    let user = session.state.user().cloned();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let on_bookings = {
        let menu_open = menu_open.clone();
        let user_id = user.as_ref().map(|u| u.id.clone());
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(user_id)) = (navigator.as_ref(), user_id.clone()) {
                navigator.push(&Route::Bookings { user_id });
            }
            menu_open.set(false);
        })
    };

    let on_sign_out = {
        let menu_open = menu_open.clone();
        let dropdown_open = dropdown_open.clone();
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            menu_open.set(false);
            dropdown_open.set(false);
        })
    };

    let username = user.map(|u| u.username).unwrap_or_default();

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes={classes!("navbar-brand")}>
                    <span class="brand-icon">{"🚆"}</span>
                    <span class="brand-text">{"TrainBooker"}</span>
                </Link<Route>>

                <div class="navbar-desktop">
                    <button class="nav-link" onclick={on_bookings.clone()}>
                        {"📖 Bookings"}
                    </button>
                    <div class="user-menu">
                        <button class="user-button" onclick={toggle_dropdown}>
                            {"👤 "}{username.clone()}{" ▾"}
                        </button>
                        if *dropdown_open {
                            <div class="user-dropdown">
                                <button class="dropdown-item" onclick={on_sign_out.clone()}>
                                    {"Sign Out"}
                                </button>
                            </div>
                        }
                    </div>
                </div>

                <button class="navbar-toggle" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="navbar-mobile">
                    <button class="mobile-item" onclick={on_bookings}>{"Bookings"}</button>
                    <div class="mobile-item mobile-user">{username}</div>
                    <button class="mobile-item" onclick={on_sign_out}>{"Sign Out"}</button>
                </div>
            }
        </nav>
    }
}
