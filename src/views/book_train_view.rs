use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_session_context;
use crate::router::Route;
use crate::services::{ApiClient, ApiError};
use crate::viewmodels::{BookingStatus, SeatInput};

#[derive(Properties, PartialEq)]
pub struct BookTrainViewProps {
    pub train_id: String,
}

#[function_component(BookTrainView)]
pub fn book_train_view(props: &BookTrainViewProps) -> Html {
    let session = use_session_context();
    let navigator = use_navigator();
    let seats = use_state(SeatInput::default);
    let status = use_state(BookingStatus::default);

    let token = session
        .as_ref()
        .and_then(|s| s.state.session.token().map(str::to_string));

    let on_seat_change = {
        let seats = seats.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            seats.set(SeatInput::new(input.value()));
        })
    };

    let on_confirm = {
        let seats = seats.clone();
        let status = status.clone();
        let navigator = navigator.clone();
        let train_id = props.train_id.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(no_of_seats) = seats.count().filter(|_| seats.can_confirm(&status)) else {
                return;
            };
            status.set(BookingStatus::Submitting);

            let status = status.clone();
            let navigator = navigator.clone();
            let token = token.clone();
            let train_id = train_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match token {
                    Some(token) => ApiClient::new().book_seats(&token, &train_id, no_of_seats).await,
                    None => Err(ApiError::MissingIdentity),
                };

                match &result {
                    Ok(confirmation) => log::info!("✅ Booking successful: {}", confirmation),
                    Err(e) => log::error!("❌ Error during booking: {}", e),
                }

                let next = BookingStatus::from_result(result);
                if next == BookingStatus::Confirmed {
                    Timeout::new(CONFIG.redirect_delay_ms, move || {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    })
                    .forget();
                }
                status.set(next);
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let locked = status.is_locked();
    let can_confirm = seats.can_confirm(&status);
    let submitting = *status == BookingStatus::Submitting;

    html! {
        <div class="page">
            <div class="page-inner">
                <div class="booking-card">
                    <h2>{"Train Booking"}</h2>
                    <p class="muted">{format!("Train ID: {}", props.train_id)}</p>
                    <h3>{"Enter Number of Seats"}</h3>

                    <label class="form-group">
                        {"Number of Seats:"}
                        <input
                            type="number"
                            min="1"
                            value={seats.raw().to_string()}
                            oninput={on_seat_change}
                            disabled={locked}
                        />
                    </label>

                    if let Some(error) = status.error() {
                        <div class="alert alert-error" role="alert">
                            <span>{"⚠️ "}{error.to_string()}</span>
                        </div>
                    }

                    if *status == BookingStatus::Confirmed {
                        <div class="alert alert-success" role="alert">
                            <span>{"✅ Booking successful! Redirecting to home page..."}</span>
                        </div>
                    }

                    <div class="booking-actions">
                        <button class="btn-secondary" onclick={on_cancel} disabled={locked}>
                            {"Cancel"}
                        </button>
                        <button class="btn-primary" onclick={on_confirm} disabled={!can_confirm}>
                            { if submitting { "⏳ Processing..." } else { "Confirm" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
