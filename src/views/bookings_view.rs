use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::services::{ApiClient, ApiError};
use crate::viewmodels::{BookingCard, BookingsState};

#[derive(Properties, PartialEq)]
pub struct BookingsViewProps {
    /// From the URL; bookings are always fetched for the signed-in user
    pub user_id: String,
}

#[function_component(BookingsView)]
pub fn bookings_view(props: &BookingsViewProps) -> Html {
    let session = use_session_context();
    let bookings = use_state(BookingsState::default);

    let credentials = session.as_ref().and_then(|s| {
        s.state
            .session
            .credentials()
            .map(|(token, user)| (token.to_string(), user.id.clone()))
    });

    {
        let bookings = bookings.clone();
        let requested = props.user_id.clone();
        use_effect_with(credentials, move |credentials| {
            let credentials = credentials.clone();
            bookings.set(BookingsState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match credentials {
                    Some((token, user_id)) => {
                        if user_id != requested {
                            log::warn!("⚠️ URL user {} differs from signed-in user {}", requested, user_id);
                        }
                        ApiClient::new().user_bookings(&token, &user_id).await
                    }
                    None => Err(ApiError::MissingIdentity),
                };

                match &result {
                    Ok(list) => log::info!("✅ {} bookings loaded", list.len()),
                    Err(e) => log::error!("❌ Error fetching bookings: {}", e),
                }
                bookings.set(BookingsState::from_result(result));
            });
            || ()
        });
    }

    let on_retry = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if window.location().reload().is_err() {
                log::error!("❌ Could not reload the page");
            }
        }
    });

    match &*bookings {
        BookingsState::Loading => html! {
            <div class="status-message">{"Loading bookings..."}</div>
        },
        BookingsState::Failed(message) => html! {
            <div class="status-message">
                <div class="error-banner">{message.clone()}</div>
                <button class="btn-secondary" onclick={on_retry}>{"Try again"}</button>
            </div>
        },
        BookingsState::Empty => html! {
            <div class="page-inner">
                <h1>{"Your Bookings"}</h1>
                <div class="status-message">{"You have no bookings yet."}</div>
            </div>
        },
        BookingsState::Loaded(list) => html! {
            <div class="page-inner">
                <h1>{"Your Bookings"}</h1>
                <div class="card-grid">
                    { for list.iter().map(BookingCard::from).map(render_booking_card) }
                </div>
            </div>
        },
    }
}

fn render_booking_card(card: BookingCard) -> Html {
    html! {
        <div class="booking-history-card" key={card.key}>
            <div class="booking-history-header">
                <span class="train-icon">{"🚆"}</span>
                <h2>{card.train_name}</h2>
            </div>
            <p>{"📅 Booking ID: "}{card.short_id}</p>
            <p>{"🕒 Departure: "}{card.departure}</p>
            <p>{"🕒 Arrival: "}{card.arrival}</p>
            <p>{"👥 Seats: "}{card.seats}</p>
        </div>
    }
}
