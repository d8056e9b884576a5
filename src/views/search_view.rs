use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Train;
use crate::router::Route;
use crate::services::ApiClient;
use crate::viewmodels::{SearchForm, SearchState};

#[function_component(SearchView)]
pub fn search_view() -> Html {
    let form = use_state(SearchForm::default);
    let search = use_state(SearchState::default);

    let on_source_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(SearchForm {
                source: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_destination_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(SearchForm {
                destination: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_swap = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(form.swapped()))
    };

    let on_submit = {
        let form = form.clone();
        let search = search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if search.is_loading() {
                return;
            }
            search.set(SearchState::Loading);

            let query = (*form).clone();
            let search = search.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new()
                    .train_availability(&query.source, &query.destination)
                    .await;
                if let Err(e) = &result {
                    log::error!("❌ Error fetching trains: {}", e);
                }
                search.set(SearchState::from_result(result));
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-inner">
                <div class="search-card">
                    <form class="search-form" onsubmit={on_submit}>
                        <div class="station-row">
                            <div class="form-group">
                                <label for="source">{"Source"}</label>
                                <input
                                    type="text"
                                    id="source"
                                    placeholder="Enter source station"
                                    value={form.source.clone()}
                                    oninput={on_source_change}
                                />
                            </div>
                            <button type="button" class="btn-swap" onclick={on_swap} title="Swap stations">
                                {"⇄"}
                            </button>
                            <div class="form-group">
                                <label for="destination">{"Destination"}</label>
                                <input
                                    type="text"
                                    id="destination"
                                    placeholder="Enter destination station"
                                    value={form.destination.clone()}
                                    oninput={on_destination_change}
                                />
                            </div>
                        </div>

                        <button type="submit" class="btn-primary" disabled={search.is_loading()}>
                            { if search.is_loading() { "Searching..." } else { "Search Trains" } }
                        </button>
                    </form>
                </div>

                { render_results(&search) }
            </div>
        </div>
    }
}

fn render_results(search: &SearchState) -> Html {
    if let SearchState::Failed(message) = search {
        return html! { <div class="error-banner">{message.clone()}</div> };
    }

    let Some(heading) = search.heading() else {
        return html! {};
    };

    html! {
        <div class="results">
            <h2 class="results-heading">{heading}</h2>
            <div class="card-grid">
                { for search.trains().iter().map(|train| html! {
                    <TrainCard key={train.train_id.clone()} train={train.clone()} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TrainCardProps {
    train: Train,
}

#[function_component(TrainCard)]
fn train_card(props: &TrainCardProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let train_id = props.train.train_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::BookTrain {
                    train_id: train_id.clone(),
                });
            }
        })
    };

    html! {
        <div class="train-card">
            <div class="train-card-header">
                <span class="train-icon">{"🚆"}</span>
                <h3>{props.train.train_name.clone()}</h3>
            </div>
            <div class="train-card-body">
                <span>{format!("👥 Capacity: {} seats", props.train.seat_capacity)}</span>
            </div>
            <button class="btn-primary" {onclick}>{"Book Now"}</button>
        </div>
    }
}
