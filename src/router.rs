// ============================================================================
// ROUTER - Client-side routes
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ProtectedRoute;
use crate::views::{BookTrainView, BookingsView, LoginView, SearchView, SignUpView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/")]
    Home,
    #[at("/booking/:train_id")]
    BookTrain { train_id: String },
    #[at("/bookings/users/:user_id")]
    Bookings { user_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::BookTrain { .. } | Route::Bookings { .. })
    }
}

pub fn switch(route: Route) -> Html {
    let protected = route.is_protected();
    let view = match route {
        Route::Login => html! { <LoginView /> },
        Route::SignUp => html! { <SignUpView /> },
        Route::Home => html! { <SearchView /> },
        Route::BookTrain { train_id } => html! { <BookTrainView {train_id} /> },
        Route::Bookings { user_id } => html! { <BookingsView {user_id} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    };

    if protected {
        html! { <ProtectedRoute>{view}</ProtectedRoute> }
    } else {
        view
    }
}
