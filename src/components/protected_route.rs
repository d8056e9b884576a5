// ============================================================================
// PROTECTED ROUTE - Route guard
// ============================================================================
// unauthenticated -> replace history entry with /login (destination dropped)
// authenticated   -> NavBar + child view
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::NavBar;
use crate::hooks::use_session_context;
use crate::router::Route;
use crate::stores::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

pub fn guard(store: &SessionStore) -> GuardDecision {
    if store.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session_context();
    let navigator = use_navigator();

    let decision = session
        .as_ref()
        .map(|handle| guard(&handle.state))
        .unwrap_or(GuardDecision::RedirectToLogin);

    use_effect_with(decision, move |decision| {
        if *decision == GuardDecision::RedirectToLogin {
            log::info!("🔒 Not signed in, redirecting to /login");
            if let Some(navigator) = navigator {
                navigator.replace(&Route::Login);
            }
        }
        || ()
    });

    match decision {
        GuardDecision::Render => html! {
            <>
                <NavBar />
                {props.children.clone()}
            </>
        },
        GuardDecision::RedirectToLogin => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::stores::session_store::establish;
    use crate::utils::jwt::test_tokens::valid_token;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn renders_only_with_token() {
        let anonymous = SessionStore::default();
        assert_eq!(guard(&anonymous), GuardDecision::RedirectToLogin);

        let session = establish(valid_token(), &MemoryStorage::default()).unwrap();
        let signed_in = SessionStore {
            session,
            ..SessionStore::default()
        };
        assert_eq!(guard(&signed_in), GuardDecision::Render);
    }

    #[test]
    fn pending_sign_in_is_still_unauthenticated() {
        let store = SessionStore {
            session: Session::anonymous(),
            pending: true,
            ..SessionStore::default()
        };
        assert_eq!(guard(&store), GuardDecision::RedirectToLogin);
    }
}
