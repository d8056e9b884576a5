// ============================================================================
// SESSION CONTEXT - Explicit session object shared with the component tree
// ============================================================================

use yew::prelude::*;

use super::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Owns the session for the lifetime of the app: restored on first render,
/// dropped with the provider
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// `None` outside of a `SessionContextProvider`
#[hook]
pub fn use_session_context() -> Option<UseSessionHandle> {
    let handle = use_context::<UseSessionHandle>();
    if handle.is_none() {
        log::error!("❌ use_session_context called outside SessionContextProvider");
    }
    handle
}
