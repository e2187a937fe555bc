use dioxus::prelude::*;

use crate::components::{Guarded, Shell};
use crate::context::open_session;
use crate::pages::{CardDetail, Home, Login, NotFound, SetView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/login` - Login form (public)
/// - `/` - Collection list
/// - `/set/:set_id` - Cards of one set
/// - `/card/:card_id` - Single card, enlarged
///
/// Everything except `/login` sits behind the [`Guarded`] layout.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(Guarded)]
        #[layout(Shell)]
            #[route("/")]
            Home {},
            #[route("/set/:set_id")]
            SetView { set_id: String },
            #[route("/card/:card_id")]
            CardDetail { card_id: String },
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Opens the session, provides it and the pending-redirect slot as
/// context, and mounts the router.
#[component]
pub fn App() -> Element {
    let session = use_signal(|| {
        let mut session = open_session();
        session.subscribe(|state| {
            tracing::info!(
                authenticated = state.is_authenticated(),
                user = state.user().map(|u| u.username.as_str()).unwrap_or("-"),
                "Session changed"
            );
        });
        session
    });
    let pending_redirect: Signal<Option<Route>> = use_signal(|| None);

    use_context_provider(|| session);
    use_context_provider(|| pending_redirect);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
