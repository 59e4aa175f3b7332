use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;
mod user_sync;
mod viewport;

use auth::{use_auth, use_token_sentinel_loader, AuthState};
use routes::Route;

/// Profile fields derived from `AuthState`, shared with every route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub username: Memo<Option<String>>,
    pub email: Memo<Option<String>>,
    pub initials: Memo<String>,
    pub avatar_url: Memo<Option<String>>,
}

const DASHBOARD_BASE: Asset = asset!("/assets/dashboard-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_app_config();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    let auth = use_auth();
    use_token_sentinel_loader(auth);

    let display_name = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .map(|u| u.display_name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    });
    let username = use_memo(move || auth.current_user.read().as_ref().map(|u| u.username.clone()));
    let email = use_memo(move || auth.current_user.read().as_ref().map(|u| u.email.clone()));
    let initials = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .map(|u| u.initials())
            .unwrap_or_else(|| "G".to_string())
    });
    let avatar_url = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .and_then(|u| u.avatar_url.clone())
    });

    use_context_provider(|| ProfileState {
        display_name,
        username,
        email,
        initials,
        avatar_url,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_BASE }
        Router::<Route> {}
    }
}
