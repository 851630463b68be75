// src/web/handlers.rs — Page handlers: load, mutate, render

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::inventory::{apply, seed_items, Command, ValidationError};
use crate::session::load_or_seed;
use crate::util::truncate_str;
use crate::web::cookies::{self, ResolvedSession};
use crate::web::forms::PageForm;
use crate::web::render::{render_page, FALLBACK_PAGE};
use crate::web::AppState;

/// GET / — Render the session's current inventory.
pub async fn show_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = cookies::resolve(&headers);
    respond(&state, session, None).await
}

/// POST / — Apply the submitted mutation (if any), then render.
///
/// The form is taken as a `Result` so a body that fails to parse degrades to
/// "no mutation" instead of a 4xx; this page never answers anything but 200.
pub async fn submit_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<PageForm>, FormRejection>,
) -> Response {
    let session = cookies::resolve(&headers);
    let command = match form {
        Ok(Form(form)) => form.into_command(),
        Err(rejection) => {
            warn!("discarding unparseable form body: {rejection}");
            None
        }
    };
    respond(&state, session, command).await
}

/// GET /healthz — Simple health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The shared request path. A session-store failure downgrades to seeded
/// defaults plus a banner; a dropped mutation downgrades to a plain
/// re-render. Neither is visible in the status code.
async fn respond(state: &AppState, session: ResolvedSession, command: Option<Command>) -> Response {
    let (mut items, session_warning) =
        match load_or_seed(state.store.as_ref(), &session.key).await {
            Ok(items) => (items, false),
            Err(err) => {
                warn!("session store failed, serving defaults: {err}");
                (seed_items(), true)
            }
        };

    if let Some(command) = command {
        match apply(&mut items, &command) {
            // Unknown-id updates land here too; the list is written back
            // unchanged, exactly as if it had been touched.
            Ok(_) => {
                if let Err(err) = state.store.save(&session.key, items.clone()).await {
                    warn!("failed to persist session inventory: {err}");
                }
            }
            Err(err) => log_dropped(&command, &err),
        }
    }

    let page = render_page(&items, session_warning).unwrap_or_else(|err| {
        error!("page template failed to render: {err}");
        FALLBACK_PAGE.to_string()
    });

    let mut response = Html(page).into_response();
    if session.minted {
        if let Ok(value) = HeaderValue::from_str(&cookies::set_cookie(&session.key)) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}

/// Log a rejected mutation. Submitted values can be arbitrarily long, so the
/// offending text is clipped before it reaches the log.
fn log_dropped(command: &Command, err: &ValidationError) {
    let action = match command {
        Command::Add { .. } => "add",
        Command::UpdateQuantity { .. } => "update quantity",
    };
    match err {
        ValidationError::NotNumeric { field, value } => warn!(
            "dropping {action} submission: {field} is not numeric: {:?}",
            truncate_str(value, 64)
        ),
        other => warn!("dropping {action} submission: {other}"),
    }
}
