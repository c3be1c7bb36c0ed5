//! HTTP routes for the deploy controller.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    login_page, process_login, show_app_log, show_deployables, show_profile, trigger_deployment,
    CloudFoundryHandlers,
};

/// Creates the deploy controller router with all endpoints.
pub fn cloudfoundry_router(handlers: CloudFoundryHandlers) -> Router {
    Router::new()
        .route("/cloudfoundry", get(show_profile))
        .route("/cloudfoundry/deploy", get(show_deployables))
        .route("/cloudfoundry/deploy.do", post(trigger_deployment))
        .route("/cloudfoundry/processLogin", get(process_login))
        .route("/cloudfoundry/login", get(login_page))
        .route("/cloudfoundry/app-log", get(show_app_log))
        .with_state(handlers)
}
