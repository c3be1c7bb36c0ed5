//! HTTP handlers for the deploy controller.
//!
//! Handlers translate between the web surface and the application layer.
//! Success renders a view or redirects onward; every `CloudFoundryError`
//! becomes a `303 See Other` chosen by its recovery.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::cloudfoundry::{
    CloudFoundryError, ProcessLoginCommand, ProcessLoginHandler, ShowAppLogHandler,
    ShowAppLogQuery, ShowDeployablesHandler, ShowDeployablesQuery, ShowProfileHandler,
    ShowProfileQuery, TriggerDeploymentCommand, TriggerDeploymentHandler,
};
use crate::domain::foundation::{UserId, ValidationError};

use super::dto::{
    AppLogModel, AppLogQuery, DeployForm, DeployModel, LoginCredentials, LoginModel,
    LoginPageQuery, ProfileModel, ViewResponse, APP_LOG_VIEW, DEPLOY_VIEW, LOGIN_VIEW,
    PROFILE_VIEW,
};
use super::redirect;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CloudFoundryHandlers {
    deployables_handler: Arc<ShowDeployablesHandler>,
    deploy_handler: Arc<TriggerDeploymentHandler>,
    profile_handler: Arc<ShowProfileHandler>,
    login_handler: Arc<ProcessLoginHandler>,
    app_log_handler: Arc<ShowAppLogHandler>,
}

impl CloudFoundryHandlers {
    pub fn new(
        deployables_handler: Arc<ShowDeployablesHandler>,
        deploy_handler: Arc<TriggerDeploymentHandler>,
        profile_handler: Arc<ShowProfileHandler>,
        login_handler: Arc<ProcessLoginHandler>,
        app_log_handler: Arc<ShowAppLogHandler>,
    ) -> Self {
        Self {
            deployables_handler,
            deploy_handler,
            profile_handler,
            login_handler,
            app_log_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /cloudfoundry/deploy - Projects, spaces and deployment state
pub async fn show_deployables(
    State(handlers): State<CloudFoundryHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ShowDeployablesQuery {
        user_id: user.id.clone(),
    };

    match handlers.deployables_handler.handle(query).await {
        Ok(view) => Json(ViewResponse::new(DEPLOY_VIEW, DeployModel::from(view))).into_response(),
        Err(e) => recover(e, &user.id, "deploy"),
    }
}

/// POST /cloudfoundry/deploy.do - Push a project to a space
pub async fn trigger_deployment(
    State(handlers): State<CloudFoundryHandlers>,
    RequireAuth(user): RequireAuth,
    form: Result<Form<DeployForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return recover(malformed(rejection.body_text()), &user.id, "deploy.do"),
    };
    let cmd = TriggerDeploymentCommand {
        user_id: user.id.clone(),
        project: form.project.unwrap_or_default(),
        space: form.space.unwrap_or_default(),
    };

    match handlers.deploy_handler.handle(cmd).await {
        Ok(result) => {
            Redirect::to(&redirect::app_log(&result.org_space.to_string(), &result.project))
                .into_response()
        }
        Err(e) => recover(e, &user.id, "deploy.do"),
    }
}

/// GET /cloudfoundry - Platform account and spaces
pub async fn show_profile(
    State(handlers): State<CloudFoundryHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ShowProfileQuery {
        user_id: user.id.clone(),
    };

    match handlers.profile_handler.handle(query).await {
        Ok(view) => Json(ViewResponse::new(PROFILE_VIEW, ProfileModel::from(view))).into_response(),
        Err(e) => recover(e, &user.id, "profile"),
    }
}

/// GET /cloudfoundry/processLogin - Open a platform session
pub async fn process_login(
    State(handlers): State<CloudFoundryHandlers>,
    RequireAuth(user): RequireAuth,
    credentials: Result<Query<LoginCredentials>, QueryRejection>,
) -> Response {
    let credentials = match credentials {
        Ok(Query(credentials)) => credentials,
        Err(rejection) => {
            return recover(malformed(rejection.body_text()), &user.id, "processLogin")
        }
    };
    let cmd = ProcessLoginCommand {
        user_id: user.id.clone(),
        login: credentials.cf_login,
        password: credentials.cf_password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(_) => Redirect::to(redirect::DEPLOY_PATH).into_response(),
        Err(e) => recover(e, &user.id, "processLogin"),
    }
}

/// GET /cloudfoundry/login - Login page
///
/// Always renders; an unreadable query only loses the error message.
pub async fn login_page(query: Result<Query<LoginPageQuery>, QueryRejection>) -> Response {
    let error = match query {
        Ok(Query(query)) => query.error,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Ignoring malformed login page query");
            None
        }
    };
    let model = LoginModel {
        error: error.filter(|e| !e.is_empty()),
    };
    Json(ViewResponse::new(LOGIN_VIEW, model)).into_response()
}

/// GET /cloudfoundry/app-log - Follow a deployed project's log
pub async fn show_app_log(
    State(handlers): State<CloudFoundryHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<AppLogQuery>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return recover(malformed(rejection.body_text()), &user.id, "app-log"),
    };
    let query = ShowAppLogQuery {
        user_id: user.id.clone(),
        space: params.space.unwrap_or_default(),
        project: params.project.unwrap_or_default(),
    };

    match handlers.app_log_handler.handle(query).await {
        Ok(view) => Json(ViewResponse::new(APP_LOG_VIEW, AppLogModel::from(view))).into_response(),
        Err(e) => recover(e, &user.id, "app-log"),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Request data axum could not extract. Treated like any other bad input.
fn malformed(reason: String) -> CloudFoundryError {
    ValidationError::invalid_format("request", reason).into()
}

fn recover(error: CloudFoundryError, user_id: &UserId, route: &'static str) -> Response {
    if error.is_collaborator_failure() {
        tracing::warn!(user_id = %user_id, route, error = %error, "Deploy controller request failed");
    } else {
        tracing::info!(user_id = %user_id, route, error = %error, "Redirecting after failed request");
    }

    Redirect::to(&redirect::recovery_location(&error.recovery())).into_response()
}
