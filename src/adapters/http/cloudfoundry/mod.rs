//! HTTP adapter for the deploy controller.

mod dto;
mod handlers;
pub mod redirect;
mod routes;

pub use dto::{
    AppLogModel, AppLogQuery, DeployForm, DeployModel, LoginCredentials, LoginModel,
    LoginPageQuery, ProfileModel, ViewResponse,
};
pub use handlers::CloudFoundryHandlers;
pub use routes::cloudfoundry_router;
