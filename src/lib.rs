//! Flux Cloud Foundry deployer
//!
//! Web controller that lets a signed-in Flux user log in to Cloud Foundry,
//! pick one of their Flux projects and push it to an org/space, then follow
//! the app's log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
