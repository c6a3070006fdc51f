//! HTTP client for the remote video generation service.
//!
//! Speaks the long-running-operation REST dialect: submit a prompt (plus an
//! optional seed image and aspect ratio), poll the returned operation by
//! name, then download the produced file. Implements the orchestrator's
//! [`vgen_engine::GenerationService`] port.

pub mod client;
pub mod config;
pub mod error;
mod types;

pub use client::VideoClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
