//! mesheryctl: Command-line interface for Meshery
//!
//! Provides the `mesheryctl` CLI for inspecting Meshery deployments
//! running under docker-compose or on Kubernetes.

pub mod backend;
pub mod commands;
pub mod output;
