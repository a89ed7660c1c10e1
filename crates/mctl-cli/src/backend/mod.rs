//! Platform backends queried by `system status`
//!
//! The status command only needs two things from the outside world: the
//! output of `docker-compose ps` and the workloads in a namespace. Both sit
//! behind [`StatusBackend`] so the command logic can run against a fake.

mod compose;
mod kubernetes;

pub use compose::{compose_ps, ComposeError};
pub use kubernetes::list_workloads;

use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use mctl_core::ComposeConfig;

/// Workloads listed from a single namespace
#[derive(Debug, Clone, Default)]
pub struct Workloads {
    pub deployments: Vec<Deployment>,
    pub stateful_sets: Vec<StatefulSet>,
}

/// Source of the raw data behind a status report
#[async_trait]
pub trait StatusBackend: Send + Sync {
    /// Run the compose status listing and return its stdout
    async fn compose_ps(&self, compose: &ComposeConfig) -> Result<String>;

    /// List deployments and stateful sets in `namespace`
    async fn workloads(&self, namespace: &str) -> Result<Workloads>;
}

/// Backend talking to the local compose binary and the ambient cluster
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackend;

#[async_trait]
impl StatusBackend for SystemBackend {
    async fn compose_ps(&self, compose: &ComposeConfig) -> Result<String> {
        Ok(compose_ps(compose).await?)
    }

    async fn workloads(&self, namespace: &str) -> Result<Workloads> {
        let client = kube::Client::try_default()
            .await
            .context("failed to create Kubernetes client")?;
        list_workloads(client, namespace).await
    }
}
