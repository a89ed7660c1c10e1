//! Kubernetes workload listing

use anyhow::{Context, Result};
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use kube::api::{Api, ListParams};
use kube::Client;

use super::Workloads;

/// List deployments, then stateful sets, in `namespace`
pub async fn list_workloads(client: Client, namespace: &str) -> Result<Workloads> {
    let deployments = Api::<Deployment>::namespaced(client.clone(), namespace)
        .list(&ListParams::default())
        .await
        .with_context(|| format!("failed to list deployments in namespace {}", namespace))?;

    let stateful_sets = Api::<StatefulSet>::namespaced(client, namespace)
        .list(&ListParams::default())
        .await
        .with_context(|| format!("failed to list statefulsets in namespace {}", namespace))?;

    tracing::debug!(
        "Found {} deployments and {} statefulsets in {}",
        deployments.items.len(),
        stateful_sets.items.len(),
        namespace
    );

    Ok(Workloads {
        deployments: deployments.items,
        stateful_sets: stateful_sets.items,
    })
}
