//! Status command implementation

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

use crate::backend::{StatusBackend, SystemBackend, Workloads};
use crate::output::{format_workloads, print_info, WorkloadRow};
use mctl_core::config::{self, MesheryCtlConfig};
use mctl_core::time::format_age;
use mctl_core::{Context, Platform, MESHERY_MARKER, MESHERY_NAMESPACE};

/// What `system status` found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    /// Compose output did not mention Meshery
    NotRunning,
    /// Meshery containers are up
    Compose { output: String, endpoint: String },
    /// Workloads in the Meshery namespace
    Cluster {
        rows: Vec<WorkloadRow>,
        endpoint: String,
    },
}

impl StatusReport {
    /// Print the report to stdout
    pub fn print(&self) {
        match self {
            StatusReport::NotRunning => {
                print_info("Meshery is not running, run `mesheryctl system start` to start Meshery");
            }
            StatusReport::Compose { output, endpoint } => {
                println!("{}", output.trim_end());
                print_info(&format!("Meshery endpoint is {}", endpoint));
            }
            StatusReport::Cluster { rows, endpoint } => {
                println!("{}", format_workloads(rows, MESHERY_NAMESPACE));
                print_info(&format!("Meshery endpoint is {}", endpoint));
            }
        }
    }
}

/// Execute the status command
pub async fn status_command(config_path: &Path, temp_context: Option<&str>) -> Result<()> {
    let config: MesheryCtlConfig =
        config::load_config(config_path).context("error processing config")?;
    let ctx = config
        .resolve_context(temp_context)
        .context("error processing config")?;

    tracing::debug!(
        "Using context with platform {} and endpoint {}",
        ctx.platform,
        ctx.endpoint
    );

    let report = check_status(&config, ctx, &SystemBackend, Utc::now()).await?;
    report.print();

    Ok(())
}

/// Query the platform selected by `ctx` and build a report.
pub async fn check_status<B>(
    config: &MesheryCtlConfig,
    ctx: &Context,
    backend: &B,
    now: DateTime<Utc>,
) -> Result<StatusReport>
where
    B: StatusBackend + ?Sized,
{
    match ctx.platform().context("error processing config")? {
        Platform::Docker => {
            let output = backend
                .compose_ps(&config.compose)
                .await
                .context("failed to get Meshery status")?;

            if is_running(&output) {
                Ok(StatusReport::Compose {
                    output,
                    endpoint: ctx.endpoint.clone(),
                })
            } else {
                Ok(StatusReport::NotRunning)
            }
        }
        Platform::Kubernetes => {
            let workloads = backend.workloads(MESHERY_NAMESPACE).await?;
            Ok(StatusReport::Cluster {
                rows: workload_rows(&workloads, now),
                endpoint: ctx.endpoint.clone(),
            })
        }
    }
}

/// Whether compose output shows Meshery containers
pub fn is_running(output: &str) -> bool {
    output.contains(MESHERY_MARKER)
}

/// Deployment rows followed by stateful set rows
pub fn workload_rows(workloads: &Workloads, now: DateTime<Utc>) -> Vec<WorkloadRow> {
    let deployments = workloads.deployments.iter().map(|d| deployment_row(d, now));
    let stateful_sets = workloads.stateful_sets.iter().map(|s| stateful_set_row(s, now));
    deployments.chain(stateful_sets).collect()
}

fn deployment_row(deployment: &Deployment, now: DateTime<Utc>) -> WorkloadRow {
    let status = deployment.status.clone().unwrap_or_default();

    WorkloadRow {
        name: deployment.metadata.name.clone().unwrap_or_default(),
        ready: replica_ratio(status.ready_replicas, status.replicas),
        up_to_date: status.updated_replicas.unwrap_or(0).to_string(),
        available: status.available_replicas.unwrap_or(0).to_string(),
        age: age(deployment.metadata.creation_timestamp.as_ref(), now),
    }
}

fn stateful_set_row(stateful_set: &StatefulSet, now: DateTime<Utc>) -> WorkloadRow {
    let status = stateful_set.status.clone().unwrap_or_default();

    WorkloadRow {
        name: stateful_set.metadata.name.clone().unwrap_or_default(),
        ready: replica_ratio(status.ready_replicas, Some(status.replicas)),
        up_to_date: status.updated_replicas.unwrap_or(0).to_string(),
        available: status.current_replicas.unwrap_or(0).to_string(),
        age: age(stateful_set.metadata.creation_timestamp.as_ref(), now),
    }
}

/// `ready/total`, with absent counts as zero
pub fn replica_ratio(ready: Option<i32>, total: Option<i32>) -> String {
    format!("{}/{}", ready.unwrap_or(0), total.unwrap_or(0))
}

fn age(created: Option<&Time>, now: DateTime<Utc>) -> String {
    match created {
        Some(Time(created)) => format_age(*created, now),
        None => "<unknown>".to_string(),
    }
}
