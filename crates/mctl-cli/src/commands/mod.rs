//! CLI command implementations

mod config;
mod status;

pub use config::{config_init, config_show};
pub use status::{
    check_status, is_running, replica_ratio, status_command, workload_rows, StatusReport,
};
