//! Output formatting utilities for the CLI
//!
//! This module provides the table rendering used by `system status` and the
//! colored status messages shared by all commands.

use tabled::{settings::Style, Table, Tabled};

/// One Kubernetes workload as shown by `system status`
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct WorkloadRow {
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "READY")]
    pub ready: String,
    #[tabled(rename = "UP-TO-DATE")]
    pub up_to_date: String,
    #[tabled(rename = "AVAILABLE")]
    pub available: String,
    #[tabled(rename = "AGE")]
    pub age: String,
}

/// Format workload rows as an ASCII table
///
/// # Arguments
/// * `rows` - Rows to display, in order
/// * `namespace` - Namespace the rows were listed from, used in the empty notice
///
/// # Returns
/// A formatted string suitable for terminal output, or a notice if there is
/// nothing to show.
pub fn format_workloads(rows: &[WorkloadRow], namespace: &str) -> String {
    if rows.is_empty() {
        return format!("No Meshery components found in namespace {}", namespace);
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print a success message in green with a checkmark prefix
///
/// Outputs to stdout with green coloring for positive feedback to the user.
pub fn print_success(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Green),
        Print("✓ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an error message in red with an X prefix
pub fn print_error(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print("✗ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a warning message in yellow to stderr
pub fn print_warning(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Yellow),
        Print("⚠ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an informational message in cyan to stdout
pub fn print_info(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Cyan),
        Print("ℹ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}
