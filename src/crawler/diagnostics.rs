//! Fatal-failure diagnostics and end-of-run warning report

use crate::extract::Warnings;
use crate::storage::safe_write;
use std::path::Path;

/// Dumps the last fetched page body next to the other outputs so the page
/// that killed the run can be inspected. Best-effort: a dump failure is
/// logged and swallowed, never masking the original error.
pub fn capture_page_dump(path: &Path, body: Option<&str>) {
    let Some(body) = body else {
        tracing::warn!("No page body available to dump");
        return;
    };
    match safe_write(path, body.as_bytes()) {
        Ok(()) => tracing::info!("Failing page dumped to {}", path.display()),
        Err(e) => tracing::warn!("Could not dump failing page to {}: {}", path.display(), e),
    }
}

/// Prints every accumulated non-fatal warning. Called at the end of every
/// run, successful or not.
pub fn report_warnings(warnings: &Warnings) {
    if warnings.is_empty() {
        return;
    }
    println!("WARNING(S) collected during the run:");
    for warning in warnings.iter() {
        println!("- {}", warning);
    }
}
