//! URL launcher collaborator for app-open voice commands. Spawns the
//! platform opener detached; the calculator never waits on it.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::debug;
use vocalc::OpenTarget;

pub fn open_target(target: OpenTarget) -> Result<()> {
    let url = target.url();
    debug!(site = target.label(), url, "launching opener");
    spawn_opener(url).with_context(|| format!("failed to open {url}"))
}

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> Result<()> {
    Command::new("open")
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn spawn_opener(url: &str) -> Result<()> {
    Command::new("xdg-open")
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
