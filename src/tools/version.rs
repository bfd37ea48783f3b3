use std::process::Command;

use anyhow::Result;
use chrono::{DateTime, Local};
use log::error;

pub fn print_version() -> Result<()> {
    println!("VERSION  | {}", env!("CARGO_PKG_VERSION"));
    let Some((commit_hash, commit_time)) = git_metadata() else {
        error!("Could not fetch Git metadata.");
        return Ok(());
    };
    println!(
        "GIT TIME | {} [{}]",
        commit_time.format("%Y-%m-%d"),
        commit_time.timestamp()
    );
    println!("GIT HASH | {commit_hash}");
    Ok(())
}

fn git_metadata() -> Option<(String, DateTime<Local>)> {
    let commit_hash = git(&["rev-parse", "--short", "HEAD"])?;
    let commit_time: i64 =
        git(&["log", "-1", "--format=%ct"])?.parse().ok()?;
    let commit_time = DateTime::from_timestamp(commit_time, 0)?;
    Some((commit_hash, commit_time.with_timezone(&Local)))
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
