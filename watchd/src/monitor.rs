//! Process-list monitoring
//!
//! Periodically lists running processes and invokes a violation callback
//! on the first command line containing a forbidden pattern. The scan
//! stops after the first hit.

use std::process::Stdio;

use regex::Regex;
use tokio::process::Command;
use tokio::time::{sleep, Duration};

/// One entry from the OS process list
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    pub pid: i32,
    pub command: String,
}

/// Periodic process-list watcher
pub struct ProcessWatcher<F>
where
    F: Fn(String) + Send + Sync + 'static,
{
    forbidden_patterns: Vec<String>,
    scan_interval: Duration,
    on_violation: F,
}

impl<F> ProcessWatcher<F>
where
    F: Fn(String) + Send + Sync + 'static,
{
    pub fn new(forbidden_patterns: Vec<String>, scan_interval: Duration, on_violation: F) -> Self {
        Self {
            forbidden_patterns,
            scan_interval,
            on_violation,
        }
    }

    /// Scan until the first violation, then stop
    pub async fn run(&self) {
        loop {
            sleep(self.scan_interval).await;

            let processes = list_processes().await;
            if let Some((process, pattern)) =
                find_violation(&processes, &self.forbidden_patterns)
            {
                (self.on_violation)(format!(
                    "forbidden process detected: PID={}, CMD={} (pattern '{}')",
                    process.pid, process.command, pattern
                ));
                return;
            }
        }
    }
}

/// First process whose command line contains a forbidden pattern
/// (case-insensitive substring match)
pub fn find_violation<'a>(
    processes: &'a [ProcessInfo],
    patterns: &'a [String],
) -> Option<(&'a ProcessInfo, &'a str)> {
    for process in processes {
        let command = process.command.to_lowercase();
        for pattern in patterns {
            if command.contains(&pattern.to_lowercase()) {
                return Some((process, pattern));
            }
        }
    }
    None
}

/// List running processes for the current OS
pub async fn list_processes() -> Vec<ProcessInfo> {
    if cfg!(target_os = "windows") {
        list_processes_windows().await
    } else {
        list_processes_unix().await
    }
}

async fn list_processes_unix() -> Vec<ProcessInfo> {
    let output = Command::new("ps")
        .arg("-eo")
        .arg("pid,comm")
        .stdout(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            stdout.lines().skip(1).filter_map(parse_ps_line).collect()
        }
        _ => Vec::new(),
    }
}

async fn list_processes_windows() -> Vec<ProcessInfo> {
    let output = Command::new("tasklist").stdout(Stdio::piped()).output().await;

    let Some(line_format) = tasklist_line_format() else {
        return Vec::new();
    };

    match output {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            stdout
                .lines()
                .skip(3) // banner and column headers
                .filter_map(|line| parse_tasklist_line(&line_format, line))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Parse one `ps -eo pid,comm` output line
fn parse_ps_line(line: &str) -> Option<ProcessInfo> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut parts = line.split_whitespace();
    let pid = parts.next()?.parse::<i32>().ok()?;
    let command = parts.collect::<Vec<_>>().join(" ");
    if command.is_empty() {
        return None;
    }
    Some(ProcessInfo { pid, command })
}

/// Parse one `tasklist` output line: image name, then PID
fn parse_tasklist_line(line_format: &Regex, line: &str) -> Option<ProcessInfo> {
    let caps = line_format.captures(line.trim())?;
    let command = caps.get(1)?.as_str().to_string();
    let pid = caps.get(2)?.as_str().parse::<i32>().ok()?;
    Some(ProcessInfo { pid, command })
}

fn tasklist_line_format() -> Option<Regex> {
    Regex::new(r"^(\S+)\s+(\d+)").ok()
}
