// Monitoring daemon: process-list scanning plus file fingerprint drift
// detection.
//
// Usage: watchd [--interval <seconds>] [--watch <file>]... <pattern>...

use std::path::PathBuf;
use std::process;

use tokio::time::Duration;

mod drift;
mod monitor;

use drift::DriftWatcher;
use monitor::ProcessWatcher;

const DEFAULT_INTERVAL_SECS: u64 = 5;

struct Options {
    patterns: Vec<String>,
    watch_paths: Vec<PathBuf>,
    interval: Duration,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--interval <seconds>] [--watch <file>]... <pattern>...",
        program
    );
    process::exit(1);
}

fn parse_options() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut patterns = Vec::new();
    let mut watch_paths = Vec::new();
    let mut interval = Duration::from_secs(DEFAULT_INTERVAL_SECS);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--interval" => {
                let Some(value) = args.get(i + 1) else {
                    usage(&args[0]);
                };
                match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => interval = Duration::from_secs(secs),
                    _ => usage(&args[0]),
                }
                i += 2;
            }
            "--watch" => {
                let Some(value) = args.get(i + 1) else {
                    usage(&args[0]);
                };
                watch_paths.push(PathBuf::from(value));
                i += 2;
            }
            other => {
                patterns.push(other.to_string());
                i += 1;
            }
        }
    }

    if patterns.is_empty() && watch_paths.is_empty() {
        usage(&args[0]);
    }

    Options {
        patterns,
        watch_paths,
        interval,
    }
}

#[tokio::main]
async fn main() {
    let options = parse_options();

    let mut tasks = Vec::new();

    if !options.patterns.is_empty() {
        println!(
            "watching process list for {} pattern(s), every {}s",
            options.patterns.len(),
            options.interval.as_secs()
        );
        let watcher = ProcessWatcher::new(options.patterns, options.interval, |msg| {
            println!("[ALERT] {}", msg);
        });
        tasks.push(tokio::spawn(async move {
            watcher.run().await;
        }));
    }

    if !options.watch_paths.is_empty() {
        let watcher = DriftWatcher::baseline(options.watch_paths, options.interval, |msg| {
            println!("[ALERT] {}", msg);
        })
        .await;
        let watcher = match watcher {
            Ok(watcher) => watcher,
            Err(err) => {
                eprintln!("ERROR: cannot record baseline: {}", err);
                process::exit(1);
            }
        };
        println!(
            "recorded baseline for {} file(s), re-verifying every {}s",
            watcher.watched(),
            options.interval.as_secs()
        );
        tasks.push(tokio::spawn(async move {
            watcher.run().await;
        }));
    }

    for task in tasks {
        let _ = task.await;
    }
}
