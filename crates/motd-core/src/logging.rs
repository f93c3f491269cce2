use std::path::PathBuf;

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `MOTD_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/motd/`
/// Linux: `$XDG_DATA_HOME/motd/logs/` or `~/.local/share/motd/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MOTD_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("motd");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("motd").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Remove MOTD log files older than `max_age_days` from the given directory.
///
/// Only deletes files whose name starts with `motd.log` (the prefix used by
/// the daily rolling appender) to avoid touching unrelated files if the log
/// directory is shared.
fn cleanup_old_logs(log_path: &std::path::Path, max_age_days: u64) {
    let cutoff =
        std::time::SystemTime::now() - std::time::Duration::from_secs(max_age_days * 86400);
    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with("motd.log") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if let Ok(modified) = meta.modified() {
                    if modified < cutoff {
                        let _ = std::fs::remove_file(entry.path());
                    }
                }
            }
        }
    }
}

/// Initialize the logging subsystem.
///
/// Filter controlled by `MOTD_LOG` or `RUST_LOG` (default: `info`).
/// Output: daily rotation in `log_dir()`, 7-day retention. Nothing is
/// written to stdout or stderr — stdout carries only the assembled document.
pub fn init() {
    let filter = EnvFilter::try_from_env("MOTD_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_dir();
    if std::fs::create_dir_all(&log_path).is_err() {
        // No writable log location; run silently rather than fail the MOTD.
        return;
    }

    cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, "motd.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("MOTD_LOG_DIR").ok();

        std::env::set_var("MOTD_LOG_DIR", "/tmp/motd-test-logs");
        assert_eq!(log_dir(), PathBuf::from("/tmp/motd-test-logs"));

        match original {
            Some(v) => std::env::set_var("MOTD_LOG_DIR", v),
            None => std::env::remove_var("MOTD_LOG_DIR"),
        }
    }

    #[test]
    fn cleanup_old_logs_removes_stale_files() {
        let tmp = std::env::temp_dir().join("motd-test-cleanup");
        let _ = std::fs::create_dir_all(&tmp);

        let motd_a = tmp.join("motd.log.2026-01-01");
        let motd_b = tmp.join("motd.log.2026-01-02");
        let other = tmp.join("other.txt");
        std::fs::write(&motd_a, "a").unwrap();
        std::fs::write(&motd_b, "b").unwrap();
        std::fs::write(&other, "c").unwrap();

        // max_age_days=0 means cutoff is "now", so all matching files get cleaned
        cleanup_old_logs(&tmp, 0);
        assert!(!motd_a.exists(), "motd log file should be deleted");
        assert!(!motd_b.exists(), "motd log file should be deleted");
        assert!(other.exists(), "non-motd file should be preserved");

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
