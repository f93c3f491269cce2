use std::collections::HashSet;
use std::process::Command;

use anyhow::{Context, Result};

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

/// Recent login sessions from the systemd journal.
pub struct LastLoginWidget {
    label: String,
    count: usize,
}

impl LastLoginWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Last Login").to_string(),
            count: spec.opt_u64("count").unwrap_or(3) as usize,
        }
    }
}

impl Widget for LastLoginWidget {
    fn name(&self) -> &'static str {
        "last_login"
    }

    fn render(&self) -> Result<Vec<String>> {
        let output = Command::new("journalctl")
            .args([
                "-t",
                "systemd-logind",
                "--no-pager",
                "-n",
                "50",
                "--output",
                "short",
            ])
            .output()
            .context("failed to run journalctl")?;
        let raw = String::from_utf8_lossy(&output.stdout);

        let mut lines = vec![format!("{}:", self.label)];
        let sessions = parse_sessions(&raw, self.count);

        if sessions.is_empty() {
            lines.push("  No recent logins found".to_string());
        } else {
            for session in sessions {
                lines.push(format!("  {session}"));
            }
        }

        Ok(lines)
    }
}

/// Extract up to `count` unique `user at date` entries from journal output,
/// newest first.
///
/// Journal short format: `Mon DD HH:MM:SS host systemd-logind[pid]: New
/// session N of user name.` — the timestamp is the first three fields.
fn parse_sessions(raw: &str, count: usize) -> Vec<String> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for line in raw.lines().rev() {
        if !line.contains("New session") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let date = format!("{} {} {}", parts[0], parts[1], parts[2]);

        let user = match line.split_once("of user ") {
            Some((_, rest)) => rest.trim_end_matches('.'),
            None => continue,
        };

        if !seen.insert(format!("{user}-{date}")) {
            continue;
        }

        entries.push(format!("{user} at {date}"));
        if entries.len() >= count {
            break;
        }
    }

    entries
}
