use std::process::Command;

use anyhow::{Context, Result};

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

use crate::format::plural;

/// Logged-in users and their session types via loginctl.
pub struct UsersWidget {
    label: String,
    show_list: bool,
}

impl UsersWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Users").to_string(),
            show_list: spec.opt_bool("show_list").unwrap_or(true),
        }
    }

    fn session_type(&self, session_id: &str) -> Result<Option<String>> {
        let output = Command::new("loginctl")
            .args([
                "show-session",
                session_id,
                "--property=Type",
                "--property=Remote",
                "--property=RemoteHost",
                "--value",
            ])
            .output()
            .context("failed to run loginctl show-session")?;
        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(classify_session(&raw))
    }
}

impl Widget for UsersWidget {
    fn name(&self) -> &'static str {
        "users"
    }

    fn render(&self) -> Result<Vec<String>> {
        let output = Command::new("loginctl")
            .args(["list-sessions", "--no-legend"])
            .output()
            .context("failed to run loginctl")?;
        let raw = String::from_utf8_lossy(&output.stdout);

        // user -> session type labels, in first-seen order
        let mut users: Vec<(String, Vec<String>)> = Vec::new();

        for (session_id, user) in parse_session_rows(&raw) {
            let Some(type_label) = self.session_type(&session_id)? else {
                continue;
            };

            match users.iter_mut().find(|(name, _)| *name == user) {
                Some((_, types)) => types.push(type_label),
                None => users.push((user, vec![type_label])),
            }
        }

        let unique = users.len();
        let sessions: usize = users.iter().map(|(_, t)| t.len()).sum();

        if unique == 0 {
            return Ok(vec![format!("{}: none", self.label)]);
        }

        let mut lines = vec![format!(
            "{}: {} session{} ({} user{})",
            self.label,
            sessions,
            plural(sessions),
            unique,
            plural(unique)
        )];

        if self.show_list {
            for (user, types) in &users {
                lines.push(format!("  {}: {}", user, types.join(", ")));
            }
        }

        Ok(lines)
    }
}

/// `(session_id, user)` pairs from `loginctl list-sessions --no-legend`.
///
/// Row format: `SESSION UID USER SEAT TTY ...`.
fn parse_session_rows(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                Some((parts[0].to_string(), parts[2].to_string()))
            } else {
                None
            }
        })
        .collect()
}

/// Session type label from `show-session --value` output (Type, Remote,
/// RemoteHost — one per line).
///
/// Background/manager sessions (`unspecified` or empty type) return `None`;
/// remote sessions with a known host become `ssh from <host>`.
fn classify_session(raw: &str) -> Option<String> {
    let mut lines = raw.lines();
    let session_type = lines.next().unwrap_or("").trim();
    let remote = lines.next().unwrap_or("").trim();
    let remote_host = lines.next().unwrap_or("").trim();

    if session_type.is_empty() || session_type == "unspecified" {
        return None;
    }

    if remote == "yes" && !remote_host.is_empty() {
        Some(format!("ssh from {remote_host}"))
    } else {
        Some(session_type.to_string())
    }
}
