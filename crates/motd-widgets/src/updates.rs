use std::process::Command;

use anyhow::{Context, Result};

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

use crate::format::plural;

/// Count of available apt package updates.
pub struct UpdatesWidget {
    label: String,
    show_list: bool,
    max_listed: usize,
}

impl UpdatesWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Updates").to_string(),
            show_list: spec.opt_bool("show_list").unwrap_or(false),
            max_listed: spec.opt_u64("max_listed").unwrap_or(10) as usize,
        }
    }
}

impl Widget for UpdatesWidget {
    fn name(&self) -> &'static str {
        "updates"
    }

    fn render(&self) -> Result<Vec<String>> {
        let output = Command::new("apt")
            .args(["list", "--upgradable"])
            .output()
            .context("failed to run apt")?;
        let raw = String::from_utf8_lossy(&output.stdout);

        let packages = parse_upgradable(&raw);
        let count = packages.len();

        if count == 0 {
            return Ok(vec![format!("{}: system is up to date", self.label)]);
        }

        let mut lines = vec![format!(
            "{}: {} package{} available",
            self.label,
            count,
            plural(count)
        )];

        if self.show_list {
            for pkg in packages.iter().take(self.max_listed) {
                lines.push(format!("  - {pkg}"));
            }
            if count > self.max_listed {
                lines.push(format!("  ... and {} more", count - self.max_listed));
            }
        }

        Ok(lines)
    }
}

/// Package names from `apt list --upgradable` output.
///
/// The first line is always the `Listing...` header; package lines look like
/// `name/suite version arch [upgradable from: old]`.
fn parse_upgradable(raw: &str) -> Vec<String> {
    raw.lines()
        .skip(1)
        .filter(|line| line.contains('/'))
        .filter_map(|line| line.split('/').next())
        .map(str::to_string)
        .collect()
}
