use anyhow::{Context, Result};
use sysinfo::System;

use motd_config::WidgetSpec;
use motd_core::ansi::colorize;
use motd_core::widget::Widget;

/// Hostname banner line.
pub struct HostnameWidget {
    custom_name: Option<String>,
    color: Option<String>,
    bold: bool,
}

impl HostnameWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            custom_name: spec.opt_str("custom_name").map(str::to_string),
            color: spec.opt_str("color").map(str::to_string),
            bold: spec.opt_bool("bold").unwrap_or(false),
        }
    }
}

impl Widget for HostnameWidget {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn render(&self) -> Result<Vec<String>> {
        let name = match &self.custom_name {
            Some(name) => name.clone(),
            None => System::host_name().context("hostname unavailable")?,
        };

        let line = match &self.color {
            Some(color) => colorize(&name, color, self.bold),
            None => name,
        };
        Ok(vec![line])
    }
}
