use anyhow::Result;
use sysinfo::{ProcessesToUpdate, System};

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

/// Running process count.
pub struct ProcessesWidget {
    label: String,
}

impl ProcessesWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Processes").to_string(),
        }
    }
}

impl Widget for ProcessesWidget {
    fn name(&self) -> &'static str {
        "processes"
    }

    fn render(&self) -> Result<Vec<String>> {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        Ok(vec![format!("{}: {}", self.label, sys.processes().len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nonzero_count() {
        let widget = ProcessesWidget::new(&WidgetSpec::of_type("processes"), 80);
        let lines = widget.render().unwrap();
        assert_eq!(lines.len(), 1);
        let count: usize = lines[0].strip_prefix("Processes: ").unwrap().parse().unwrap();
        // This test runs inside at least one process.
        assert!(count >= 1);
    }
}
