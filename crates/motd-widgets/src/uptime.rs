use anyhow::Result;
use sysinfo::System;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

use crate::format::format_uptime;

/// System uptime in a human-readable format.
pub struct UptimeWidget {
    label: String,
}

impl UptimeWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Uptime").to_string(),
        }
    }
}

impl Widget for UptimeWidget {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn render(&self) -> Result<Vec<String>> {
        Ok(vec![format!(
            "{}: {}",
            self.label,
            format_uptime(System::uptime())
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_labeled_line() {
        let widget = UptimeWidget::new(&WidgetSpec::of_type("uptime"), 80);
        let lines = widget.render().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Uptime: "));
        assert!(lines[0].ends_with('m'));
    }

    #[test]
    fn label_option_overrides_default() {
        let mut spec = WidgetSpec::of_type("uptime");
        spec.options
            .insert("label".into(), serde_json::json!("Up for"));
        let widget = UptimeWidget::new(&spec, 80);
        assert!(widget.render().unwrap()[0].starts_with("Up for: "));
    }
}
