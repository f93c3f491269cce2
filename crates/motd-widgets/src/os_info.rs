use anyhow::Result;
use sysinfo::System;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

/// Operating system name, version, and kernel.
pub struct OsInfoWidget {
    label: String,
    show_kernel: bool,
}

impl OsInfoWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("OS").to_string(),
            show_kernel: spec.opt_bool("show_kernel").unwrap_or(true),
        }
    }

    fn describe_os(&self) -> String {
        let name = System::name().unwrap_or_else(|| "Unknown".to_string());
        match System::os_version() {
            Some(version) => format!("{name} {version}"),
            None => name,
        }
    }
}

impl Widget for OsInfoWidget {
    fn name(&self) -> &'static str {
        "os_info"
    }

    fn render(&self) -> Result<Vec<String>> {
        let mut lines = vec![format!("{}: {}", self.label, self.describe_os())];

        if self.show_kernel {
            let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
            let indent = " ".repeat(self.label.len() + 2);
            lines.push(format!("{indent}Kernel: {kernel}"));
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kernel_line_indents_under_value() {
        let widget = OsInfoWidget::new(&WidgetSpec::of_type("os_info"), 80);
        let lines = widget.render().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("OS: "));
        // "OS: " is four columns; the kernel line aligns under the value.
        assert!(lines[1].starts_with("    Kernel: "));
    }

    #[test]
    fn show_kernel_false_renders_single_line() {
        let mut spec = WidgetSpec::of_type("os_info");
        spec.options.insert("show_kernel".into(), json!(false));
        let widget = OsInfoWidget::new(&spec, 80);
        assert_eq!(widget.render().unwrap().len(), 1);
    }
}
