use anyhow::Result;
use sysinfo::Components;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

use crate::format::format_temp;

/// Hardware sensor temperatures.
pub struct TemperatureWidget {
    label: String,
    show_all: bool,
    unit: String,
}

/// Sensor labels that identify the CPU package reading.
const CPU_SENSOR_HINTS: [&str; 3] = ["package", "tctl", "cpu"];

impl TemperatureWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Temperature").to_string(),
            show_all: spec.opt_bool("show_all").unwrap_or(false),
            unit: spec.opt_str("unit").unwrap_or("f").to_string(),
        }
    }

    fn render_all(&self, readings: &[(String, f32)]) -> Vec<String> {
        let mut lines = vec![format!("{}:", self.label)];
        for (name, celsius) in readings {
            lines.push(format!("  {}: {}", name, format_temp(*celsius, &self.unit)));
        }
        lines
    }

    fn render_summary(&self, readings: &[(String, f32)]) -> Vec<String> {
        let cpu = readings.iter().find(|(name, _)| {
            let lowered = name.to_lowercase();
            CPU_SENSOR_HINTS.iter().any(|hint| lowered.contains(hint))
        });

        match cpu {
            Some((_, celsius)) => {
                vec![format!("{}: {}", self.label, format_temp(*celsius, &self.unit))]
            }
            None => match readings.first() {
                Some((name, celsius)) => vec![format!(
                    "{}: {} ({})",
                    self.label,
                    format_temp(*celsius, &self.unit),
                    name
                )],
                None => vec![format!("{}: no valid readings", self.label)],
            },
        }
    }
}

impl Widget for TemperatureWidget {
    fn name(&self) -> &'static str {
        "temperature"
    }

    fn render(&self) -> Result<Vec<String>> {
        let components = Components::new_with_refreshed_list();

        if components.is_empty() {
            return Ok(vec![format!("{}: no sensors found", self.label)]);
        }

        let readings: Vec<(String, f32)> = components
            .iter()
            .filter_map(|c| c.temperature().map(|t| (c.label().to_string(), t)))
            .filter(|(_, t)| *t > 0.0)
            .collect();

        if self.show_all {
            Ok(self.render_all(&readings))
        } else {
            Ok(self.render_summary(&readings))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(unit: &str, show_all: bool) -> TemperatureWidget {
        let mut spec = WidgetSpec::of_type("temperature");
        spec.options
            .insert("unit".into(), serde_json::json!(unit));
        spec.options
            .insert("show_all".into(), serde_json::json!(show_all));
        TemperatureWidget::new(&spec, 80)
    }

    fn readings(items: &[(&str, f32)]) -> Vec<(String, f32)> {
        items.iter().map(|(n, t)| (n.to_string(), *t)).collect()
    }

    #[test]
    fn summary_prefers_cpu_package_sensor() {
        let w = widget("c", false);
        let lines = w.render_summary(&readings(&[
            ("nvme Composite", 40.0),
            ("coretemp Package id 0", 55.0),
        ]));
        assert_eq!(lines, vec!["Temperature: 55.0°C".to_string()]);
    }

    #[test]
    fn summary_falls_back_to_first_reading_with_chip_name() {
        let w = widget("c", false);
        let lines = w.render_summary(&readings(&[("nvme Composite", 40.0)]));
        assert_eq!(lines, vec!["Temperature: 40.0°C (nvme Composite)".to_string()]);
    }

    #[test]
    fn summary_without_readings_reports_none() {
        let w = widget("c", false);
        let lines = w.render_summary(&[]);
        assert_eq!(lines, vec!["Temperature: no valid readings".to_string()]);
    }

    #[test]
    fn show_all_lists_every_sensor() {
        let w = widget("f", true);
        let lines = w.render_all(&readings(&[("a", 0.0), ("b", 100.0)]));
        assert_eq!(lines[0], "Temperature:");
        assert_eq!(lines[1], "  a: 32.0°F");
        assert_eq!(lines[2], "  b: 212.0°F");
    }
}
