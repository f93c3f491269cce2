use std::time::Duration;

use anyhow::Result;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

const API_URL: &str = "https://api.ipify.org";

/// Public-facing IP address.
pub struct PublicIpWidget {
    label: String,
    timeout: Duration,
}

impl PublicIpWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Public IP").to_string(),
            timeout: Duration::from_secs(spec.opt_u64("timeout").unwrap_or(5)),
        }
    }

    fn fetch(&self) -> reqwest::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        client.get(API_URL).send()?.error_for_status()?.text()
    }
}

impl Widget for PublicIpWidget {
    fn name(&self) -> &'static str {
        "public_ip"
    }

    fn render(&self) -> Result<Vec<String>> {
        match self.fetch() {
            Ok(ip) => Ok(vec![format!("{}: {}", self.label, ip.trim())]),
            Err(e) if e.is_connect() => {
                Ok(vec![format!("{}: no internet connection", self.label)])
            }
            Err(e) if e.is_timeout() => Ok(vec![format!("{}: request timed out", self.label)]),
            Err(e) => {
                tracing::debug!(error = %e, "public IP request failed");
                Ok(vec![format!("{}: unavailable ({})", self.label, e)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_and_timeout_come_from_spec() {
        let mut spec = WidgetSpec::of_type("public_ip");
        spec.options.insert("label".into(), json!("WAN"));
        spec.options.insert("timeout".into(), json!(2));
        let widget = PublicIpWidget::new(&spec, 80);
        assert_eq!(widget.label, "WAN");
        assert_eq!(widget.timeout, Duration::from_secs(2));
    }
}
