use anyhow::Result;

use motd_config::WidgetSpec;
use motd_core::ansi::colorize;
use motd_core::widget::Widget;

/// Horizontal separator line spanning the configured width.
pub struct SeparatorWidget {
    ch: String,
    color: Option<String>,
    bold: bool,
    width: u16,
}

impl SeparatorWidget {
    pub fn new(spec: &WidgetSpec, width: u16) -> Self {
        Self {
            ch: spec.opt_str("char").unwrap_or("─").to_string(),
            color: spec.opt_str("color").map(str::to_string),
            bold: spec.opt_bool("bold").unwrap_or(false),
            width,
        }
    }
}

impl Widget for SeparatorWidget {
    fn name(&self) -> &'static str {
        "separator"
    }

    fn render(&self) -> Result<Vec<String>> {
        let mut line = self.ch.repeat(self.width as usize);
        if let Some(color) = &self.color {
            line = colorize(&line, color, self.bold);
        }
        Ok(vec![line])
    }
}
