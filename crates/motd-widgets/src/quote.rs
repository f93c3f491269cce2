use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

const DEFAULT_QUOTES_PATH: &str = "config/quotes.json";

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    text: String,
    #[serde(default = "unknown_author")]
    author: String,
}

fn unknown_author() -> String {
    "Unknown".to_string()
}

/// Random quote from a JSON quotes file.
pub struct QuoteWidget {
    quotes_path: PathBuf,
    label: Option<String>,
}

impl QuoteWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            quotes_path: PathBuf::from(
                spec.opt_str("quotes_file").unwrap_or(DEFAULT_QUOTES_PATH),
            ),
            label: spec.opt_str("label").map(str::to_string),
        }
    }

    fn format_quote(&self, quote: &Quote) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(label) = &self.label {
            lines.push(label.clone());
        }
        lines.push(format!("  \"{}\"", quote.text));
        lines.push(format!("    — {}", quote.author));
        lines
    }
}

impl Widget for QuoteWidget {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn render(&self) -> Result<Vec<String>> {
        let raw = match std::fs::read_to_string(&self.quotes_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(vec!["Quotes file not found.".to_string()]);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read quotes at {}", self.quotes_path.display())
                })
            }
        };

        let quotes: Vec<Quote> = serde_json::from_str(&raw).with_context(|| {
            format!("invalid quotes file at {}", self.quotes_path.display())
        })?;

        match quotes.choose(&mut rand::thread_rng()) {
            Some(quote) => Ok(self.format_quote(quote)),
            None => Ok(vec!["No quotes found.".to_string()]),
        }
    }
}
