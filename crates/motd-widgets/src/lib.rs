//! Builtin widget implementations for the MOTD generator.
//!
//! Each widget is an independent data-fetch-and-format unit: it reads its
//! own configuration slice, gathers data (sysinfo, a subprocess, an HTTP
//! endpoint, a file), and returns display lines. Widgets degrade to a
//! one-line "unavailable" message on expected data failures; anything
//! unexpected returns an error and is contained by the engine's dispatch
//! boundary.

pub mod format;
pub mod hostname;
pub mod last_login;
pub mod network;
pub mod os_info;
pub mod processes;
pub mod public_ip;
pub mod quote;
pub mod separator;
pub mod system_stats;
pub mod temperature;
pub mod updates;
pub mod uptime;
pub mod users;
pub mod weather;

use anyhow::Result;
use motd_core::registry::WidgetRegistry;

/// Build the registry of builtin widget types.
pub fn builtin_registry() -> Result<WidgetRegistry> {
    let mut reg = WidgetRegistry::new();
    reg.register("uptime", |s, w| Ok(Box::new(uptime::UptimeWidget::new(s, w))))?;
    reg.register("system_stats", |s, w| {
        Ok(Box::new(system_stats::SystemStatsWidget::new(s, w)))
    })?;
    reg.register("hostname", |s, w| {
        Ok(Box::new(hostname::HostnameWidget::new(s, w)))
    })?;
    reg.register("weather", |s, w| {
        Ok(Box::new(weather::WeatherWidget::new(s, w)))
    })?;
    reg.register("quote", |s, w| Ok(Box::new(quote::QuoteWidget::new(s, w))))?;
    reg.register("network", |s, w| {
        Ok(Box::new(network::NetworkWidget::new(s, w)))
    })?;
    reg.register("last_login", |s, w| {
        Ok(Box::new(last_login::LastLoginWidget::new(s, w)))
    })?;
    reg.register("updates", |s, w| {
        Ok(Box::new(updates::UpdatesWidget::new(s, w)))
    })?;
    reg.register("separator", |s, w| {
        Ok(Box::new(separator::SeparatorWidget::new(s, w)))
    })?;
    reg.register("temperature", |s, w| {
        Ok(Box::new(temperature::TemperatureWidget::new(s, w)))
    })?;
    reg.register("users", |s, w| Ok(Box::new(users::UsersWidget::new(s, w))))?;
    reg.register("processes", |s, w| {
        Ok(Box::new(processes::ProcessesWidget::new(s, w)))
    })?;
    reg.register("os_info", |s, w| {
        Ok(Box::new(os_info::OsInfoWidget::new(s, w)))
    })?;
    reg.register("public_ip", |s, w| {
        Ok(Box::new(public_ip::PublicIpWidget::new(s, w)))
    })?;
    Ok(reg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_all_widget_types() {
        let reg = builtin_registry().unwrap();
        for name in [
            "uptime",
            "system_stats",
            "hostname",
            "weather",
            "quote",
            "network",
            "last_login",
            "updates",
            "separator",
            "temperature",
            "users",
            "processes",
            "os_info",
            "public_ip",
        ] {
            assert!(reg.contains(name), "missing widget type: {name}");
        }
        assert_eq!(reg.len(), 14);
    }

    #[test]
    fn unregistered_type_is_absent() {
        let reg = builtin_registry().unwrap();
        assert!(!reg.contains("gizmo"));
    }

    #[test]
    fn factories_construct_widgets() {
        let reg = builtin_registry().unwrap();
        let spec = motd_config::WidgetSpec::of_type("separator");
        let factory = reg.get("separator").unwrap();
        let widget = factory(&spec, 80).unwrap();
        assert_eq!(widget.name(), "separator");
    }

    #[test]
    fn separator_config_renders_full_width_line() {
        let config = motd_config::MotdConfig::from_json_str(
            r#"{"widgets": [{"type": "separator", "char": "=", "enabled": true}],
                "settings": {"width": 10}}"#,
        )
        .unwrap();
        let reg = builtin_registry().unwrap();
        let engine = motd_core::engine::Engine::new(
            &reg,
            motd_core::engine::RenderSettings {
                spacing: config.settings.spacing,
                width: config.settings.width.unwrap(),
            },
        );
        assert_eq!(engine.assemble(&config.widgets), "==========\n");
    }

    #[test]
    fn missing_quote_file_degrades_without_aborting_run() {
        let config = motd_config::MotdConfig::from_json_str(
            r#"{"widgets": [
                {"type": "quote", "quotes_file": "/nonexistent/quotes.json"},
                {"type": "separator", "char": "-"}
            ], "settings": {"width": 5}}"#,
        )
        .unwrap();
        let reg = builtin_registry().unwrap();
        let engine = motd_core::engine::Engine::new(
            &reg,
            motd_core::engine::RenderSettings {
                spacing: config.settings.spacing,
                width: config.settings.width.unwrap(),
            },
        );
        let out = engine.assemble(&config.widgets);
        assert_eq!(out, "Quotes file not found.\n\n-----\n");
    }
}
