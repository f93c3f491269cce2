use std::process::Command;

use anyhow::{Context, Result};
use sysinfo::System;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

/// Hostname, interface addresses, and default gateway.
pub struct NetworkWidget {
    label: String,
    excluded_interfaces: Vec<String>,
}

impl NetworkWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Network").to_string(),
            excluded_interfaces: spec
                .opt_str_list("excluded_interfaces")
                .unwrap_or_else(|| vec!["lo".to_string()]),
        }
    }

    fn interfaces(&self) -> Result<Vec<(String, String)>> {
        let output = Command::new("ip")
            .args(["-4", "-o", "addr", "show"])
            .output()
            .context("failed to run ip addr")?;
        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(parse_interfaces(&raw, &self.excluded_interfaces))
    }

    fn default_gateway(&self) -> Result<String> {
        let output = Command::new("ip")
            .args(["route", "show", "default"])
            .output()
            .context("failed to run ip route")?;
        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(parse_gateway(&raw))
    }
}

impl Widget for NetworkWidget {
    fn name(&self) -> &'static str {
        "network"
    }

    fn render(&self) -> Result<Vec<String>> {
        let mut lines = vec![format!("{}:", self.label)];

        match System::host_name() {
            Some(hostname) => lines.push(format!("  Hostname:  {hostname}")),
            None => lines.push("  Hostname:  unavailable".to_string()),
        }

        match self.interfaces() {
            Ok(interfaces) if interfaces.is_empty() => {
                lines.push("  Interfaces: none detected".to_string());
            }
            Ok(interfaces) => {
                for (iface, addr) in interfaces {
                    lines.push(format!("  {iface}:  {addr}"));
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "interface listing failed");
                lines.push("  Interfaces: unavailable".to_string());
            }
        }

        match self.default_gateway() {
            Ok(gateway) => lines.push(format!("  Gateway:   {gateway}")),
            Err(e) => {
                tracing::debug!(error = %e, "gateway lookup failed");
                lines.push("  Gateway:   unavailable".to_string());
            }
        }

        Ok(lines)
    }
}

/// Parse `ip -4 -o addr show` output into (interface, address) pairs.
///
/// One-line format per address: `index iface inet addr/prefix ...`.
fn parse_interfaces(raw: &str, excluded: &[String]) -> Vec<(String, String)> {
    let mut interfaces = Vec::new();

    for line in raw.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }
        let iface = parts[1];
        let addr = parts[3].split('/').next().unwrap_or(parts[3]);

        if !excluded.iter().any(|e| e == iface) {
            interfaces.push((iface.to_string(), addr.to_string()));
        }
    }

    interfaces
}

/// Parse `ip route show default` output into a `gateway (iface)` string.
fn parse_gateway(raw: &str) -> String {
    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("default via ") {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            let gateway = parts.first().copied().unwrap_or("");
            // `default via <gw> dev <iface> ...`
            let iface = parts.get(2).copied().unwrap_or("");
            return if iface.is_empty() {
                gateway.to_string()
            } else {
                format!("{gateway} ({iface})")
            };
        }
    }

    "no default route".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP_ADDR_OUTPUT: &str = "\
1: lo    inet 127.0.0.1/8 scope host lo\\       valid_lft forever preferred_lft forever
2: eth0    inet 192.168.1.50/24 brd 192.168.1.255 scope global dynamic eth0\\       valid_lft 86000sec
3: docker0    inet 172.17.0.1/16 brd 172.17.255.255 scope global docker0\\       valid_lft forever";

    fn excluded(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_interfaces_and_strips_prefix() {
        let interfaces = parse_interfaces(IP_ADDR_OUTPUT, &excluded(&["lo"]));
        assert_eq!(
            interfaces,
            vec![
                ("eth0".to_string(), "192.168.1.50".to_string()),
                ("docker0".to_string(), "172.17.0.1".to_string()),
            ]
        );
    }

    #[test]
    fn excluded_interfaces_are_dropped() {
        let interfaces = parse_interfaces(IP_ADDR_OUTPUT, &excluded(&["lo", "docker0"]));
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].0, "eth0");
    }

    #[test]
    fn empty_output_yields_no_interfaces() {
        assert!(parse_interfaces("", &excluded(&["lo"])).is_empty());
    }

    #[test]
    fn gateway_with_device() {
        let raw = "default via 192.168.1.1 dev eth0 proto dhcp metric 100";
        assert_eq!(parse_gateway(raw), "192.168.1.1 (eth0)");
    }

    #[test]
    fn gateway_without_device() {
        assert_eq!(parse_gateway("default via 10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn missing_default_route() {
        assert_eq!(
            parse_gateway("192.168.1.0/24 dev eth0 proto kernel"),
            "no default route"
        );
    }
}
