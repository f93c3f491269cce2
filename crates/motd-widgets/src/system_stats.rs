use std::path::Path;

use anyhow::Result;
use sysinfo::{Disks, System};

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

use crate::format::format_usage;

/// CPU, memory, and disk usage arranged in two columns.
pub struct SystemStatsWidget {
    label: String,
    column_gap: usize,
    disk_paths: Vec<String>,
}

impl SystemStatsWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("System Stats").to_string(),
            column_gap: spec.opt_u64("column_gap").unwrap_or(4) as usize,
            disk_paths: spec
                .opt_str_list("disk_paths")
                .unwrap_or_else(|| vec!["/".to_string()]),
        }
    }

    fn cpu_entry(&self) -> String {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        // The first sysinfo reading is always 0%; sample again after the
        // minimum interval to get a real delta.
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();
        format!("CPU:    {:.1}%", sys.global_cpu_usage())
    }

    fn memory_entry(&self) -> String {
        let mut sys = System::new();
        sys.refresh_memory();
        format!(
            "Memory: {}",
            format_usage(sys.used_memory(), sys.total_memory())
        )
    }

    fn disk_entries(&self) -> Vec<String> {
        let disks = Disks::new_with_refreshed_list();
        let mut entries = Vec::new();

        for path in &self.disk_paths {
            let found = disks
                .iter()
                .find(|d| d.mount_point() == Path::new(path.as_str()));
            match found {
                Some(disk) => {
                    let used = disk.total_space().saturating_sub(disk.available_space());
                    entries.push(format!(
                        "Disk:   {} [{}]",
                        format_usage(used, disk.total_space()),
                        mount_label(path),
                    ));
                }
                None => entries.push(format!("Disk:   unavailable [{}]", mount_label(path))),
            }
        }

        entries
    }
}

impl Widget for SystemStatsWidget {
    fn name(&self) -> &'static str {
        "system_stats"
    }

    fn render(&self) -> Result<Vec<String>> {
        let mut entries = vec![self.cpu_entry(), self.memory_entry()];
        entries.extend(self.disk_entries());
        Ok(two_column(&self.label, &entries, self.column_gap))
    }
}

/// Display label for a mount point: its final path component, or the path
/// itself for `/`.
fn mount_label(path: &str) -> &str {
    if path == "/" {
        return path;
    }
    path.rsplit('/').next().unwrap_or(path)
}

/// Arrange entries under a heading in two indented columns.
///
/// The left column takes the extra entry when the count is odd; rows pad the
/// left cell to the widest left entry plus the gap.
fn two_column(label: &str, entries: &[String], gap: usize) -> Vec<String> {
    let mid = entries.len().div_ceil(2);
    let (left, right) = entries.split_at(mid);

    let left_width = left.iter().map(String::len).max().unwrap_or(0);

    let mut lines = vec![label.to_string()];
    for (i, entry) in left.iter().enumerate() {
        match right.get(i) {
            Some(partner) => {
                let padding = left_width - entry.len() + gap;
                lines.push(format!("  {entry}{}{partner}", " ".repeat(padding)));
            }
            None => lines.push(format!("  {entry}")),
        }
    }

    lines
}
