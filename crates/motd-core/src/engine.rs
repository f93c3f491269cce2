//! The layout engine: resolves widgets against the registry, invokes each
//! one under failure containment, groups consecutive same-row entries into
//! side-by-side blocks, and assembles the final document.

use motd_config::WidgetSpec;

use crate::registry::WidgetRegistry;
use crate::row;

/// Resolved document-level options the engine runs with.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Blank lines appended after a block whose spec has no `spaceAfter`.
    pub spacing: u32,
    /// Target line width handed to every widget.
    pub width: u16,
}

pub struct Engine<'a> {
    registry: &'a WidgetRegistry,
    settings: RenderSettings,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a WidgetRegistry, settings: RenderSettings) -> Self {
        Self { registry, settings }
    }

    /// Walk the ordered spec list once and assemble the document.
    ///
    /// Blocks keep their configuration order; a contiguous run of enabled
    /// specs sharing one row number collapses into a single composited
    /// block. The run is terminated by the first non-matching entry — a
    /// different row, a missing row, or a disabled spec. Disabled entries
    /// elsewhere are skipped outright.
    ///
    /// Nothing here can fail: widget errors were already converted to
    /// diagnostic lines by [`dispatch`](Self::dispatch).
    pub fn assemble(&self, specs: &[WidgetSpec]) -> String {
        let mut blocks: Vec<String> = Vec::new();
        let mut i = 0;

        while i < specs.len() {
            let spec = &specs[i];
            if !spec.enabled {
                i += 1;
                continue;
            }

            match spec.row {
                None => {
                    if let Some(lines) = self.dispatch(spec) {
                        blocks.push(self.finish_block(lines.join("\n"), spec.space_after));
                    }
                    i += 1;
                }
                Some(rownum) => {
                    let mut end = i + 1;
                    while end < specs.len()
                        && specs[end].enabled
                        && specs[end].row == Some(rownum)
                    {
                        end += 1;
                    }
                    let group = &specs[i..end];

                    let gap = group[0]
                        .opt_u64("rowGap")
                        .map(|g| g as usize)
                        .unwrap_or(row::DEFAULT_GAP);
                    let columns: Vec<Vec<String>> =
                        group.iter().filter_map(|s| self.dispatch(s)).collect();
                    let block = row::composite(&columns, gap);

                    let last = &group[group.len() - 1];
                    blocks.push(self.finish_block(block, last.space_after));
                    i = end;
                }
            }
        }

        blocks.join("\n")
    }

    /// Invoke one widget with its failure fully contained.
    ///
    /// Returns `None` only for disabled specs. Unknown types and failed
    /// construction or rendering degrade to a one-line diagnostic; they
    /// never abort the run or affect other widgets.
    pub fn dispatch(&self, spec: &WidgetSpec) -> Option<Vec<String>> {
        if !spec.enabled {
            return None;
        }

        let Some(factory) = self.registry.get(&spec.kind) else {
            tracing::debug!(widget = %spec.kind, "unknown widget type");
            return Some(vec![format!("[unknown widget: {}]", spec.kind)]);
        };

        match factory(spec, self.settings.width).and_then(|w| w.render()) {
            Ok(lines) => Some(lines),
            Err(e) => {
                tracing::warn!(widget = %spec.kind, error = %e, "widget failed");
                Some(vec![format!("[{} error: {}]", spec.kind, e)])
            }
        }
    }

    fn finish_block(&self, mut block: String, space_after: Option<u32>) -> String {
        let spacing = space_after.unwrap_or(self.settings.spacing);
        block.push_str(&"\n".repeat(spacing as usize));
        block
    }
}
