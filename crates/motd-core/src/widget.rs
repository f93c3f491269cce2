use anyhow::Result;

use motd_config::WidgetSpec;

/// A renderable MOTD widget.
///
/// Widgets are the primary extension point of the generator. Each one is
/// constructed from its own [`WidgetSpec`] slice plus the resolved line
/// width, and exposes a single rendering operation returning its display
/// lines.
///
/// Rendering is fallible by contract: a widget whose data source is missing
/// (sensor, binary, network) returns an error and the engine converts it to
/// an inline diagnostic line. Errors never propagate past the dispatch
/// boundary in [`crate::engine`].
pub trait Widget {
    /// Registry key for this widget (e.g. `"uptime"`, `"separator"`).
    fn name(&self) -> &'static str;

    /// Produce the widget's display lines, top to bottom.
    ///
    /// An empty vector is valid and contributes an empty block.
    fn render(&self) -> Result<Vec<String>>;
}

/// Constructor for a widget: spec slice plus resolved width.
///
/// Construction is part of the containment boundary — a factory error is
/// reported the same way as a render error.
pub type WidgetFactory = fn(&WidgetSpec, u16) -> Result<Box<dyn Widget>>;
