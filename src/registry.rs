#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Widget metadata the host registers explicitly at startup, instead of
/// this crate mutating a process-wide widget list as a side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetInfo {
    /// Stable identifier the host uses to look the widget up.
    pub kind: &'static str,
    /// Human-readable name shown in the host's widget picker.
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the host should offer a live preview in its picker.
    pub preview: bool,
    /// Link the host may show next to the widget entry.
    pub documentation_url: Option<&'static str>,
}

/// Metadata for the light panel. The host calls this once at process start
/// and passes the value to its widget registry.
pub fn widget_info() -> WidgetInfo {
    WidgetInfo {
        kind: "light-panel",
        name: "RGB Light Panel",
        description: "Controls an RGB light with preset color buttons",
        preview: false,
        documentation_url: None,
    }
}
