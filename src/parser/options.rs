//! Parsing options and configuration.

/// Label that marks the start of a line item (looked for in cell 1).
pub const DEFAULT_MARKER_LABEL: &str = "SKU";

/// Category label that flags a sheathing item (looked for in cell 2).
pub const DEFAULT_SHEATHING_LABEL: &str = "Sheathing";

/// Minimum marker-row width for a dimensional item to carry footage data.
pub const DEFAULT_MIN_DIMENSIONAL_CELLS: usize = 8;

/// Options for reconstructing line items from table rows.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Substring identifying a marker row (cell 1)
    pub marker_label: String,

    /// Substring identifying a sheathing item (marker row cell 2)
    pub sheathing_label: String,

    /// What to do when a dimensional item has no size row before it
    pub size_policy: SizePolicy,

    /// Marker rows narrower than this carry no quantity or footage
    pub min_dimensional_cells: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker label.
    pub fn with_marker_label(mut self, label: impl Into<String>) -> Self {
        self.marker_label = label.into();
        self
    }

    /// Set the sheathing label.
    pub fn with_sheathing_label(mut self, label: impl Into<String>) -> Self {
        self.sheathing_label = label.into();
        self
    }

    /// Set the size policy.
    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    /// Reuse the last resolved size when a dimensional item has none.
    pub fn carry_forward(mut self) -> Self {
        self.size_policy = SizePolicy::CarryForward;
        self
    }

    /// Set the minimum marker-row width for footage data.
    pub fn with_min_dimensional_cells(mut self, cells: usize) -> Self {
        self.min_dimensional_cells = cells;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker_label: DEFAULT_MARKER_LABEL.to_string(),
            sheathing_label: DEFAULT_SHEATHING_LABEL.to_string(),
            size_policy: SizePolicy::FailFast,
            min_dimensional_cells: DEFAULT_MIN_DIMENSIONAL_CELLS,
        }
    }
}

/// Handling of a dimensional item whose size row is missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Stop with a layout mismatch
    #[default]
    FailFast,
    /// Reuse the most recently resolved size, failing only if there is none
    CarryForward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_marker_label("Item #")
            .with_sheathing_label("Panel")
            .with_min_dimensional_cells(9)
            .carry_forward();

        assert_eq!(options.marker_label, "Item #");
        assert_eq!(options.sheathing_label, "Panel");
        assert_eq!(options.min_dimensional_cells, 9);
        assert_eq!(options.size_policy, SizePolicy::CarryForward);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.marker_label, "SKU");
        assert_eq!(options.sheathing_label, "Sheathing");
        assert_eq!(options.size_policy, SizePolicy::FailFast);
        assert_eq!(options.min_dimensional_cells, 8);
    }
}
