//! JSON rendering for reports.

use crate::error::{Error, Result};

use super::result::Report;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AggregatedRecord;
    use crate::report::ExtractionStats;

    fn sample() -> Report {
        Report::new(
            vec![AggregatedRecord {
                lumber_size: "2x4".to_string(),
                total_quantity: Some(15),
                total_board_footage: None,
                total_lineal_footage: Some("5' 3.5\"".to_string()),
            }],
            ExtractionStats {
                marker_count: 2,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"lumber_size\": \"2x4\""));
        assert!(json.contains("\"total_board_footage\": null"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"marker_count\":2"));
    }

    #[test]
    fn test_json_reads_back() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let report: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report.records, sample().records);
    }
}
