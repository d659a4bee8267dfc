use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The hole cannot be safely rendered or scored
    Error,
    /// Suspicious but non-fatal geometry
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaIssue {
    /// Stable id built from the hole number and the check name
    pub id: String,
    pub hole: u32,
    pub severity: Severity,
    pub message: String,
}

impl QaIssue {
    pub fn error(hole: u32, check: &str, message: impl Into<String>) -> Self {
        Self::new(hole, check, Severity::Error, message)
    }

    pub fn warning(hole: u32, check: &str, message: impl Into<String>) -> Self {
        Self::new(hole, check, Severity::Warning, message)
    }

    fn new(hole: u32, check: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: format!("hole-{}-{}", hole, check),
            hole,
            severity,
            message: message.into(),
        }
    }
}

/// Result of one geometry validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaReport {
    pub checked_at: DateTime<Utc>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Per hole, in check order
    pub issues: Vec<QaIssue>,
}

impl QaReport {
    pub fn from_issues(issues: Vec<QaIssue>, checked_at: DateTime<Utc>) -> Self {
        let error_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        Self {
            checked_at,
            error_count,
            warning_count,
            issues,
        }
    }

    /// No errors; warnings do not block publishing
    pub fn is_publishable(&self) -> bool {
        self.error_count == 0
    }

    pub fn issues_for_hole(&self, hole: u32) -> impl Iterator<Item = &QaIssue> {
        self.issues.iter().filter(move |i| i.hole == hole)
    }

    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            "Course geometry valid: no issues".to_string()
        } else {
            format!(
                "Course geometry issues: {} errors, {} warnings",
                self.error_count, self.warning_count
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_issue_ids_are_stable() {
        let issue = QaIssue::error(4, "tee-missing", "Missing tee point.");
        assert_eq!(issue.id, "hole-4-tee-missing");
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_report_counts() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let report = QaReport::from_issues(
            vec![
                QaIssue::error(1, "a", "x"),
                QaIssue::warning(1, "b", "y"),
                QaIssue::warning(2, "c", "z"),
            ],
            at,
        );

        assert_eq!(report.error_count, 1);
        assert_eq!(report.warning_count, 2);
        assert!(!report.is_publishable());
        assert_eq!(report.issues_for_hole(2).count(), 1);
        assert_eq!(
            report.summary(),
            "Course geometry issues: 1 errors, 2 warnings"
        );
    }

    #[test]
    fn test_report_json_shape() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let report = QaReport::from_issues(vec![QaIssue::warning(3, "w", "m")], at);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["checkedAt"], "2026-03-01T09:30:00Z");
        assert_eq!(value["errorCount"], 0);
        assert_eq!(value["warningCount"], 1);
        assert_eq!(value["issues"][0]["severity"], "warning");
    }
}
