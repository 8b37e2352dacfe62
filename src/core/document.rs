//! Company document records with version history.

use chrono::NaiveDate;

/// Kind of document. Closed set; drives the type badge, the filter combo
/// and the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DocumentKind {
    Policy,
    Handbook,
    Form,
    Announcement,
    Training,
    Other,
}

impl DocumentKind {
    /// Every kind, in display order.
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Policy,
        DocumentKind::Handbook,
        DocumentKind::Form,
        DocumentKind::Announcement,
        DocumentKind::Training,
        DocumentKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Policy => "Policy",
            DocumentKind::Handbook => "Handbook",
            DocumentKind::Form => "Form",
            DocumentKind::Announcement => "Announcement",
            DocumentKind::Training => "Training",
            DocumentKind::Other => "Other",
        }
    }

    /// Glyph shown next to the document name.
    pub fn icon(self) -> &'static str {
        match self {
            DocumentKind::Policy => "📜",
            DocumentKind::Handbook => "📘",
            DocumentKind::Form => "📋",
            DocumentKind::Announcement => "📢",
            DocumentKind::Training => "🎓",
            DocumentKind::Other => "📄",
        }
    }
}

/// One entry in a document's version history.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentVersion {
    /// Version string, e.g. `"2.3"`.
    pub version: String,
    pub uploaded_by: String,
    pub uploaded_at: NaiveDate,
    /// Change notes entered on upload.
    pub notes: Option<String>,
}

/// A company document (policy, form, announcement, ...).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,

    /// Free-form grouping, e.g. `"HR"`, `"Finance"`.
    pub category: String,

    /// Human-readable file size, e.g. `"2.4 MB"`.
    pub size: String,

    pub uploaded_by: String,
    pub uploaded_at: NaiveDate,

    /// Day of the most recent change (upload or new version).
    pub last_modified: NaiveDate,

    /// Departments this document is visible to. Empty means all.
    pub departments: Vec<String>,

    pub description: Option<String>,

    /// Version string of the latest upload, e.g. `"2.3"`.
    pub current_version: String,

    /// Full upload history, oldest first. Always contains at least the
    /// entry matching `current_version`.
    pub versions: Vec<DocumentVersion>,
}

impl Document {
    /// Audience cell text: `"All departments"` or a comma-joined list.
    pub fn audience_label(&self) -> String {
        if self.departments.is_empty() {
            "All departments".to_string()
        } else {
            self.departments.join(", ")
        }
    }

    /// Append a new version entry and promote it to current.
    ///
    /// The version string is derived with [`next_version`]; `today` becomes
    /// the document's `last_modified`.
    pub fn record_new_version(
        &mut self,
        uploaded_by: impl Into<String>,
        notes: Option<String>,
        today: NaiveDate,
    ) {
        let version = next_version(&self.current_version);
        self.versions.push(DocumentVersion {
            version: version.clone(),
            uploaded_by: uploaded_by.into(),
            uploaded_at: today,
            notes,
        });
        self.current_version = version;
        self.last_modified = today;
    }
}

/// Increment the minor component of a `major.minor` version string.
///
/// `"2.3"` becomes `"2.4"`. A version with no dot gains a minor component
/// (`"1"` becomes `"1.1"`), and an unparsable minor restarts at 1
/// (`"2.x"` becomes `"2.1"`).
pub fn next_version(current: &str) -> String {
    match current.trim().split_once('.') {
        Some((major, minor)) => {
            let minor = minor.trim().parse::<u32>().unwrap_or(0);
            format!("{}.{}", major.trim(), minor + 1)
        }
        None => format!("{}.1", current.trim()),
    }
}

/// Distinct category names across `documents`, sorted, for the category
/// filter combo.
pub fn category_names(documents: &[Document]) -> Vec<String> {
    let mut names: Vec<String> = documents.iter().map(|d| d.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Headline counts for the documents view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub total: usize,
    pub policies: usize,
    pub forms: usize,
    pub announcements: usize,
}

impl DocumentStats {
    pub fn compute(documents: &[Document]) -> Self {
        let mut stats = DocumentStats {
            total: documents.len(),
            policies: 0,
            forms: 0,
            announcements: 0,
        };
        for d in documents {
            match d.kind {
                DocumentKind::Policy => stats.policies += 1,
                DocumentKind::Form => stats.forms += 1,
                DocumentKind::Announcement => stats.announcements += 1,
                DocumentKind::Handbook | DocumentKind::Training | DocumentKind::Other => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_document(version: &str) -> Document {
        Document {
            id: "doc-1".into(),
            name: "Employee Handbook".into(),
            kind: DocumentKind::Handbook,
            category: "HR".into(),
            size: "2.4 MB".into(),
            uploaded_by: "Anna Brown".into(),
            uploaded_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            last_modified: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            departments: vec![],
            description: Some("Company policies and culture".into()),
            current_version: version.into(),
            versions: vec![DocumentVersion {
                version: version.into(),
                uploaded_by: "Anna Brown".into(),
                uploaded_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                notes: None,
            }],
        }
    }

    #[test]
    fn test_next_version_bumps_minor() {
        assert_eq!(next_version("2.3"), "2.4");
        assert_eq!(next_version("1.0"), "1.1");
        assert_eq!(next_version("10.19"), "10.20");
    }

    #[test]
    fn test_next_version_without_minor() {
        assert_eq!(next_version("1"), "1.1");
        assert_eq!(next_version("2.x"), "2.1");
        assert_eq!(next_version(" 3 "), "3.1");
    }

    #[test]
    fn test_record_new_version() {
        let mut doc = make_document("2.3");
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        doc.record_new_version("Sarah Johnson", Some("Updated PTO section".into()), today);

        assert_eq!(doc.current_version, "2.4");
        assert_eq!(doc.last_modified, today);
        assert_eq!(doc.versions.len(), 2);
        let latest = doc.versions.last().unwrap();
        assert_eq!(latest.version, "2.4");
        assert_eq!(latest.uploaded_by, "Sarah Johnson");
    }

    #[test]
    fn test_stats_count_kinds() {
        let mut policy = make_document("1.0");
        policy.kind = DocumentKind::Policy;
        let stats = DocumentStats::compute(&[make_document("1.0"), policy]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.policies, 1);
        // No forms in the fixture set: explicit zero.
        assert_eq!(stats.forms, 0);
    }

    #[test]
    fn test_category_names_sorted_distinct() {
        let mut finance = make_document("1.0");
        finance.category = "Finance".into();
        let docs = vec![make_document("1.0"), finance, make_document("2.0")];
        assert_eq!(category_names(&docs), vec!["Finance", "HR"]);
    }
}
