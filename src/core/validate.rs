//! Form validation for the record dialogs.
//!
//! Each dialog owns a plain form struct whose text fields bind directly to
//! egui inputs. Submitting runs a single validation function that either
//! returns the fully-typed record or a list of [`FieldError`]s for inline
//! display. All failing fields are reported in one pass — the user fixes
//! the form once, not one field at a time.

use chrono::NaiveDate;

use crate::core::document::{Document, DocumentKind, DocumentVersion};
use crate::core::employee::{Employee, EmployeeStatus};
use crate::core::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::util::constants::{MAX_NAME_LEN, MAX_REASON_LEN};

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to, e.g. `"email"`. Dialogs use this
    /// to place the message under the right input.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating a form: the typed record, or everything wrong
/// with the input.
pub type Validated<T> = std::result::Result<T, Vec<FieldError>>;

// ── Employee form ───────────────────────────────────────────────────────

/// Edit buffer for the add/edit-employee dialog.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub badge: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    /// Raw `YYYY-MM-DD` text from the start-date input.
    pub start_date_input: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        EmployeeForm {
            badge: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            position: String::new(),
            status: EmployeeStatus::Active,
            start_date_input: String::new(),
        }
    }
}

impl EmployeeForm {
    /// Pre-fill the form from an existing record, for the edit dialog.
    pub fn from_employee(e: &Employee) -> Self {
        EmployeeForm {
            badge: e.badge.clone(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            position: e.position.clone(),
            status: e.status,
            start_date_input: crate::util::time::format_date(e.start_date),
        }
    }
}

/// Validate the employee form, producing the record under `id`.
pub fn validate_employee(form: &EmployeeForm, id: String) -> Validated<Employee> {
    let mut errors = Vec::new();

    let badge = form.badge.trim();
    if badge.is_empty() {
        errors.push(FieldError::new("badge", "Employee ID is required"));
    }

    let first_name = form.first_name.trim();
    if first_name.is_empty() {
        errors.push(FieldError::new("first_name", "First name is required"));
    } else if first_name.chars().count() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "first_name",
            format!("First name must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    let last_name = form.last_name.trim();
    if last_name.is_empty() {
        errors.push(FieldError::new("last_name", "Last name is required"));
    } else if last_name.chars().count() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "last_name",
            format!("Last name must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "A valid email address is required"));
    }

    let phone = form.phone.trim();
    if phone.is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    }

    let department = form.department.trim();
    if department.is_empty() {
        errors.push(FieldError::new("department", "Department is required"));
    }

    let position = form.position.trim();
    if position.is_empty() {
        errors.push(FieldError::new("position", "Position is required"));
    }

    let start_date = match crate::util::time::parse_date_input(&form.start_date_input) {
        Some(d) => Some(d),
        None => {
            errors.push(FieldError::new(
                "start_date",
                "Start date must be YYYY-MM-DD",
            ));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Employee {
        id,
        badge: badge.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        status: form.status,
        // Guarded by the errors check above.
        start_date: start_date.unwrap_or_default(),
    })
}

/// Minimal well-formedness check: one `@`, non-empty local part, a dotted
/// domain, no whitespace. Deliverability is not our problem.
fn is_valid_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ── Leave form ──────────────────────────────────────────────────────────

/// Edit buffer for the new-leave-request dialog.
#[derive(Debug, Clone)]
pub struct LeaveForm {
    pub leave_type: LeaveType,
    pub start_input: String,
    pub end_input: String,
    pub reason: String,
}

impl Default for LeaveForm {
    fn default() -> Self {
        LeaveForm {
            leave_type: LeaveType::Annual,
            start_input: String::new(),
            end_input: String::new(),
            reason: String::new(),
        }
    }
}

/// Validate the leave form into a pending request for `employee`.
pub fn validate_leave(
    form: &LeaveForm,
    id: String,
    employee: &Employee,
    today: NaiveDate,
) -> Validated<LeaveRequest> {
    let mut errors = Vec::new();

    let start_date = crate::util::time::parse_date_input(&form.start_input);
    if start_date.is_none() {
        errors.push(FieldError::new(
            "start_date",
            "Start date must be YYYY-MM-DD",
        ));
    }

    let end_date = crate::util::time::parse_date_input(&form.end_input);
    if end_date.is_none() {
        errors.push(FieldError::new("end_date", "End date must be YYYY-MM-DD"));
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.push(FieldError::new(
                "end_date",
                "End date must not be before the start date",
            ));
        }
    }

    let reason = form.reason.trim();
    if reason.is_empty() {
        errors.push(FieldError::new("reason", "A reason is required"));
    } else if reason.chars().count() > MAX_REASON_LEN {
        errors.push(FieldError::new(
            "reason",
            format!("Reason must be at most {MAX_REASON_LEN} characters"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LeaveRequest {
        id,
        badge: employee.badge.clone(),
        employee_name: employee.full_name(),
        department: employee.department.clone(),
        leave_type: form.leave_type,
        start_date: start_date.unwrap_or_default(),
        end_date: end_date.unwrap_or_default(),
        reason: reason.to_string(),
        status: LeaveStatus::Pending,
        applied_on: today,
        reviewed_by: None,
        reviewed_on: None,
    })
}

// ── Document form ───────────────────────────────────────────────────────

/// Edit buffer for the upload-document dialog.
#[derive(Debug, Clone)]
pub struct DocumentForm {
    pub name: String,
    pub kind: DocumentKind,
    pub category: String,
    pub description: String,
    /// Selected audience; ignored when `all_departments` is set.
    pub departments: Vec<String>,
    pub all_departments: bool,
    /// Human-readable size of the picked file, e.g. `"2.4 MB"`.
    pub size_label: String,
}

impl Default for DocumentForm {
    fn default() -> Self {
        DocumentForm {
            name: String::new(),
            kind: DocumentKind::Policy,
            category: String::new(),
            description: String::new(),
            departments: Vec::new(),
            all_departments: true,
            size_label: String::new(),
        }
    }
}

/// Validate the upload form into a version-1.0 document.
pub fn validate_document(
    form: &DocumentForm,
    id: String,
    uploaded_by: &str,
    today: NaiveDate,
) -> Validated<Document> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new("name", "Document name is required"));
    }

    let category = form.category.trim();
    if category.is_empty() {
        errors.push(FieldError::new("category", "Category is required"));
    }

    if !form.all_departments && form.departments.is_empty() {
        errors.push(FieldError::new(
            "departments",
            "Select at least one department or make the document company-wide",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let description = match form.description.trim() {
        "" => None,
        d => Some(d.to_string()),
    };
    let size = match form.size_label.trim() {
        "" => "-".to_string(),
        s => s.to_string(),
    };
    let departments = if form.all_departments {
        Vec::new()
    } else {
        form.departments.clone()
    };

    Ok(Document {
        id,
        name: name.to_string(),
        kind: form.kind,
        category: category.to_string(),
        size,
        uploaded_by: uploaded_by.to_string(),
        uploaded_at: today,
        last_modified: today,
        departments,
        description,
        current_version: "1.0".to_string(),
        versions: vec![DocumentVersion {
            version: "1.0".to_string(),
            uploaded_by: uploaded_by.to_string(),
            uploaded_at: today,
            notes: Some("Initial upload".to_string()),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_employee_form() -> EmployeeForm {
        EmployeeForm {
            badge: "EMP009".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@staffscope.io".into(),
            phone: "+1 555 0101".into(),
            department: "Engineering".into(),
            position: "Senior Developer".into(),
            status: EmployeeStatus::Active,
            start_date_input: "2022-03-01".into(),
        }
    }

    #[test]
    fn test_complete_employee_form_passes() {
        let e = validate_employee(&complete_employee_form(), "emp-x".into()).unwrap();
        assert_eq!(e.id, "emp-x");
        assert_eq!(e.full_name(), "Sarah Johnson");
        assert_eq!(
            e.start_date,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_empty_employee_form_reports_every_field() {
        let errors = validate_employee(&EmployeeForm::default(), "x".into()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        for expected in [
            "badge",
            "first_name",
            "last_name",
            "email",
            "phone",
            "department",
            "position",
            "start_date",
        ] {
            assert!(fields.contains(&expected), "missing error for {expected}");
        }
    }

    #[test]
    fn test_bad_email_rejected() {
        for bad in ["not-an-email", "a@b", "@x.com", "a b@c.com", "a@b@c.com"] {
            let mut form = complete_employee_form();
            form.email = bad.into();
            let errors = validate_employee(&form, "x".into()).unwrap_err();
            assert!(
                errors.iter().any(|e| e.field == "email"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut form = complete_employee_form();
        form.first_name = "x".repeat(MAX_NAME_LEN + 1);
        let errors = validate_employee(&form, "x".into()).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "first_name"));
    }

    fn employee() -> Employee {
        validate_employee(&complete_employee_form(), "emp-x".into()).unwrap()
    }

    #[test]
    fn test_leave_form_builds_pending_request() {
        let form = LeaveForm {
            leave_type: LeaveType::Annual,
            start_input: "2025-01-10".into(),
            end_input: "2025-01-15".into(),
            reason: "Family holiday".into(),
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let r = validate_leave(&form, "lr-x".into(), &employee(), today).unwrap();
        assert_eq!(r.status, LeaveStatus::Pending);
        assert_eq!(r.applied_on, today);
        assert_eq!(r.employee_name, "Sarah Johnson");
        assert_eq!(r.duration_days(), 6);
    }

    #[test]
    fn test_leave_end_before_start_rejected() {
        let form = LeaveForm {
            leave_type: LeaveType::Sick,
            start_input: "2025-01-15".into(),
            end_input: "2025-01-10".into(),
            reason: "flu".into(),
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let errors = validate_leave(&form, "x".into(), &employee(), today).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "end_date"));
    }

    #[test]
    fn test_document_form_needs_audience() {
        let form = DocumentForm {
            name: "Travel Policy".into(),
            category: "HR".into(),
            all_departments: false,
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let errors = validate_document(&form, "x".into(), "Anna Brown", today).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "departments"));
    }

    #[test]
    fn test_document_form_starts_at_version_one() {
        let form = DocumentForm {
            name: "Travel Policy".into(),
            category: "HR".into(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let d = validate_document(&form, "doc-x".into(), "Anna Brown", today).unwrap();
        assert_eq!(d.current_version, "1.0");
        assert_eq!(d.versions.len(), 1);
        assert!(d.departments.is_empty());
    }
}
