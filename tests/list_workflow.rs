//! Integration tests for the list pipeline: seeded collections filtered,
//! paginated and mutated the way the views drive them.

use chrono::NaiveDate;
use staffscope::core::employee::{department_names, Employee, EmployeeStats, EmployeeStatus};
use staffscope::core::filter::{EmployeeFilter, LeaveFilter};
use staffscope::core::fixtures;
use staffscope::core::leave::LeaveStatus;
use staffscope::core::query::paginate;
use staffscope::core::store::{new_record_id, next_badge, Collection};
use staffscope::core::validate::{validate_employee, EmployeeForm};

fn seeded_employees() -> Collection<Employee> {
    Collection::new(fixtures::employees())
}

/// The views keep filtered results as indices into the collection; this is
/// the same projection.
fn filtered_indices(items: &[Employee], filter: &EmployeeFilter) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, e)| filter.matches(e))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn search_is_case_insensitive_over_the_seeded_roster() {
    let employees = seeded_employees();
    let mut filter = EmployeeFilter {
        search: "sAr".into(),
        ..Default::default()
    };
    filter.update_search_cache();

    let hits = filtered_indices(employees.items(), &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(employees.items()[hits[0]].full_name(), "Sarah Johnson");
}

#[test]
fn criteria_combine_with_and_over_the_roster() {
    let employees = seeded_employees();
    let mut filter = EmployeeFilter {
        department: Some("Engineering".into()),
        status: Some(EmployeeStatus::Active),
        ..Default::default()
    };
    filter.update_search_cache();

    // Three Engineering employees are seeded, one of them terminated.
    let hits = filtered_indices(employees.items(), &filter);
    assert_eq!(hits.len(), 2);
    assert!(hits
        .iter()
        .all(|&i| employees.items()[i].status == EmployeeStatus::Active));
}

#[test]
fn pagination_windows_cover_the_filtered_list_exactly() {
    let employees = seeded_employees();
    let indices = filtered_indices(employees.items(), &EmployeeFilter::default());

    let total_pages = paginate(&indices, 3, 1).total_pages;
    assert_eq!(total_pages, 3, "8 employees at 3 per page");

    let mut rebuilt = Vec::new();
    for page in 1..=total_pages {
        let resolved = paginate(&indices, 3, page);
        assert!(resolved.items.len() <= 3);
        rebuilt.extend_from_slice(resolved.items);
    }
    assert_eq!(rebuilt, indices);
}

#[test]
fn stale_page_clamps_after_the_filter_shrinks() {
    let employees = seeded_employees();

    // Page 3 of the unfiltered list is valid...
    let all = filtered_indices(employees.items(), &EmployeeFilter::default());
    assert_eq!(paginate(&all, 3, 3).page_number, 3);

    // ...then a narrow filter shrinks the list to a single page, and the
    // stale page number clamps back into range.
    let mut filter = EmployeeFilter {
        search: "sarah".into(),
        ..Default::default()
    };
    filter.update_search_cache();
    let narrow = filtered_indices(employees.items(), &filter);

    let resolved = paginate(&narrow, 3, 3);
    assert_eq!(resolved.page_number, 1);
    assert_eq!(resolved.total_pages, 1);
    assert_eq!(resolved.items.len(), 1);
}

#[test]
fn new_employee_lands_on_the_first_page() {
    let mut employees = seeded_employees();
    let form = EmployeeForm {
        badge: next_badge(employees.items()),
        first_name: "Nina".into(),
        last_name: "Petrova".into(),
        email: "nina.petrova@staffscope.io".into(),
        phone: "+1 555 0199".into(),
        department: "Engineering".into(),
        position: "Backend Developer".into(),
        status: EmployeeStatus::Active,
        start_date_input: "2025-06-02".into(),
    };
    let record = validate_employee(&form, new_record_id()).expect("complete form");
    assert!(employees.insert_front(record));

    let indices = filtered_indices(employees.items(), &EmployeeFilter::default());
    let first_page = paginate(&indices, 5, 1);
    let first = &employees.items()[first_page.items[0]];
    assert_eq!(first.full_name(), "Nina Petrova");
    assert_eq!(first.badge, "EMP009");
}

#[test]
fn review_updates_only_the_target_request() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let mut requests = Collection::new(fixtures::leave_requests(today));
    let before: Vec<String> = requests.items().iter().map(|r| r.id.clone()).collect();

    assert!(requests.update("lr-001", |r| {
        r.status = LeaveStatus::Approved;
        r.reviewed_by = Some("Anna Brown".into());
        r.reviewed_on = Some(today);
    }));

    let after: Vec<String> = requests.items().iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after, "review must not reorder the list");

    let reviewed = requests.get("lr-001").expect("still present");
    assert_eq!(reviewed.status, LeaveStatus::Approved);
    assert_eq!(reviewed.reviewed_by.as_deref(), Some("Anna Brown"));
    assert_eq!(reviewed.reviewed_on, Some(today));

    // The other pending request is untouched.
    let other = requests.get("lr-004").expect("still present");
    assert_eq!(other.status, LeaveStatus::Pending);
    assert!(other.reviewed_by.is_none());
}

#[test]
fn pending_tab_narrows_after_an_approval() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let mut requests = Collection::new(fixtures::leave_requests(today));
    let pending = LeaveFilter {
        status: Some(LeaveStatus::Pending),
    };

    let count_before = requests.items().iter().filter(|r| pending.matches(r)).count();
    assert_eq!(count_before, 2);

    requests.update("lr-001", |r| r.status = LeaveStatus::Approved);

    let count_after = requests.items().iter().filter(|r| pending.matches(r)).count();
    assert_eq!(count_after, count_before - 1);
}

#[test]
fn publishing_a_version_bumps_only_that_document() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let mut documents = Collection::new(fixtures::documents(today));
    assert_eq!(documents.get("doc-001").unwrap().current_version, "2.3");

    assert!(documents.update("doc-001", |d| {
        d.record_new_version("Anna Brown", Some("Annual refresh".into()), today);
    }));

    let handbook = documents.get("doc-001").unwrap();
    assert_eq!(handbook.current_version, "2.4");
    assert_eq!(handbook.versions.last().unwrap().version, "2.4");
    assert_eq!(handbook.last_modified, today);

    // A neighbouring document is untouched.
    assert_eq!(documents.get("doc-002").unwrap().current_version, "1.1");
}

#[test]
fn department_combo_reflects_the_roster() {
    let employees = seeded_employees();
    let names = department_names(employees.items());
    assert!(names.contains(&"Engineering".to_string()));
    assert!(
        names.windows(2).all(|w| w[0] < w[1]),
        "names must be sorted and distinct: {names:?}"
    );
}

#[test]
fn stats_and_filters_agree_on_the_seeded_roster() {
    let employees = seeded_employees();
    let stats = EmployeeStats::compute(employees.items());
    assert_eq!(stats.total, employees.len());

    for (status, expected) in [
        (EmployeeStatus::Active, stats.active),
        (EmployeeStatus::OnLeave, stats.on_leave),
        (EmployeeStatus::Terminated, stats.terminated),
    ] {
        let filter = EmployeeFilter {
            status: Some(status),
            ..Default::default()
        };
        let n = employees.items().iter().filter(|e| filter.matches(e)).count();
        assert_eq!(n, expected, "{status:?} card and filter disagree");
    }
}
