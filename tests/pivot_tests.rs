use chrono::NaiveDate;
use rtimesheet::core::{DateRange, LeaveMap, build_pivot_report};
use rtimesheet::models::{DayCell, EntryRow};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn entry(user: &str, team: &str, workdate: &str, loc: &str, seconds: i64) -> EntryRow {
    EntryRow {
        user_id: 1,
        username: user.to_string(),
        role: "Engineer".to_string(),
        team_name: team.to_string(),
        workdate: date(workdate),
        location: loc.to_string(),
        duration_seconds: seconds,
        activity_name: "Development".to_string(),
        is_labeled: false,
        label_symbol: None,
    }
}

fn leave_entry(user: &str, team: &str, workdate: &str, activity: &str) -> EntryRow {
    EntryRow {
        duration_seconds: 0,
        activity_name: activity.to_string(),
        location: String::new(),
        ..entry(user, team, workdate, "", 0)
    }
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end)).unwrap()
}

#[test]
fn test_empty_input_produces_no_rows_and_no_totals() {
    let report = build_pivot_report(&[], &range("2025-09-01", "2025-09-03"), &LeaveMap::default());
    assert!(report.rows.is_empty());
    assert_eq!(report.skipped_rows, 0);
    // header still carries the full column set
    assert_eq!(report.columns.len(), 6 + 3);
    assert_eq!(report.columns[6], "2025-09-01");
}

#[test]
fn test_one_user_one_day() {
    let rows = vec![entry("ann", "Alpha", "2025-09-01", "on-site", 28800)];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-02"), &LeaveMap::default());

    // one data row + totals
    assert_eq!(report.rows.len(), 2);

    let r = &report.rows[0];
    assert_eq!(r.name, "ann");
    assert_eq!(r.team, "Alpha");
    assert_eq!(r.total_work, 8.0);
    assert_eq!(r.onsite, 8.0);
    assert_eq!(r.offsite, 0.0);
    assert_eq!(r.days.len(), 2);
    assert_eq!(r.days[0], DayCell::Duration(8.0));
    // the day without entries stays a plain zero
    assert_eq!(r.days[1], DayCell::Zero);
}

#[test]
fn test_unspecified_location_counts_toward_total_only() {
    let rows = vec![
        entry("ann", "Alpha", "2025-09-01", "on-site", 3600),
        entry("ann", "Alpha", "2025-09-01", "", 1800),
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    let r = &report.rows[0];
    assert_eq!(r.total_work, 1.30); // 5400 s in total
    assert_eq!(r.onsite, 1.0);
    assert_eq!(r.offsite, 0.0); // onsite + offsite need not equal total
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let mut bad_duration = entry("ann", "Alpha", "2025-09-01", "on-site", 3600);
    bad_duration.duration_seconds = -60;
    let bad_location = entry("ann", "Alpha", "2025-09-01", "moon-base", 3600);
    let good = entry("ann", "Alpha", "2025-09-01", "on-site", 3600);

    let rows = vec![bad_duration, bad_location, good];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    assert_eq!(report.skipped_rows, 2);
    // the good row still produces a report
    assert_eq!(report.rows[0].total_work, 1.0);
}

#[test]
fn test_vacation_day_resolves_to_symbol() {
    let rows = vec![leave_entry("ann", "Alpha", "2025-09-01", "Vacation")];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    assert_eq!(report.rows[0].days[0], DayCell::Leave("V".to_string()));
}

#[test]
fn test_label_beats_static_map() {
    let mut labeled = leave_entry("ann", "Alpha", "2025-09-01", "Vacation");
    labeled.is_labeled = true;
    labeled.label_symbol = Some("RH".to_string());

    let rows = vec![leave_entry("ann", "Alpha", "2025-09-01", "vacation"), labeled];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    assert_eq!(report.rows[0].days[0], DayCell::Leave("RH".to_string()));
}

#[test]
fn test_worked_time_beats_any_leave_evidence() {
    let mut worked = entry("ann", "Alpha", "2025-09-01", "on-site", 3600);
    worked.activity_name = "Vacation".to_string();

    let rows = vec![worked];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    assert_eq!(report.rows[0].days[0], DayCell::Duration(1.0));
}

#[test]
fn test_map_declaration_order_decides_between_activities() {
    // both sick and vacation seen on the same zero day; vacation comes
    // first in the table, so V wins regardless of row order
    let rows = vec![
        leave_entry("ann", "Alpha", "2025-09-01", "sick"),
        leave_entry("ann", "Alpha", "2025-09-01", "vacation"),
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    assert_eq!(report.rows[0].days[0], DayCell::Leave("V".to_string()));
}

#[test]
fn test_rows_sorted_by_team_then_name() {
    let rows = vec![
        entry("bob", "Alpha", "2025-09-01", "on-site", 3600),
        entry("zoe", "Beta", "2025-09-01", "on-site", 3600),
        entry("ann", "Alpha", "2025-09-01", "on-site", 3600),
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ann", "bob", "zoe", "Totals"]);
    assert_eq!(report.rows[0].team, "Alpha");
    assert_eq!(report.rows[2].team, "Beta");
}

#[test]
fn test_user_under_two_teams_yields_two_rows() {
    let rows = vec![
        entry("ann", "Alpha", "2025-09-01", "on-site", 3600),
        entry("ann", "Beta", "2025-09-02", "on-site", 7200),
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-02"), &LeaveMap::default());

    // two data rows + totals
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[0].team, "Alpha");
    assert_eq!(report.rows[0].total_work, 1.0);
    assert_eq!(report.rows[0].days[1], DayCell::Zero);
    assert_eq!(report.rows[1].team, "Beta");
    assert_eq!(report.rows[1].total_work, 2.0);
    assert_eq!(report.rows[1].days[0], DayCell::Zero);
}

#[test]
fn test_totals_are_minute_exact() {
    // 1.30 + 1.45 + 0.20 = 90 + 105 + 20 = 215 min = 3.35, never the
    // naive float sum 2.95
    let rows = vec![
        entry("ann", "Alpha", "2025-09-01", "on-site", 5400),  // 1.30
        entry("bob", "Alpha", "2025-09-01", "on-site", 6300),  // 1.45
        entry("zoe", "Alpha", "2025-09-01", "on-site", 1200),  // 0.20
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    let totals = report.rows.last().unwrap();
    assert!(totals.is_totals());
    assert_eq!(totals.role, "");
    assert_eq!(totals.team, "");
    assert_eq!(totals.total_work, 3.35);
    assert_eq!(totals.days[0], DayCell::Duration(3.35));
}

#[test]
fn test_leave_cells_contribute_zero_to_totals() {
    let rows = vec![
        entry("ann", "Alpha", "2025-09-01", "on-site", 5400),
        leave_entry("bob", "Alpha", "2025-09-01", "vacation"),
    ];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &LeaveMap::default());

    let totals = report.rows.last().unwrap();
    assert_eq!(totals.days[0], DayCell::Duration(1.30));
}

#[test]
fn test_custom_leave_map_is_honored() {
    let map = LeaveMap::new(&[("standby", "SB")]);
    let rows = vec![leave_entry("ann", "Alpha", "2025-09-01", "Standby")];
    let report = build_pivot_report(&rows, &range("2025-09-01", "2025-09-01"), &map);

    assert_eq!(report.rows[0].days[0], DayCell::Leave("SB".to_string()));
}
