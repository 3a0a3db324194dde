// src/export/model.rs

use crate::core::duration;
use crate::core::report::PivotReport;
use crate::models::DetailRow;

/// Flat tabular form shared by every renderer (CSV, JSON, XLSX and the
/// terminal table): a header row plus rows of display strings, column order
/// exactly as the report defines it.
#[derive(Debug)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn pivot_to_table(report: &PivotReport) -> ReportTable {
    let rows = report
        .rows
        .iter()
        .map(|row| {
            let mut out = vec![
                row.name.clone(),
                row.role.clone(),
                row.team.clone(),
                duration::format_hour_min(row.total_work),
                duration::format_hour_min(row.onsite),
                duration::format_hour_min(row.offsite),
            ];
            out.extend(row.days.iter().map(|cell| cell.display()));
            out
        })
        .collect();

    ReportTable {
        headers: report.columns.clone(),
        rows,
    }
}

pub(crate) fn detail_headers() -> Vec<&'static str> {
    vec![
        "name",
        "workdate",
        "weekday",
        "hours",
        "project",
        "jira_ids",
        "description",
        "component",
    ]
}

pub fn detail_to_table(rows: &[DetailRow]) -> ReportTable {
    let table_rows = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.workdate.clone(),
                r.weekday.clone(),
                duration::format_hour_min(r.hours),
                r.project.clone(),
                r.jira_ids.clone(),
                r.description.clone(),
                r.component.clone(),
            ]
        })
        .collect();

    ReportTable {
        headers: detail_headers().iter().map(|h| h.to_string()).collect(),
        rows: table_rows,
    }
}
