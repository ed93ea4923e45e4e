//! Plain-text rendering of the roster view-model.

use client_core::{
    form::EmployeeForm,
    roster::{RosterTable, COLUMN_HEADERS},
    status::{StatusMessage, StatusSeverity},
    workflow::LOAD_FAILED,
    RosterViewModel,
};

const ID_HEADER: &str = "ID";

pub fn format_roster(table: &RosterTable) -> String {
    if !table.shows_header() {
        return "No employees found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = table
        .rows()
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.fields.first_name.clone(),
                e.fields.last_name.clone(),
                e.fields.email.clone(),
                e.fields.department.clone(),
            ]
        })
        .collect();

    let header = [
        ID_HEADER,
        COLUMN_HEADERS[0],
        COLUMN_HEADERS[1],
        COLUMN_HEADERS[2],
        COLUMN_HEADERS[3],
    ];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn format_form(form: &EmployeeForm) -> String {
    let id = form
        .employee_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    format!(
        "{}\n  id:         {id}\n  first name: {}\n  last name:  {}\n  email:      {}\n  department: {}\n",
        form.title(),
        form.fields.first_name,
        form.fields.last_name,
        form.fields.email,
        form.fields.department,
    )
}

pub fn format_status(message: &StatusMessage) -> String {
    let tag = match message.severity {
        StatusSeverity::Success => "ok",
        StatusSeverity::Error => "error",
    };
    format!("[{tag}] {}", message.text)
}

/// Banner text to report when the roster never loaded; `None` once rows are in.
pub fn format_load_failure(view: &RosterViewModel) -> Option<String> {
    if view.roster.has_loaded() {
        return None;
    }
    Some(match view.status.message() {
        Some(message) => format_status(message),
        None => format_status(&StatusMessage::error(LOAD_FAILED)),
    })
}

pub fn print_roster(table: &RosterTable) {
    if table.has_loaded() {
        print!("{}", format_roster(table));
    }
}

pub fn print_form(form: &EmployeeForm) {
    print!("{}", format_form(form));
}

pub fn print_status(message: &StatusMessage) {
    match message.severity {
        StatusSeverity::Success => println!("{}", format_status(message)),
        StatusSeverity::Error => eprintln!("{}", format_status(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{Employee, EmployeeFields, EmployeeId};

    use std::time::Instant;

    use client_core::RosterEvent;

    fn table_with(rows: Vec<Employee>) -> RosterTable {
        let mut table = RosterTable::default();
        table.replace_rows(rows);
        table
    }

    #[test]
    fn renders_header_and_aligned_rows() {
        let table = table_with(vec![
            Employee::new(
                EmployeeId(1),
                EmployeeFields {
                    first_name: "Ada".into(),
                    last_name: "Lovelace".into(),
                    email: "ada@example.com".into(),
                    department: "R&D".into(),
                },
            ),
            Employee::new(
                EmployeeId(12),
                EmployeeFields {
                    first_name: "Grace".into(),
                    last_name: "Hopper".into(),
                    email: "g@example.com".into(),
                    department: "Navy".into(),
                },
            ),
        ]);

        let text = format_roster(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  First Name  Last Name"));
        assert!(lines[2].starts_with("1   Ada         Lovelace"));
        assert!(lines[3].ends_with("Navy"));
    }

    #[test]
    fn empty_roster_has_no_header() {
        assert_eq!(format_roster(&table_with(Vec::new())), "No employees found.\n");
    }

    #[test]
    fn status_lines_are_tagged_by_severity() {
        assert_eq!(
            format_status(&StatusMessage::error("Error loading employees. Please try again.")),
            "[error] Error loading employees. Please try again."
        );
        assert_eq!(
            format_status(&StatusMessage::success("Employee deleted successfully")),
            "[ok] Employee deleted successfully"
        );
    }

    #[test]
    fn form_shows_add_title_when_empty() {
        let form = EmployeeForm::default();
        assert!(format_form(&form).starts_with("Add Employee\n"));
    }

    #[test]
    fn failed_fetch_is_reported_instead_of_a_missing_id() {
        let mut view = RosterViewModel::default();
        view.apply_all(
            [
                RosterEvent::RosterLoadFailed,
                RosterEvent::Status(StatusMessage::error(LOAD_FAILED)),
            ],
            Instant::now(),
        );

        assert_eq!(
            format_load_failure(&view).as_deref(),
            Some("[error] Error loading employees. Please try again.")
        );

        view.apply(RosterEvent::RosterLoaded(Vec::new()), Instant::now());
        assert_eq!(format_load_failure(&view), None);
    }
}
