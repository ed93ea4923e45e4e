//! Rendered employee table and the selection set layered over it.

use std::collections::BTreeSet;

use shared::domain::{Employee, EmployeeId};

pub const COLUMN_HEADERS: [&str; 4] = ["First Name", "Last Name", "Email", "Department"];

/// "Delete Selected (N)" action; only exists while at least one row is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionIndicator {
    pub count: usize,
}

impl SelectionIndicator {
    pub fn label(&self) -> String {
        format!("Delete Selected ({})", self.count)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterTable {
    rows: Vec<Employee>,
    selected: BTreeSet<EmployeeId>,
    loaded: bool,
    load_failed: bool,
}

impl RosterTable {
    /// Rebuilds the table from a fresh fetch. Any selection is dropped with the old rows.
    pub fn replace_rows(&mut self, rows: Vec<Employee>) {
        self.rows = rows;
        self.selected.clear();
        self.loaded = true;
        self.load_failed = false;
    }

    /// Records a failed fetch. Rows already rendered stay in place.
    pub fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn row(&self, id: EmployeeId) -> Option<&Employee> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether the most recent fetch failed.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Header (with its select-all checkbox) is only drawn above at least one row.
    pub fn shows_header(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    /// Ids that are not currently rendered are ignored.
    pub fn set_selected(&mut self, id: EmployeeId, checked: bool) -> bool {
        if self.row(id).is_none() {
            return false;
        }
        if checked {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|row| row.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selected.len() == self.rows.len()
    }

    /// Checked ids in table order.
    pub fn selected_ids(&self) -> Vec<EmployeeId> {
        self.rows
            .iter()
            .map(|row| row.id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn selection_indicator(&self) -> Option<SelectionIndicator> {
        match self.selected.len() {
            0 => None,
            count => Some(SelectionIndicator { count }),
        }
    }
}
