use shared::domain::{Employee, EmployeeFields, EmployeeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add Employee",
            FormMode::Edit => "Edit Employee",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Save",
            FormMode::Edit => "Update",
        }
    }
}

/// Where a submitted form is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create(EmployeeFields),
    Update(EmployeeId, EmployeeFields),
}

impl SaveTarget {
    pub fn fields(&self) -> &EmployeeFields {
        match self {
            SaveTarget::Create(fields) | SaveTarget::Update(_, fields) => fields,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Identifier field; populated only while editing an existing employee.
    pub employee_id: Option<EmployeeId>,
    pub fields: EmployeeFields,
    mode: FormMode,
}

impl EmployeeForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn submit(&self) -> SaveTarget {
        match self.employee_id {
            Some(id) => SaveTarget::Update(id, self.fields.clone()),
            None => SaveTarget::Create(self.fields.clone()),
        }
    }

    pub fn populate(&mut self, employee: &Employee) {
        self.employee_id = Some(employee.id);
        self.fields = employee.fields.clone();
        self.mode = FormMode::Edit;
    }

    pub fn reset(&mut self) {
        self.employee_id = None;
        self.fields = EmployeeFields::default();
        self.mode = FormMode::Add;
    }
}
