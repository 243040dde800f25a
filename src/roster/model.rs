use crate::input::capitalize;

/// The mutable attributes of an employee, everything except the id.
///
/// Name and department text is normalized on construction (first character
/// upper-cased, remainder lower-cased), so records hold the canonical form
/// no matter which path created them.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub salary: f64,
    pub department: String,
}

impl EmployeeFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_employment: impl Into<String>,
        salary: f64,
        department: impl Into<String>,
    ) -> Self {
        Self {
            first_name: capitalize(&first_name.into()),
            last_name: capitalize(&last_name.into()),
            date_of_employment: date_of_employment.into(),
            salary,
            department: capitalize(&department.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// System-assigned, unique within the store, never changes.
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    /// `mm/dd/yy`, structurally validated at entry only.
    pub date_of_employment: String,
    pub salary: f64,
    pub department: String,
}

impl Employee {
    pub fn new(id: u32, fields: EmployeeFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            date_of_employment: fields.date_of_employment,
            salary: fields.salary,
            department: fields.department,
        }
    }

    /// Replaces every field except the id.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.date_of_employment = fields.date_of_employment;
        self.salary = fields.salary;
        self.department = fields.department;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
