//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! record operations. It owns the [`RecordStore`] and dispatches; business
//! logic lives in `commands/*.rs` and presentation stays in `cli/`. Any
//! front end (the menu loop, or a test harness) talks to the store only
//! through this type.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeFields};
use crate::store::RecordStore;

pub struct RosterApi {
    store: RecordStore,
}

impl RosterApi {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, fields: EmployeeFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn update_employee(
        &mut self,
        id: u32,
        fields: EmployeeFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn remove_employee(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Pure lookup, used by the update flow to abort before prompting for
    /// fields when the target id does not exist.
    pub fn find_employee(&self, id: u32) -> Option<&Employee> {
        self.store.find(id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_through_the_store() {
        let mut api = RosterApi::new(RecordStore::new());
        api.add_employee(EmployeeFields::new("john", "doe", "01/02/20", 50000.0, "sales"))
            .unwrap();

        assert_eq!(api.find_employee(1).unwrap().full_name(), "John Doe");
        assert!(api.find_employee(2).is_none());

        api.remove_employee(1).unwrap();
        assert!(api.find_employee(1).is_none());
        assert!(api.list_employees().unwrap().listed.is_empty());
    }
}
