use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;
use crate::store::RecordStore;

/// Lists every record. Sorted by id: the store itself guarantees no order,
/// but a stable listing reads better at the terminal.
pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let mut listed: Vec<Employee> = store.list().into_iter().cloned().collect();
    listed.sort_by_key(|employee| employee.id);

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, remove};
    use crate::model::EmployeeFields;

    fn fields(first: &str) -> EmployeeFields {
        EmployeeFields::new(first, "doe", "01/02/20", 50000.0, "sales")
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = RecordStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn lists_all_records_sorted_by_id() {
        let mut store = RecordStore::new();
        add::run(&mut store, fields("a")).unwrap();
        add::run(&mut store, fields("b")).unwrap();
        add::run(&mut store, fields("c")).unwrap();
        remove::run(&mut store, 2).unwrap();

        let result = run(&store).unwrap();
        let ids: Vec<u32> = result.listed.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
