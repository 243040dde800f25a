use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeFields};
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, fields: EmployeeFields) -> Result<CmdResult> {
    let id = store.next_free_id();
    let employee = Employee::new(id, fields);
    store.insert(employee.clone());

    let mut result = CmdResult::default().with_affected(vec![employee]);
    result.add_message(CmdMessage::success("Employee added successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str) -> EmployeeFields {
        EmployeeFields::new(first, "doe", "01/02/20", 50000.0, "sales")
    }

    #[test]
    fn first_add_gets_id_one() {
        let mut store = RecordStore::new();
        let result = run(&mut store, fields("john")).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].id, 1);
        assert_eq!(store.find(1).unwrap().first_name, "John");
    }

    #[test]
    fn removed_id_is_reused_by_the_next_add() {
        let mut store = RecordStore::new();
        run(&mut store, fields("a")).unwrap();
        store.remove(1).unwrap();
        assert!(store.is_empty());

        let result = run(&mut store, fields("b")).unwrap();
        assert_eq!(result.affected[0].id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stores_normalized_fields() {
        let mut store = RecordStore::new();
        run(
            &mut store,
            EmployeeFields::new("john", "doe", "01/02/20", 50000.0, "sales"),
        )
        .unwrap();

        let employee = store.find(1).unwrap();
        assert_eq!(employee.first_name, "John");
        assert_eq!(employee.last_name, "Doe");
        assert_eq!(employee.date_of_employment, "01/02/20");
        assert_eq!(employee.salary, 50000.0);
        assert_eq!(employee.department, "Sales");
    }
}
