use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeFields;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, id: u32, fields: EmployeeFields) -> Result<CmdResult> {
    store.update(id, fields)?;
    let employee = store.find(id).cloned();

    let mut result = CmdResult::default().with_affected(employee.into_iter().collect());
    result.add_message(CmdMessage::success(
        "Employee information updated successfully!",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::RosterError;

    #[test]
    fn overwrites_all_fields_but_the_id() {
        let mut store = RecordStore::new();
        add::run(
            &mut store,
            EmployeeFields::new("john", "doe", "01/02/20", 50000.0, "sales"),
        )
        .unwrap();

        let result = run(
            &mut store,
            1,
            EmployeeFields::new("jane", "roe", "03/04/21", 60000.0, "hr"),
        )
        .unwrap();

        assert_eq!(result.affected[0].id, 1);
        let employee = store.find(1).unwrap();
        assert_eq!(employee.full_name(), "Jane Roe");
        assert_eq!(employee.salary, 60000.0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = RecordStore::new();
        let result = run(
            &mut store,
            5,
            EmployeeFields::new("a", "b", "01/01/01", 0.0, "ops"),
        );
        assert!(matches!(result, Err(RosterError::EmployeeNotFound(5))));
        assert!(store.is_empty());
    }
}
