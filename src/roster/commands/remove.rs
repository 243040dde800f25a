use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, id: u32) -> Result<CmdResult> {
    let employee = store.remove(id)?;

    let mut result = CmdResult::default().with_affected(vec![employee]);
    result.add_message(CmdMessage::success("Employee removed successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::RosterError;
    use crate::model::EmployeeFields;

    #[test]
    fn removes_the_record() {
        let mut store = RecordStore::new();
        add::run(
            &mut store,
            EmployeeFields::new("john", "doe", "01/02/20", 50000.0, "sales"),
        )
        .unwrap();

        let result = run(&mut store, 1).unwrap();
        assert_eq!(result.affected[0].id, 1);
        assert!(store.find(1).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = RecordStore::new();
        let result = run(&mut store, 7);
        assert!(matches!(result, Err(RosterError::EmployeeNotFound(7))));
    }
}
