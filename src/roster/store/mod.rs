//! # Record Store
//!
//! The owned, in-memory keyed container for employee records. All mutation
//! goes through the operation-level methods here; callers never reach into
//! the map. Keys always equal the `id` field of the record they hold.
//!
//! Nothing persists. The store is constructed at startup, lives for the
//! session, and is dropped on exit.

use std::collections::HashMap;

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeFields};

#[derive(Debug, Default)]
pub struct RecordStore {
    records: HashMap<u32, Employee>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The smallest positive integer not currently in use as a key, scanning
    /// up from 1. Freed ids are reused by the next insertion. No side effect;
    /// call immediately before [`insert`](Self::insert).
    pub fn next_free_id(&self) -> u32 {
        let mut id = 1;
        while self.records.contains_key(&id) {
            id += 1;
        }
        id
    }

    /// Inserts a record keyed by its own id. The id must have come from
    /// [`next_free_id`](Self::next_free_id).
    pub fn insert(&mut self, employee: Employee) {
        self.records.insert(employee.id, employee);
    }

    /// Pure lookup; `None` when absent.
    pub fn find(&self, id: u32) -> Option<&Employee> {
        self.records.get(&id)
    }

    /// Replaces every mutable field of the record at `id`. On not-found the
    /// store is left untouched.
    pub fn update(&mut self, id: u32, fields: EmployeeFields) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(employee) => {
                employee.apply(fields);
                Ok(())
            }
            None => Err(RosterError::EmployeeNotFound(id)),
        }
    }

    /// Deletes and returns the record at `id`.
    pub fn remove(&mut self, id: u32) -> Result<Employee> {
        self.records
            .remove(&id)
            .ok_or(RosterError::EmployeeNotFound(id))
    }

    /// Every current record, in map order. An empty store yields an empty
    /// vec, which is a valid result and not an error.
    pub fn list(&self) -> Vec<&Employee> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
