use std::io::{self, Write};

use colored::Colorize;

use crate::api::RosterApi;
use crate::cli::print;
use crate::cli::reader::LineReader;
use crate::commands::CmdMessage;
use crate::error::{Result, RosterError};
use crate::input::{self, MenuChoice};
use crate::model::EmployeeFields;

/// The interactive menu loop: render the menu, read a choice, dispatch to
/// the API, repeat until exit. Single-threaded and blocking; every read
/// waits indefinitely for the operator.
///
/// Malformed field input never leaves its retry loop, and a not-found id
/// only aborts the one operation that hit it. The only error that escapes
/// [`run`](Self::run) is an I/O failure on the terminal itself.
pub struct Controller<R: LineReader> {
    api: RosterApi,
    reader: R,
}

impl<R: LineReader> Controller<R> {
    pub fn new(api: RosterApi, reader: R) -> Self {
        Self { api, reader }
    }

    pub fn api(&self) -> &RosterApi {
        &self.api
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            print::print_menu();
            self.prompt("Enter your choice: ")?;
            let line = self.reader.read_line()?;

            match input::parse_choice(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::Update) => self.handle_update()?,
                Some(MenuChoice::Remove) => self.handle_remove()?,
                Some(MenuChoice::List) => self.handle_list()?,
                None => println!("Invalid choice. Please try again."),
            }

            println!();
        }
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        println!("Add New Employee");
        let fields = self.read_fields(false)?;
        let result = self.api.add_employee(fields)?;
        print::print_messages(&result.messages);
        Ok(())
    }

    // Existence is checked before any field prompt, so an unknown id aborts
    // the flow without asking for the five replacement fields.
    fn handle_update(&mut self) -> Result<()> {
        println!("Update Employee Information");
        let id = match self.read_lookup_id()? {
            Some(id) if self.api.find_employee(id).is_some() => id,
            _ => {
                print_not_found();
                return Ok(());
            }
        };

        let fields = self.read_fields(true)?;
        match self.api.update_employee(id, fields) {
            Ok(result) => print::print_messages(&result.messages),
            Err(RosterError::EmployeeNotFound(_)) => print_not_found(),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        println!("Remove Employee");
        let id = match self.read_lookup_id()? {
            Some(id) => id,
            None => {
                print_not_found();
                return Ok(());
            }
        };

        match self.api.remove_employee(id) {
            Ok(result) => print::print_messages(&result.messages),
            Err(RosterError::EmployeeNotFound(_)) => print_not_found(),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        println!("List of Employees");
        println!("-----------------");
        let result = self.api.list_employees()?;
        print::print_employees(&result.listed);
        print::print_messages(&result.messages);
        Ok(())
    }

    fn read_fields(&mut self, renamed: bool) -> Result<EmployeeFields> {
        let tag = if renamed { "New " } else { "" };
        let first_name = self.read_text(&format!("Enter {tag}First Name: "))?;
        let last_name = self.read_text(&format!("Enter {tag}Last Name: "))?;
        let date = self.read_date(&format!("Enter {tag}Date of Employment (mm/dd/yy): "))?;
        let salary = self.read_salary(&format!("Enter {tag}Salary: "))?;
        let department = self.read_text(&format!("Enter {tag}Department: "))?;
        Ok(EmployeeFields::new(
            first_name, last_name, date, salary, department,
        ))
    }

    fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.reader.read_line()
    }

    /// Negative ids parse as integers and are reported as not-found by the
    /// caller; the store never assigns them.
    fn read_lookup_id(&mut self) -> Result<Option<u32>> {
        loop {
            self.prompt("Enter Employee ID: ")?;
            let line = self.reader.read_line()?;
            match input::parse_lookup_id(&line) {
                Ok(value) => return Ok(u32::try_from(value).ok()),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
    }

    fn read_salary(&mut self, prompt: &str) -> Result<f64> {
        loop {
            self.prompt(prompt)?;
            let line = self.reader.read_line()?;
            match input::parse_salary(&line) {
                Ok(value) => return Ok(value),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
    }

    fn read_date(&mut self, prompt: &str) -> Result<String> {
        loop {
            self.prompt(prompt)?;
            let line = self.reader.read_line()?;
            match input::parse_date(&line) {
                Ok(date) => return Ok(date),
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
    }

    fn prompt(&self, text: &str) -> Result<()> {
        print!("{}", text);
        io::stdout().flush()?;
        Ok(())
    }
}

fn print_not_found() {
    print::print_messages(&[CmdMessage::error("Employee not found!")]);
}
