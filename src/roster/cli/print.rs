use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::commands::{CmdMessage, MessageLevel};
use crate::model::Employee;

pub(super) fn print_menu() {
    println!("Employee Management System");
    println!("---------------------------");
    println!("1. Add New Employee");
    println!("2. Update Employee Information");
    println!("3. Remove Employee");
    println!("4. List Employee Information");
    println!("0. Exit");
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const SALARY_WIDTH: usize = 12;

pub(super) fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    let name_width = employees
        .iter()
        .map(|e| e.full_name().width())
        .max()
        .unwrap_or(0);

    for employee in employees {
        let name = employee.full_name();
        let padding = " ".repeat(name_width.saturating_sub(name.width()));
        let salary = format!("{:>width$.2}", employee.salary, width = SALARY_WIDTH);

        println!(
            "{:>4}  {}{}  {}  {}  {}",
            employee.id,
            name.bold(),
            padding,
            employee.date_of_employment.dimmed(),
            salary,
            employee.department
        );
    }
}
