//! Pure parsing and validation of operator input.
//!
//! Every function here is a function of the raw input text, with no I/O.
//! The controller's retry loops print the [`FieldError`] display text as the
//! diagnostic and re-prompt; nothing in this module ever panics on bad input.

use thiserror::Error;

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Remove,
    List,
    Exit,
}

/// Parses a menu selection. Anything that is not one of the listed numbers,
/// including non-numeric input, is an invalid choice.
pub fn parse_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim().parse::<i64>().ok()? {
        0 => Some(MenuChoice::Exit),
        1 => Some(MenuChoice::Add),
        2 => Some(MenuChoice::Update),
        3 => Some(MenuChoice::Remove),
        4 => Some(MenuChoice::List),
        _ => None,
    }
}

/// Why a field value was rejected. The display text is the exact diagnostic
/// shown to the operator before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid input. Please enter an integer.")]
    NotAnInteger,

    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,

    #[error("Invalid input. Please enter a positive value for salary.")]
    NegativeSalary,

    #[error("Invalid date format. Please enter the date in the format (mm/dd/yy).")]
    BadDateFormat,
}

/// First character upper-cased, the rest lower-cased. Empty stays empty.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

/// Parses an employee id lookup. Negative integers parse fine here and fail
/// later as not-found, matching how the store only ever assigns positive ids.
pub fn parse_lookup_id(raw: &str) -> Result<i64, FieldError> {
    raw.trim().parse().map_err(|_| FieldError::NotAnInteger)
}

/// Parses a salary. Zero is a valid salary; negative is not.
pub fn parse_salary(raw: &str) -> Result<f64, FieldError> {
    let value: f64 = raw.trim().parse().map_err(|_| FieldError::NotANumber)?;
    if value < 0.0 {
        return Err(FieldError::NegativeSalary);
    }
    Ok(value)
}

/// Structural `mm/dd/yy` check: exactly three `/`-separated integer parts,
/// month 1-12, day 1-31, year 0-99. Deliberately no calendar validation, so
/// `02/30/99` passes.
pub fn parse_date(raw: &str) -> Result<String, FieldError> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return Err(FieldError::BadDateFormat);
    }
    let month: i32 = parts[0].parse().map_err(|_| FieldError::BadDateFormat)?;
    let day: i32 = parts[1].parse().map_err(|_| FieldError::BadDateFormat)?;
    let year: i32 = parts[2].parse().map_err(|_| FieldError::BadDateFormat)?;

    if !(1..=12).contains(&month) {
        return Err(FieldError::BadDateFormat);
    }
    if !(1..=31).contains(&day) {
        return Err(FieldError::BadDateFormat);
    }
    if !(0..=99).contains(&year) {
        return Err(FieldError::BadDateFormat);
    }

    Ok(raw.to_string())
}
