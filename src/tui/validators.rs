//! Input validators shared by the editors

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

pub fn no_validation(_input: &str) -> Result<(), ValidationError> {
    Ok(())
}

pub fn only_letters(input: &str) -> Result<(), ValidationError> {
    if input.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(ValidationError::new("Input must contain only letters"))
    }
}

pub fn only_letters_or_spaces(input: &str) -> Result<(), ValidationError> {
    if input.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(())
    } else {
        Err(ValidationError::new("Input must contain only letters or spaces"))
    }
}

pub fn state_code(input: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() == 2 && chars.iter().all(|c| c.is_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::new("State must be a two-letter code"))
    }
}

/// Parse `mm/dd/yyyy`; month and day may be a single digit, the year must have four
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('/').collect();
    let [month, day, year] = parts[..] else {
        return None;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    if !digits(month, 1, 2) || !digits(day, 1, 2) || !digits(year, 4, 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn invalid_date() -> ValidationError {
    ValidationError::new("Date must be a valid date formatted mm/dd/yyyy")
}

/// Valid date no later than `today`
pub fn past_date_as_of(input: &str, today: NaiveDate) -> Result<(), ValidationError> {
    match parse_date(input) {
        Some(date) if date <= today => Ok(()),
        Some(_) => Err(ValidationError::new("Date must be today or in the past")),
        None => Err(invalid_date()),
    }
}

/// Valid date no earlier than `today`
pub fn future_date_as_of(input: &str, today: NaiveDate) -> Result<(), ValidationError> {
    match parse_date(input) {
        Some(date) if date >= today => Ok(()),
        Some(_) => Err(ValidationError::new("Date must be today or in the future")),
        None => Err(invalid_date()),
    }
}

pub fn past_date(input: &str) -> Result<(), ValidationError> {
    past_date_as_of(input, today())
}

pub fn future_date(input: &str) -> Result<(), ValidationError> {
    future_date_as_of(input, today())
}
