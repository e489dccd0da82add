/// Date and time formatting for table cells and detail views
use chrono::NaiveDate;

/// ISO date (optionally with a time part) to DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T00:00:00.000Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "HH:MM[:SS]" to "HH:MM"
pub fn format_time(time_str: &str) -> String {
    match time_str.split(':').collect::<Vec<_>>().as_slice() {
        [h, m, ..] if h.len() == 2 && m.len() == 2 => format!("{}:{}", h, m),
        _ => time_str.to_string(),
    }
}

/// ISO date prefix usable as the value of an `<input type="date">`
pub fn to_input_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T00:00:00.000Z"), "15/03/2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("07:30:00"), "07:30");
        assert_eq!(format_time("13:05"), "13:05");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
        assert_eq!(format_time("7"), "7");
    }

    #[test]
    fn test_input_date() {
        assert_eq!(to_input_date("2010-05-01T00:00:00Z"), "2010-05-01");
    }
}
