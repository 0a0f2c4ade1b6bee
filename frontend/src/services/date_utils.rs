/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    iso_date(year, month, day)
}

fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format YYYY-MM-DD for display (dd/mm/yyyy)
pub fn format_date_for_display(date_str: &str) -> String {
    shared::format_date_for_display(date_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_pads_components() {
        assert_eq!(iso_date(2024, 3, 1), "2024-03-01");
        assert_eq!(iso_date(2025, 12, 31), "2025-12-31");
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-03-01"), "01/03/2024");
        assert_eq!(format_date_for_display("sin fecha"), "sin fecha");
    }
}
