use crate::core::config::DateFormat;
use chrono::{Local, NaiveDate};

/// Render a date in the configured style
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
  date.format(format.pattern()).to_string()
}

/// Today's date on the local clock of the invoking process
pub fn current_date(format: DateFormat) -> String {
  format_date(Local::now().date_naive(), format)
}
