use crate::domain::model::TimeSlot;
use chrono::{NaiveDate, NaiveTime, Timelike};

/// "Monday, March 10, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "2:00 PM", "12:00 PM", "9:00 AM"
pub fn format_time(slot: TimeSlot) -> String {
    format_clock(slot.as_time())
}

pub fn format_clock(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), meridiem)
}

/// Naira amount with en-NG digit grouping: "35.00" -> "₦35", "12500" -> "₦12,500".
///
/// Unparseable input is shown as-is behind the currency sign.
pub fn format_naira(amount: &str) -> String {
    let value: f64 = match amount.trim().parse() {
        Ok(v) => v,
        Err(_) => return format!("₦{}", amount),
    };

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{}₦{}", sign, grouped)
    } else {
        format!("{}₦{}.{}", sign, grouped, frac)
    }
}
