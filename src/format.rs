use crate::model::{DisplayBill, RawAmount, RawBill};

const MONTHS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

/// Split a `YYYY-MM-DD` string into components. Rejects anything that is not
/// a real calendar date: wrong segment widths, out-of-range months, days past
/// the month's length (leap years included).
pub fn parse_iso_date(date: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return None;
    }
    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    Some((year, month, day))
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Short display form, e.g. "2004-04-04" -> "4 Avr. 04".
pub fn format_date(date: &str) -> Option<String> {
    let (year, month, day) = parse_iso_date(date)?;
    Some(format!(
        "{} {} {:02}",
        day,
        MONTHS[(month - 1) as usize],
        year % 100
    ))
}

/// Integer currency rendering. Numeric strings are accepted; any other text
/// passes through unchanged and a missing amount renders empty.
pub fn format_amount(amount: Option<&RawAmount>) -> String {
    match amount {
        None => String::new(),
        Some(RawAmount::Number(value)) => format_euros(*value),
        Some(RawAmount::Text(text)) => match text.trim().parse::<f64>() {
            Ok(value) => format_euros(value),
            Err(_) => text.clone(),
        },
    }
}

fn format_euros(value: f64) -> String {
    format!("{} €", value.round() as i64)
}

/// Map the canonical status codes to their display labels; unknown codes
/// pass through unchanged.
pub fn format_status(status: Option<&str>) -> String {
    match status {
        Some("pending") => "En attente".to_string(),
        Some("accepted") => "Accepté".to_string(),
        Some("refused") => "Refusé".to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Turn a raw record into its display projection. Total over its input: a
/// field that cannot be normalized keeps its raw value, and a failed date
/// additionally sets the `date_malformed` tag so the record is never dropped
/// from the list.
pub fn format_bill(raw: &RawBill) -> DisplayBill {
    let (date, date_malformed) = match format_date(&raw.date) {
        Some(display) => (display, false),
        None => (raw.date.clone(), true),
    };
    DisplayBill {
        id: raw.id.clone(),
        kind: raw.kind.clone().unwrap_or_default(),
        name: raw.name.clone().unwrap_or_default(),
        date,
        raw_date: raw.date.clone(),
        amount: format_amount(raw.amount.as_ref()),
        status: format_status(raw.status.as_deref()),
        file_url: raw.file_url.clone(),
        date_malformed,
    }
}
