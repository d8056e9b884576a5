use chrono::DateTime;

use crate::models::SeatNumbers;

/// Display string for the seat numbers of a booking, whatever shape the
/// backend sent
pub fn format_seat_numbers(seats: Option<&SeatNumbers>) -> String {
    match seats {
        Some(SeatNumbers::List(list)) if !list.is_empty() => list
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        Some(SeatNumbers::Single(n)) => n.to_string(),
        Some(SeatNumbers::Text(text)) if !text.trim().is_empty() => text.clone(),
        _ => "N/A".to_string(),
    }
}

/// First 8 characters of a booking id, followed by an ellipsis
pub fn short_booking_id(booking_id: &str) -> String {
    let short: String = booking_id.chars().take(8).collect();
    format!("{}...", short)
}

/// RFC 3339 timestamps are shown as "12 Mar 2025, 08:30"; anything else as sent
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        Some(value) => match DateTime::parse_from_rfc3339(value) {
            Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
            Err(_) => value.to_string(),
        },
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_numbers_list() {
        let seats = SeatNumbers::List(vec![1, 2, 3]);
        assert_eq!(format_seat_numbers(Some(&seats)), "1, 2, 3");
    }

    #[test]
    fn seat_numbers_single() {
        assert_eq!(format_seat_numbers(Some(&SeatNumbers::Single(5))), "5");
    }

    #[test]
    fn seat_numbers_text_passes_through() {
        let seats = SeatNumbers::Text("14-16".to_string());
        assert_eq!(format_seat_numbers(Some(&seats)), "14-16");
    }

    #[test]
    fn seat_numbers_absent_or_empty() {
        assert_eq!(format_seat_numbers(None), "N/A");
        assert_eq!(format_seat_numbers(Some(&SeatNumbers::List(vec![]))), "N/A");
        assert_eq!(format_seat_numbers(Some(&SeatNumbers::Text(" ".into()))), "N/A");
    }

    #[test]
    fn booking_id_is_shortened() {
        assert_eq!(short_booking_id("0123456789abcdef"), "01234567...");
        assert_eq!(short_booking_id("42"), "42...");
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            format_timestamp(Some("2025-03-12T08:30:00+00:00")),
            "12 Mar 2025, 08:30"
        );
        assert_eq!(format_timestamp(Some("08:30")), "08:30");
        assert_eq!(format_timestamp(None), "N/A");
    }
}
