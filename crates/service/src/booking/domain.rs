use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a zero-padded `YYYY-MM-DD` date. Chrono alone also accepts
/// `2021-1-5` and a leading `+`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(format!("date {s:?} should be YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("date {s:?}: {e}"))
}

fn strict_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(d)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Create input. Dates travel as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    #[serde(default)]
    pub room_id: i32,
    #[serde(deserialize_with = "strict_date")]
    pub date_start: NaiveDate,
    #[serde(deserialize_with = "strict_date")]
    pub date_end: NaiveDate,
}

impl NewBooking {
    /// `date_start` strictly before `date_end`; same-day bookings are invalid.
    pub fn has_valid_dates(&self) -> bool { self.date_start < self.date_end }
}

/// Stored booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "booking_id")]
    pub id: i32,
    pub room_id: i32,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl From<models::booking::Model> for Booking {
    fn from(m: models::booking::Model) -> Self {
        Booking { id: m.id, room_id: m.room_id, date_start: m.date_start, date_end: m.date_end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn date_ordering_is_strict() {
        let mut b = NewBooking { room_id: 1, date_start: date(2021, 1, 5), date_end: date(2021, 1, 8) };
        assert!(b.has_valid_dates());
        b.date_end = b.date_start;
        assert!(!b.has_valid_dates());
        b.date_end = date(2021, 1, 4);
        assert!(!b.has_valid_dates());
    }

    #[test]
    fn wire_format() {
        let b = Booking { id: 1, room_id: 1, date_start: date(2021, 1, 5), date_end: date(2021, 1, 8) };
        assert_eq!(
            serde_json::to_string(&b).unwrap(),
            r#"{"booking_id":1,"room_id":1,"date_start":"2021-01-05","date_end":"2021-01-08"}"#
        );

        let input: NewBooking =
            serde_json::from_str(r#"{"room_id": 1, "date_start": "2021-01-05", "date_end": "2021-01-08"}"#).unwrap();
        assert_eq!(input.date_start, date(2021, 1, 5));
        assert!(serde_json::from_str::<NewBooking>(r#"{"room_id": 1, "date_start": "05.01.2021", "date_end": "2021-01-08"}"#).is_err());
    }

    #[test]
    fn dates_must_be_zero_padded_iso() {
        assert_eq!(parse_date("2021-01-05"), Ok(date(2021, 1, 5)));
        for raw in ["2021-1-5", "+2021-01-05", "2021-01-5", "2021/01/05", "2021-02-30", " 2021-01-05", ""] {
            assert!(parse_date(raw).is_err(), "{raw}");
        }

        let loose = r#"{"room_id": 1, "date_start": "2021-1-5", "date_end": "2021-01-08"}"#;
        assert!(serde_json::from_str::<NewBooking>(loose).is_err());
        let signed = r#"{"room_id": 1, "date_start": "2021-01-05", "date_end": "+2021-01-08"}"#;
        assert!(serde_json::from_str::<NewBooking>(signed).is_err());
    }
}
