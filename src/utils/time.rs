use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Issue date as printed on certificates, e.g. "October 16, 2026".
pub fn certificate_date(dt: DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_long_us_date() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(certificate_date(dt), "March 7, 2026");
    }
}
