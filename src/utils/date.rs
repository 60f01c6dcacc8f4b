use chrono::NaiveDateTime;

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// date shown next to a borrower's name in the console listing
pub const SHORT_DATE_FMT: &str = "%Y-%m-%d";

pub fn short_date(time: &NaiveDateTime) -> String {
    time.format(SHORT_DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.format(DATE_FMT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::date::short_date;

    #[tokio::test]
    async fn test_should_format_short_date() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 7).and_then(|d| d.and_hms_opt(15, 4, 5)).expect("valid date");
        assert_eq!("2024-03-07", short_date(&time).as_str());
    }
}
