use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub timezone: Tz,
}

pub const CITIES: [City; 5] = [
    City { name: "PARIS", timezone: chrono_tz::Europe::Paris },
    City { name: "NEW YORK", timezone: chrono_tz::America::New_York },
    City { name: "TOKYO", timezone: chrono_tz::Asia::Tokyo },
    City { name: "LONDON", timezone: chrono_tz::Europe::London },
    City { name: "DUBAI", timezone: chrono_tz::Asia::Dubai },
];

impl City {
    pub fn by_name(name: &str) -> Option<City> {
        CITIES.iter().copied().find(|city| city.name == name)
    }

    pub fn time_at(&self, now: DateTime<Utc>) -> String {
        format_time(now, self.timezone)
    }
}

impl Default for City {
    fn default() -> Self {
        CITIES[0]
    }
}

/// 24-hour wall-clock time in `tz`, e.g. `09:05:07`.
pub fn format_time(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%H:%M:%S").to_string()
}
