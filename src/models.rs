use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct DayCount {
    pub date: String,
    pub pallets_received: i64,
    pub pallets_delivered: i64,
}

impl DayCount {
    pub fn zeroed(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            pallets_received: 0,
            pallets_delivered: 0,
        }
    }
}

/// The two counters a client may increment, named as they appear in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    PalletsReceived,
    PalletsDelivered,
}

impl CounterKind {
    pub const ALL: [CounterKind; 2] = [CounterKind::PalletsReceived, CounterKind::PalletsDelivered];

    pub fn as_str(self) -> &'static str {
        match self {
            CounterKind::PalletsReceived => "palletsReceived",
            CounterKind::PalletsDelivered => "palletsDelivered",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCounter(pub String);

impl FromStr for CounterKind {
    type Err = UnknownCounter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CounterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownCounter(value.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountsResponse {
    pub pallets_received: i64,
    pub pallets_delivered: i64,
}

impl From<DayCount> for CountsResponse {
    fn from(row: DayCount) -> Self {
        Self {
            pallets_received: row.pallets_received,
            pallets_delivered: row.pallets_delivered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementResponse {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_kind_accepts_only_known_names() {
        assert_eq!("palletsReceived".parse(), Ok(CounterKind::PalletsReceived));
        assert_eq!("palletsDelivered".parse(), Ok(CounterKind::PalletsDelivered));
        assert!("pallets_received".parse::<CounterKind>().is_err());
        assert!("palletsReceived; DROP TABLE counts".parse::<CounterKind>().is_err());
        assert!("".parse::<CounterKind>().is_err());
    }

    #[test]
    fn counts_response_uses_camel_case_keys() {
        let body = serde_json::to_value(CountsResponse {
            pallets_received: 4,
            pallets_delivered: 1,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "palletsReceived": 4, "palletsDelivered": 1 }));
    }
}
