use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use fractic_server_error::ServerError;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidStoredDate;

/// Timestamp as stored in `dateISO`, ex. "2024-03-09T14:30:00.000Z".
#[derive(Debug, Clone, Copy)]
pub(crate) struct ISODateTimeModel(DateTime<Utc>);

impl FromStr for ISODateTimeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = DateTime::parse_from_rfc3339(s)
            .map_err(|e| InvalidStoredDate::with_debug(s, &e))?;
        Ok(ISODateTimeModel(d.with_timezone(&Utc)))
    }
}

impl<'de> Deserialize<'de> for ISODateTimeModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateTimeModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateTimeModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ISODateTimeModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<DateTime<Utc>> for ISODateTimeModel {
    fn from(d: DateTime<Utc>) -> Self {
        ISODateTimeModel(d)
    }
}

impl From<ISODateTimeModel> for DateTime<Utc> {
    fn from(m: ISODateTimeModel) -> Self {
        m.0
    }
}
