use crate::workflows::health::{MetricsInput, SocietySnapshot};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::str::FromStr;

pub(crate) fn parse_snapshots<R: Read>(reader: R) -> Result<Vec<SocietySnapshot>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut snapshots = Vec::new();

    for record in csv_reader.deserialize::<SnapshotRow>() {
        let row = record?;
        snapshots.push(row.into_snapshot());
    }

    Ok(snapshots)
}

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    society_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    total_residents: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    active_residents: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    open_issues: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    resolved_issues: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    payment_compliance_rate: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    resident_satisfaction_score: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    community_participation: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    maintenance_response_time: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    notifications_sent: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    notifications_delivered: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    notifications_read: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    previous_overall: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    critical_override: Option<f64>,
}

impl SnapshotRow {
    fn into_snapshot(self) -> SocietySnapshot {
        SocietySnapshot {
            society_id: self.society_id,
            metrics: MetricsInput {
                total_residents: self.total_residents,
                active_residents: self.active_residents,
                open_issues: self.open_issues,
                resolved_issues: self.resolved_issues,
                payment_compliance_rate: self.payment_compliance_rate,
                resident_satisfaction_score: self.resident_satisfaction_score,
                community_participation: self.community_participation,
                maintenance_response_time: self.maintenance_response_time,
                notifications_sent: self.notifications_sent,
                notifications_delivered: self.notifications_delivered,
                notifications_read: self.notifications_read,
            },
            previous_overall: self.previous_overall,
            critical_override: self.critical_override,
        }
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
