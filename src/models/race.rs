use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

pub type DriverId = String;
pub type RaceId = String;

/// Results of one race, keyed by driver id in ascending order.
pub type RaceResults = BTreeMap<DriverId, RaceResult>;

/// Results of every race in a championship, keyed by race id.
pub type ResultsByRace = HashMap<RaceId, RaceResults>;

/// Scoring regulation applied to a single race weekend.
///
/// Missing or malformed fields score nothing: an absent table is empty and an
/// unreadable bonus is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsSystem {
    /// Points for feature race positions, index 0 being the winner.
    #[serde(default, deserialize_with = "lenient_table")]
    pub feature: Vec<u32>,
    #[serde(default, deserialize_with = "lenient_table")]
    pub sprint: Vec<u32>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub pole: u32,
    #[serde(rename = "fastestLap", default, deserialize_with = "lenient_points")]
    pub fastest_lap: u32,
}

impl Default for PointsSystem {
    fn default() -> Self {
        PointsSystem {
            feature: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
            sprint: vec![15, 12, 10, 8, 6, 4, 2, 1],
            pole: 2,
            fastest_lap: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    #[serde(rename = "pointsSystem", default)]
    pub points_system: PointsSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RetirementStatus {
    Dnf,
    Dsq,
    Dns,
}

impl RetirementStatus {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "DNF" => Some(RetirementStatus::Dnf),
            "DSQ" => Some(RetirementStatus::Dsq),
            "DNS" => Some(RetirementStatus::Dns),
            _ => None,
        }
    }
}

/// Outcome of a sprint or feature race for one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Finish {
    Classified(u32),
    Retired(RetirementStatus),
}

impl Finish {
    pub fn position(&self) -> Option<u32> {
        match self {
            Finish::Classified(position) => Some(*position),
            Finish::Retired(_) => None,
        }
    }

    pub fn is_retirement(&self) -> bool {
        matches!(self, Finish::Retired(_))
    }

    /// Reads a finish from loosely typed input. Anything that is neither a
    /// positive integer nor a status token yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        if let Some(position) = position_from_json(value) {
            return Some(Finish::Classified(position));
        }
        let status = value.as_str().and_then(RetirementStatus::from_token);
        if status.is_none() && !value.is_null() {
            debug!("Ignoring unrecognised finish value {value}");
        }
        status.map(Finish::Retired)
    }
}

fn position_from_json(value: &Value) -> Option<u32> {
    whole_number(value).filter(|position| *position > 0)
}

fn points_from_json(value: &Value) -> u32 {
    let points = whole_number(value);
    if points.is_none() && !value.is_null() {
        debug!("Ignoring unreadable points value {value}");
    }
    points.unwrap_or(0)
}

/// A non-negative integer from a JSON number (`3` or `3.0`) or integer string.
fn whole_number(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX))
                .map(|n| n as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(number).ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(default, deserialize_with = "lenient_position")]
    pub qualifying: Option<u32>,
    #[serde(default, deserialize_with = "lenient_finish")]
    pub sprint: Option<Finish>,
    #[serde(default, deserialize_with = "lenient_finish")]
    pub feature: Option<Finish>,
    #[serde(rename = "sprintFL", default, deserialize_with = "lenient_flag")]
    pub sprint_fastest_lap: bool,
    #[serde(rename = "featureFL", default, deserialize_with = "lenient_flag")]
    pub feature_fastest_lap: bool,
}

impl RaceResult {
    pub fn sprint_position(&self) -> Option<u32> {
        self.sprint.as_ref().and_then(Finish::position)
    }

    pub fn feature_position(&self) -> Option<u32> {
        self.feature.as_ref().and_then(Finish::position)
    }

    pub fn took_pole(&self) -> bool {
        self.qualifying == Some(1)
    }

    pub fn retired_from_feature(&self) -> bool {
        self.feature.as_ref().is_some_and(Finish::is_retirement)
    }

    pub fn set_fastest_lap(&self) -> bool {
        self.sprint_fastest_lap || self.feature_fastest_lap
    }
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(position_from_json))
}

fn lenient_finish<'de, D>(deserializer: D) -> Result<Option<Finish>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Finish::from_json))
}

fn lenient_points<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0, points_from_json))
}

fn lenient_table<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => entries.iter().map(points_from_json).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!("Ignoring points table that is not an array: {other}");
            Vec::new()
        }
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> RaceResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn numeric_strings_and_numbers_are_positions() {
        let result = parse(json!({"qualifying": "4", "sprint": 2, "feature": " 7 "}));
        assert_eq!(result.qualifying, Some(4));
        assert_eq!(result.sprint, Some(Finish::Classified(2)));
        assert_eq!(result.feature, Some(Finish::Classified(7)));
    }

    #[test]
    fn status_tokens_are_retirements() {
        let result = parse(json!({"sprint": "dns", "feature": "DSQ"}));
        assert_eq!(result.sprint, Some(Finish::Retired(RetirementStatus::Dns)));
        assert_eq!(result.feature, Some(Finish::Retired(RetirementStatus::Dsq)));
        assert!(result.retired_from_feature());
    }

    #[test]
    fn malformed_values_are_absent() {
        let result = parse(json!({
            "qualifying": 0,
            "sprint": "",
            "feature": "crashed",
            "sprintFL": "yes",
        }));
        assert_eq!(result, RaceResult::default());
    }

    #[test]
    fn missing_fields_default() {
        let result = parse(json!({}));
        assert_eq!(result, RaceResult::default());
        assert!(!result.set_fastest_lap());
    }

    #[test]
    fn finish_serializes_as_number_or_token() {
        let result = RaceResult {
            feature: Some(Finish::Retired(RetirementStatus::Dnf)),
            sprint: Some(Finish::Classified(3)),
            ..RaceResult::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["feature"], json!("DNF"));
        assert_eq!(value["sprint"], json!(3));
    }

    #[test]
    fn race_without_points_system_uses_default_regulation() {
        let race: Race = serde_json::from_value(json!({"id": "r1", "name": "Bahrain"})).unwrap();
        assert_eq!(race.points_system, PointsSystem::default());
    }

    #[test]
    fn whole_floats_are_positions() {
        let result = parse(json!({"qualifying": 2.0, "feature": 3.0, "sprint": 1.5}));
        assert_eq!(result.qualifying, Some(2));
        assert_eq!(result.feature, Some(Finish::Classified(3)));
        assert_eq!(result.sprint, None);
    }

    #[test]
    fn null_bonuses_score_nothing() {
        let points_system: PointsSystem = serde_json::from_value(json!({
            "feature": [25, 18],
            "sprint": [8],
            "pole": null,
            "fastestLap": "fast",
        }))
        .unwrap();
        assert_eq!(points_system.pole, 0);
        assert_eq!(points_system.fastest_lap, 0);
        assert_eq!(points_system.feature, vec![25, 18]);
    }

    #[test]
    fn missing_tables_are_empty() {
        let race: Race = serde_json::from_value(json!({
            "id": "r1",
            "name": "Imola",
            "pointsSystem": {"feature": [25, "18", null, 12.0], "pole": 1},
        }))
        .unwrap();
        assert_eq!(race.points_system.sprint, Vec::<u32>::new());
        assert_eq!(race.points_system.feature, vec![25, 18, 0, 12]);
        assert_eq!(race.points_system.pole, 1);
        assert_eq!(race.points_system.fastest_lap, 0);
    }
}
