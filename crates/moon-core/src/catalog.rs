use crate::error::SceneError;
use crate::projection::is_valid_coordinate;
use serde::{Deserialize, Serialize};

/// A recorded seismic event. Selection is by position in a [`Catalog`].
///
/// The serialized field names follow the record layout used by the bundled
/// moonquake list (`dateTime`, `lat`, `long`, `magnitude`); the longer names
/// are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    #[serde(rename = "dateTime", alias = "timestamp")]
    pub timestamp: String,
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f32,
    #[serde(rename = "long", alias = "longitude")]
    pub longitude: f32,
    /// Carried for display only; never affects the visuals.
    pub magnitude: f32,
}

impl SeismicEvent {
    pub fn new(timestamp: impl Into<String>, latitude: f32, longitude: f32, magnitude: f32) -> Self {
        Self {
            timestamp: timestamp.into(),
            latitude,
            longitude,
            magnitude,
        }
    }
}

// (timestamp, latitude, longitude, magnitude)
pub const APOLLO_MOONQUAKES: &[(&str, f32, f32, f32)] = &[
    ("1973-03-13 07:56:30", -84.0, -134.0, 3.2),
    ("1975-01-03 01:42:00", 29.0, -98.0, 3.2),
    ("1971-04-17 07:00:55", 48.0, 35.0, 2.8),
    ("1974-07-11 00:46:30", 21.0, 88.0, 2.7),
    ("1976-03-06 10:12:40", 50.0, -20.0, 2.3),
];

/// Ordered, read-only list of events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    events: Vec<SeismicEvent>,
}

impl Catalog {
    pub fn new(events: Vec<SeismicEvent>) -> Self {
        Self { events }
    }

    /// The compiled-in moonquake list.
    pub fn builtin() -> Self {
        Self::new(
            APOLLO_MOONQUAKES
                .iter()
                .map(|&(ts, lat, lon, mag)| SeismicEvent::new(ts, lat, lon, mag))
                .collect(),
        )
    }

    /// Parse a JSON array of event records. Every record must carry a valid
    /// coordinate and the list must not be empty.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let events: Vec<SeismicEvent> =
            serde_json::from_str(text).map_err(|e| SceneError::Catalog(e.to_string()))?;
        if events.is_empty() {
            return Err(SceneError::Catalog("catalog contains no events".into()));
        }
        if let Some((i, ev)) = events
            .iter()
            .enumerate()
            .find(|(_, ev)| !is_valid_coordinate(ev.latitude, ev.longitude))
        {
            return Err(SceneError::Catalog(format!(
                "event {i} ({}) has invalid coordinate {}, {}",
                ev.timestamp, ev.latitude, ev.longitude
            )));
        }
        Ok(Self::new(events))
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(&self.events).map_err(|e| SceneError::Catalog(e.to_string()))
    }

    pub fn get(&self, index: usize) -> Result<&SeismicEvent, SceneError> {
        self.events.get(index).ok_or(SceneError::EventIndexOutOfRange {
            index,
            len: self.events.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeismicEvent> {
        self.events.iter()
    }

    /// Index after `current`, wrapping. Starts at 0 when nothing is selected.
    pub fn next_index(&self, current: Option<usize>) -> Option<usize> {
        if self.events.is_empty() {
            return None;
        }
        Some(match current {
            Some(i) => (i + 1) % self.events.len(),
            None => 0,
        })
    }

    /// Index before `current`, wrapping. Starts at the last event when nothing is selected.
    pub fn prev_index(&self, current: Option<usize>) -> Option<usize> {
        let len = self.events.len();
        if len == 0 {
            return None;
        }
        Some(match current {
            Some(i) => (i % len + len - 1) % len,
            None => len - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_source_order() {
        let c = Catalog::builtin();
        assert_eq!(c.len(), 5);
        let first = c.get(0).unwrap();
        assert_eq!(first.timestamp, "1973-03-13 07:56:30");
        assert_eq!((first.latitude, first.longitude), (-84.0, -134.0));
        assert_eq!(c.get(4).unwrap().timestamp, "1976-03-06 10:12:40");
    }

    #[test]
    fn get_out_of_range() {
        let c = Catalog::builtin();
        assert_eq!(
            c.get(5),
            Err(SceneError::EventIndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn parses_record_layout() {
        let json = r#"[
            { "dateTime": "1972-01-02 22:29:40", "lat": 54.0, "long": 101.0, "magnitude": 1.9 },
            { "timestamp": "1973-02-08 22:52:10", "latitude": -4.0, "longitude": -106.0, "magnitude": 2.0 }
        ]"#;
        let c = Catalog::from_json(json).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1).unwrap().longitude, -106.0);
    }

    #[test]
    fn json_survives_reload() {
        let c = Catalog::builtin();
        let text = c.to_json().unwrap();
        assert!(text.contains("\"dateTime\""));
        assert_eq!(Catalog::from_json(&text).unwrap(), c);
    }

    #[test]
    fn rejects_bad_catalogs() {
        assert!(matches!(Catalog::from_json("[]"), Err(SceneError::Catalog(_))));
        assert!(matches!(Catalog::from_json("{"), Err(SceneError::Catalog(_))));
        let bad = r#"[{ "dateTime": "x", "lat": 120.0, "long": 0.0, "magnitude": 1.0 }]"#;
        match Catalog::from_json(bad) {
            Err(SceneError::Catalog(msg)) => assert!(msg.contains("event 0")),
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn cycling_wraps() {
        let c = Catalog::builtin();
        assert_eq!(c.next_index(None), Some(0));
        assert_eq!(c.next_index(Some(4)), Some(0));
        assert_eq!(c.prev_index(None), Some(4));
        assert_eq!(c.prev_index(Some(0)), Some(4));
        assert_eq!(c.prev_index(Some(3)), Some(2));
        assert_eq!(Catalog::default().next_index(None), None);
    }
}
