use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A configured Vigi agent endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub id: String,
    pub name: String,
    pub url: String,
    pub active: bool,
}

impl AgentConfig {
    pub fn new(name: String, url: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            url: url.trim_end_matches('/').to_string(),
            active: true,
        }
    }
}

/// A motion-capture recording, addressed by camera, date and time.
///
/// `date` (`YYYY-MM-DD`) and `time` (`HH-MM-SS`) are kept as the raw path
/// segments the agent uses on disk; they go into URLs verbatim. `tags` is
/// the comma-separated label string produced by the agent's detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Recording {
    #[serde(default, alias = "cameraId")]
    pub camera_id: u32,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default, alias = "sizeBytes")]
    pub size_bytes: Option<u64>,
    #[serde(default, alias = "frameWidth")]
    pub frame_width: Option<u32>,
    #[serde(default, alias = "frameHeight")]
    pub frame_height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub agent_name: String,
}

impl Recording {
    /// Parse the raw date/time path segments into a timestamp.
    /// Returns `None` when a segment doesn't match the agent's layout.
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H-%M-%S").ok()?;
        Some(date.and_time(time))
    }

    pub fn tag_list(&self) -> Vec<String> {
        crate::utils::split_tags(&self.tags)
    }

    /// Newest-first ordering for recording listings. Entries whose path
    /// segments don't parse sort after those that do; ties fall back to
    /// the raw strings so merged lists stay stable.
    pub fn newest_first(a: &Recording, b: &Recording) -> std::cmp::Ordering {
        b.started_at()
            .cmp(&a.started_at())
            .then_with(|| b.date.cmp(&a.date))
            .then_with(|| b.time.cmp(&a.time))
    }

    /// Modal title for this recording.
    pub fn title(&self) -> String {
        format!(
            "Recording from {} at {} (camera {})",
            self.date,
            crate::utils::pretty_time(&self.time),
            self.camera_id
        )
    }
}

/// Agent health report from `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgentStatus {
    #[serde(default, alias = "cameraId")]
    pub camera_id: u32,
    #[serde(default, alias = "frameWidth")]
    pub frame_width: u32,
    #[serde(default, alias = "frameHeight")]
    pub frame_height: u32,
    #[serde(default)]
    pub fps: f64,
    #[serde(default, alias = "uptimeSecs")]
    pub uptime_secs: u64,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default, alias = "recordingCount")]
    pub recording_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_config_trims_trailing_slash() {
        let agent = AgentConfig::new("Garage".to_string(), "http://10.0.0.5:5000/".to_string());
        assert_eq!(agent.url, "http://10.0.0.5:5000");
        assert!(agent.active);
        assert!(!agent.id.is_empty());
    }

    #[test]
    fn recording_parses_path_segments() {
        let recording = Recording {
            camera_id: 0,
            date: "2024-06-01".to_string(),
            time: "14-03-22".to_string(),
            ..Default::default()
        };
        let started = recording.started_at().unwrap();
        assert_eq!(started.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-06-01 14:03:22");
    }

    #[test]
    fn recording_rejects_malformed_segments() {
        let recording = Recording {
            date: "junk".to_string(),
            time: "14-03-22".to_string(),
            ..Default::default()
        };
        assert!(recording.started_at().is_none());
    }

    #[test]
    fn recording_title_matches_template() {
        let recording = Recording {
            camera_id: 2,
            date: "2024-06-01".to_string(),
            time: "14-03-22".to_string(),
            ..Default::default()
        };
        assert_eq!(
            recording.title(),
            "Recording from 2024-06-01 at 14:03:22 (camera 2)"
        );
    }

    #[test]
    fn newest_first_orders_by_timestamp_then_raw_segments() {
        let entry = |date: &str, time: &str| Recording {
            date: date.to_string(),
            time: time.to_string(),
            ..Default::default()
        };
        let mut recordings = vec![
            entry("2024-06-01", "08-00-00"),
            entry("junk", "00-00-00"),
            entry("2024-06-02", "07-30-00"),
            entry("2024-06-01", "23-59-59"),
        ];
        recordings.sort_by(Recording::newest_first);
        assert_eq!(recordings[0].date, "2024-06-02");
        assert_eq!(recordings[1].time, "23-59-59");
        assert_eq!(recordings[2].time, "08-00-00");
        // Unparseable segments sink to the end.
        assert_eq!(recordings[3].date, "junk");
    }

    #[test]
    fn recording_deserializes_with_missing_optionals() {
        let json = r#"{"camera_id": 1, "date": "2024-06-01", "time": "08-00-00"}"#;
        let recording: Recording = serde_json::from_str(json).unwrap();
        assert_eq!(recording.camera_id, 1);
        assert!(recording.tags.is_empty());
        assert!(recording.duration.is_none());
        assert!(recording.tag_list().is_empty());
    }

    #[test]
    fn recording_accepts_camel_case_aliases() {
        let json = r#"{"cameraId": 3, "date": "2024-06-01", "time": "08-00-00", "sizeBytes": 1024}"#;
        let recording: Recording = serde_json::from_str(json).unwrap();
        assert_eq!(recording.camera_id, 3);
        assert_eq!(recording.size_bytes, Some(1024));
    }
}
