use crate::api::models::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub struct VigiAgentClient {
    pub agent: AgentConfig,
}

#[derive(Debug, Deserialize)]
struct RecordingsResponse {
    #[serde(default)]
    recordings: Vec<Recording>,
}

impl VigiAgentClient {
    pub fn new(agent: AgentConfig) -> Self {
        Self { agent }
    }

    fn base(&self) -> &str {
        self.agent.url.trim_end_matches('/')
    }

    /// Media endpoint for one recording:
    /// `{base}/recordings/{camera_id}/{date}/{time}/video`.
    pub fn recording_video_url(&self, recording: &Recording) -> String {
        format!(
            "{}/recordings/{}/{}/{}/video",
            self.base(),
            recording.camera_id,
            urlencoding::encode(&recording.date),
            urlencoding::encode(&recording.time),
        )
    }

    /// Same endpoint, flagged so the agent serves it as an attachment.
    pub fn recording_download_url(&self, recording: &Recording) -> String {
        format!("{}?download=true", self.recording_video_url(recording))
    }

    /// Same endpoint, flagged so the agent renders its share page.
    pub fn recording_share_url(&self, recording: &Recording) -> String {
        format!("{}?share=true", self.recording_video_url(recording))
    }

    /// MJPEG live stream for a camera.
    pub fn video_feed_url(&self, camera_id: u32) -> String {
        format!("{}/video_feed/{}", self.base(), camera_id)
    }

    /// Single still frame from a camera.
    pub fn snapshot_url(&self, camera_id: u32) -> String {
        format!("{}/snapshot/{}", self.base(), camera_id)
    }

    pub async fn ping(&self) -> Result<bool, String> {
        let url = format!("{}/api/status", self.base());
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(response.status().is_success())
    }

    pub async fn get_status(&self) -> Result<AgentStatus, String> {
        let url = format!("{}/api/status", self.base());
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("agent returned HTTP {}", response.status()));
        }
        response
            .json::<AgentStatus>()
            .await
            .map_err(|e| e.to_string())
    }

    /// All recordings known to the agent, newest first. Every entry is
    /// stamped with this agent's id and name before it reaches a view.
    pub async fn get_recordings(&self) -> Result<Vec<Recording>, String> {
        let url = format!("{}/api/recordings", self.base());
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("agent returned HTTP {}", response.status()));
        }
        let json: RecordingsResponse = response.json().await.map_err(|e| e.to_string())?;

        let mut recordings = json.recordings;
        for recording in &mut recordings {
            recording.agent_id = self.agent.id.clone();
            recording.agent_name = self.agent.name.clone();
        }
        recordings.sort_by(Recording::newest_first);
        Ok(recordings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> VigiAgentClient {
        VigiAgentClient::new(AgentConfig {
            id: "agent-1".to_string(),
            name: "Garage".to_string(),
            url: url.to_string(),
            active: true,
        })
    }

    fn recording() -> Recording {
        Recording {
            camera_id: 0,
            date: "2024-06-01".to_string(),
            time: "14-03-22".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_video_url_from_identity() {
        let client = client("http://10.0.0.5:5000");
        assert_eq!(
            client.recording_video_url(&recording()),
            "http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video"
        );
    }

    #[test]
    fn flags_download_and_share_variants() {
        let client = client("http://10.0.0.5:5000");
        assert_eq!(
            client.recording_download_url(&recording()),
            "http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video?download=true"
        );
        assert_eq!(
            client.recording_share_url(&recording()),
            "http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video?share=true"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_base_url() {
        let client = client("http://10.0.0.5:5000/");
        assert_eq!(
            client.recording_video_url(&recording()),
            "http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video"
        );
    }

    #[test]
    fn encodes_unusual_path_segments() {
        let client = client("http://10.0.0.5:5000");
        let odd = Recording {
            camera_id: 1,
            date: "2024/06/01".to_string(),
            time: "14-03-22".to_string(),
            ..Default::default()
        };
        assert_eq!(
            client.recording_video_url(&odd),
            "http://10.0.0.5:5000/recordings/1/2024%2F06%2F01/14-03-22/video"
        );
    }

    #[test]
    fn builds_live_feed_and_snapshot_urls() {
        let client = client("http://10.0.0.5:5000");
        assert_eq!(client.video_feed_url(0), "http://10.0.0.5:5000/video_feed/0");
        assert_eq!(client.snapshot_url(2), "http://10.0.0.5:5000/snapshot/2");
    }
}
