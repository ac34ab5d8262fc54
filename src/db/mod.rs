use crate::api::models::AgentConfig;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "vigiview.viewer_settings";
#[cfg(target_arch = "wasm32")]
const AGENTS_KEY: &str = "vigiview.agents";

/// Viewer options persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Render the download/share action row in the playback modal.
    #[serde(default = "default_true")]
    pub show_save_actions: bool,
    /// Start playback as soon as the modal opens.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Agent preselected on the live view.
    #[serde(default)]
    pub last_agent_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            show_save_actions: true,
            autoplay: true,
            last_agent_id: None,
        }
    }
}

// Database operations for native platforms
// These run directly on desktop/mobile without needing #[server]

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_agents(agents: Vec<AgentConfig>) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    // Clear existing agents and insert new ones
    conn.execute("DELETE FROM agents", [])
        .map_err(|e| DbError::new(e.to_string()))?;

    for agent in agents {
        conn.execute(
            "INSERT INTO agents (id, name, url, active) VALUES (?1, ?2, ?3, ?4)",
            [
                &agent.id,
                &agent.name,
                &agent.url,
                &(if agent.active { "1" } else { "0" }).to_string(),
            ],
        )
        .map_err(|e| DbError::new(e.to_string()))?;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_agents(agents: Vec<AgentConfig>) -> Result<(), StorageError> {
    LocalStorage::set(AGENTS_KEY, agents)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_agents() -> Result<Vec<AgentConfig>, DbError> {
    let conn = get_db_connection()?;

    let mut stmt = conn
        .prepare("SELECT id, name, url, active FROM agents")
        .map_err(|e| DbError::new(e.to_string()))?;

    let agents = stmt
        .query_map([], |row: &rusqlite::Row| {
            Ok(AgentConfig {
                id: row.get(0)?,
                name: row.get(1)?,
                url: row.get(2)?,
                active: row.get::<_, String>(3)? == "1",
            })
        })
        .map_err(|e| DbError::new(e.to_string()))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(agents)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_agents() -> Result<Vec<AgentConfig>, StorageError> {
    match LocalStorage::get(AGENTS_KEY) {
        Ok(agents) => Ok(agents),
        Err(_) => Ok(Vec::new()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: ViewerSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    let settings_json =
        serde_json::to_string(&settings).map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('viewer_settings', ?1)",
        [&settings_json],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: ViewerSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<ViewerSettings, DbError> {
    let conn = get_db_connection()?;

    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = 'viewer_settings'",
        [],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => serde_json::from_str(&json).map_err(|e| DbError::new(e.to_string())),
        Err(_) => Ok(ViewerSettings::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<ViewerSettings, StorageError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(ViewerSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;

    // Create tables
    conn.execute(
        "CREATE TABLE IF NOT EXISTS agents (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            active TEXT NOT NULL DEFAULT '1'
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_local_dir()
        .map(|dir| dir.join("vigiview"))
        .unwrap_or_else(|| std::path::PathBuf::from(".vigiview"));
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::new(format!("Failed to create data dir: {}", e)))?;
    let db_path = data_dir.join("vigiview.db");

    rusqlite::Connection::open(&db_path)
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_shows_save_actions() {
        let settings = ViewerSettings::default();
        assert!(settings.show_save_actions);
        assert!(settings.autoplay);
        assert!(settings.last_agent_id.is_none());
    }

    #[test]
    fn settings_missing_fields_fall_back_to_defaults() {
        let settings: ViewerSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.show_save_actions);
        assert!(settings.autoplay);
    }

    #[test]
    fn settings_round_trip() {
        let settings = ViewerSettings {
            show_save_actions: false,
            autoplay: false,
            last_agent_id: Some("agent-1".to_string()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: ViewerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
