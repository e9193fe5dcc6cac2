//! FaqDesk configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FaqDeskError, Result};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqDeskConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

impl FaqDeskConfig {
    /// Load config from the default path (~/.faqdesk/config.toml).
    /// `FAQDESK_CONFIG` overrides the path, `PORT` overrides the gateway port.
    pub fn load() -> Result<Self> {
        let path = std::env::var("FAQDESK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FaqDeskError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| FaqDeskError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FaqDeskError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write a default config to `path` unless one already exists.
    /// Returns `false` when an existing file was left alone.
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env(&mut self) {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.gateway.port = port;
        }
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the FaqDesk home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".faqdesk")
    }
}

/// Gateway (HTTP transport) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 3000 }
fn default_max_body_bytes() -> usize { 64 * 1024 }
fn default_public_dir() -> String { "public".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            public_dir: default_public_dir(),
        }
    }
}

/// Knowledge base location and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_faqs_file")]
    pub faqs_file: String,
    #[serde(default = "default_pairs_file")]
    pub pairs_file: String,
    /// Number of ranked matches returned as suggestions.
    #[serde(default = "default_suggestions")]
    pub suggestions: usize,
}

fn default_data_dir() -> String { "data".into() }
fn default_faqs_file() -> String { "faqs.json".into() }
fn default_pairs_file() -> String { "trained_pairs.json".into() }
fn default_suggestions() -> usize { 3 }

impl KnowledgeConfig {
    pub fn faqs_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.faqs_file)
    }

    pub fn pairs_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.pairs_file)
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            faqs_file: default_faqs_file(),
            pairs_file: default_pairs_file(),
            suggestions: default_suggestions(),
        }
    }
}

/// Dialogue policy constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// Minimum top-match score for a confident answer.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Low-confidence streak length that triggers a handoff.
    #[serde(default = "default_handoff_after")]
    pub handoff_after: u32,
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
    /// Shown by clients next to a reply that signals handoff.
    #[serde(default = "default_handoff_notice")]
    pub handoff_notice: String,
    /// Characters of a message that take part in scoring.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

fn default_confidence_threshold() -> f64 { 0.6 }
fn default_handoff_after() -> u32 { 2 }
fn default_fallback_reply() -> String {
    "I am not fully sure. Here are some related topics you can try.".into()
}
fn default_handoff_notice() -> String {
    "You can contact a human at support@example.com.".into()
}
fn default_max_message_chars() -> usize { 1000 }

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            handoff_after: default_handoff_after(),
            fallback_reply: default_fallback_reply(),
            handoff_notice: default_handoff_notice(),
            max_message_chars: default_max_message_chars(),
        }
    }
}
