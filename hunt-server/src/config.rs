//! Load config from file and environment.

use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration. File: ~/.config/hunt/config.toml or
/// /etc/hunt/config.toml.
/// Env overrides: HUNT_BIND_PORT, HUNT_PEER_ADDR, HUNT_TREASURE_DIR.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// UDP port the server listens on (default 46000).
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,
    /// Address of the playing peer (default 127.0.0.1:46001).
    #[serde(default = "default_peer_addr")]
    pub peer_addr: String,
    /// Directory holding the treasure files, one per index prefix
    /// (default objects/).
    #[serde(default = "default_treasure_dir")]
    pub treasure_dir: PathBuf,
}

fn default_bind_port() -> u16 {
    46000
}
fn default_peer_addr() -> String {
    "127.0.0.1:46001".to_string()
}
fn default_treasure_dir() -> PathBuf {
    PathBuf::from("objects")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_port: default_bind_port(),
            peer_addr: default_peer_addr(),
            treasure_dir: default_treasure_dir(),
        }
    }
}

/// Load config: merge default, then config file (if present), then env vars.
pub fn load() -> Config {
    let mut c = load_file().unwrap_or_else(Config::default);
    if let Ok(s) = std::env::var("HUNT_BIND_PORT") {
        if let Ok(p) = s.parse::<u16>() {
            c.bind_port = p;
        }
    }
    if let Ok(s) = std::env::var("HUNT_PEER_ADDR") {
        c.peer_addr = s;
    }
    if let Ok(s) = std::env::var("HUNT_TREASURE_DIR") {
        c.treasure_dir = PathBuf::from(s);
    }
    c
}

fn config_paths() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let mut out = Vec::new();
    if let Some(h) = home {
        out.push(h.join(".config/hunt/config.toml"));
    }
    out.push(PathBuf::from("/etc/hunt/config.toml"));
    out
}

fn load_file() -> Option<Config> {
    for p in config_paths() {
        if p.exists() {
            if let Ok(s) = std::fs::read_to_string(&p) {
                if let Ok(c) = toml::from_str::<Config>(&s) {
                    return Some(c);
                }
            }
            break;
        }
    }
    None
}
