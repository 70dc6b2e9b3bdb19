//! Player capability trait and roster construction

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use cozy_chess::Move;
use uuid::Uuid;

use arena_core::{AdapterError, ConfigError, EngineDescriptor, PlayerId};

use crate::heuristics::{CaptureAdapter, GreedyMaterialAdapter, RandomAdapter};
use crate::rules::Position;
use crate::uci::UciAdapter;

/// One capability: given a position, propose a move.
///
/// `Ok(None)` means the player declines to move. It is distinct from a
/// fault; the orchestrator resolves both.
#[async_trait]
pub trait PlayerAdapter: Send {
    /// Self-reported name, for logs
    fn name(&self) -> &str;

    /// Reset internal state before a new game
    async fn new_game(&mut self) -> Result<(), AdapterError>;

    /// Propose a move for the side to move
    async fn propose_move(&mut self, pos: &Position) -> Result<Option<Move>, AdapterError>;

    /// Release any resources held by the adapter
    async fn shutdown(&mut self) -> Result<(), AdapterError>;
}

/// Roster entry: a player identity bound to its adapter
pub struct Contestant {
    pub id: PlayerId,
    pub name: String,
    pub adapter: Box<dyn PlayerAdapter>,
}

impl Contestant {
    pub fn new(name: impl Into<String>, adapter: Box<dyn PlayerAdapter>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            adapter,
        }
    }
}

/// Engine row for a CLI player spec: a heuristic name, optionally
/// tagged `name:version`, or `uci:<path>` for a subprocess engine.
pub fn descriptor_from_spec(spec: &str) -> EngineDescriptor {
    if let Some(path) = spec.strip_prefix("uci:") {
        let name = Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("uci")
            .to_string();
        return EngineDescriptor {
            id: Uuid::new_v4(),
            name,
            version: None,
            path: Some(path.to_string()),
            options: HashMap::new(),
        };
    }
    let (name, version) = match spec.split_once(':') {
        Some((name, version)) => (name.to_string(), Some(version.to_string())),
        None => (spec.to_string(), None),
    };
    EngineDescriptor {
        id: Uuid::new_v4(),
        name,
        version,
        path: None,
        options: HashMap::new(),
    }
}

/// Build a roster entry from a persisted engine row. Subprocess
/// engines are spawned and handshaken here.
pub async fn contestant_from_descriptor(
    descriptor: &EngineDescriptor,
    move_time: Duration,
) -> anyhow::Result<Contestant> {
    if let Some(path) = &descriptor.path {
        let adapter = UciAdapter::spawn(path, &descriptor.options, move_time)
            .await
            .with_context(|| format!("failed to start engine {}", descriptor.name))?;
        return Ok(Contestant::new(descriptor.display_name(), Box::new(adapter)));
    }
    let adapter: Box<dyn PlayerAdapter> = match descriptor.name.as_str() {
        "random" => Box::new(RandomAdapter),
        "capture" => Box::new(CaptureAdapter),
        "greedy" => Box::new(GreedyMaterialAdapter),
        other => return Err(ConfigError::UnknownEngineSpec(other.to_string()).into()),
    };
    Ok(Contestant::new(descriptor.display_name(), adapter))
}
