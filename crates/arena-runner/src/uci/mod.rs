//! Subprocess adapter speaking the UCI wire protocol

pub mod parser;

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use cozy_chess::Move;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;
use tracing::{debug, warn};

use arena_core::AdapterError;

use crate::adapter::PlayerAdapter;
use crate::rules::Position;
use parser::{parse_line, UciMessage};

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);
const REPLY_GRACE: Duration = Duration::from_secs(2);
const QUIT_TIMEOUT: Duration = Duration::from_secs(1);

/// A UCI engine running as a child process.
///
/// One request in flight at a time: the orchestrator is sequential, so
/// reads never interleave.
pub struct UciAdapter {
    name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    move_time: Duration,
}

impl UciAdapter {
    /// Spawn the engine, complete the `uci` handshake and apply the
    /// configured options.
    pub async fn spawn(
        path: &str,
        options: &HashMap<String, String>,
        move_time: Duration,
    ) -> Result<Self, AdapterError> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let stdin = child.stdin.take().ok_or(AdapterError::NotRunning)?;
        let stdout = child.stdout.take().ok_or(AdapterError::NotRunning)?;

        let mut adapter = Self {
            name: path.to_string(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            move_time,
        };

        adapter.handshake().await?;
        for (option, value) in options {
            adapter
                .send(&format!("setoption name {} value {}", option, value))
                .await?;
        }
        adapter.wait_ready().await?;
        Ok(adapter)
    }

    /// `uci` until `uciok`, picking up the engine's reported name
    async fn handshake(&mut self) -> Result<(), AdapterError> {
        self.send("uci").await?;
        let wait = async {
            loop {
                match self.read_message().await? {
                    UciMessage::IdName(name) => self.name = name,
                    UciMessage::UciOk => return Ok(()),
                    _ => {}
                }
            }
        };
        match timeout(HANDSHAKE_TIMEOUT, wait).await {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout(HANDSHAKE_TIMEOUT)),
        }
    }

    /// `isready` until `readyok`
    async fn wait_ready(&mut self) -> Result<(), AdapterError> {
        self.send("isready").await?;
        let wait = async {
            loop {
                if let UciMessage::ReadyOk = self.read_message().await? {
                    return Ok(());
                }
            }
        };
        match timeout(HANDSHAKE_TIMEOUT, wait).await {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout(HANDSHAKE_TIMEOUT)),
        }
    }

    async fn send(&mut self, command: &str) -> Result<(), AdapterError> {
        debug!(engine = %self.name, command, "uci send");
        self.stdin.write_all(command.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }

    async fn read_message(&mut self) -> Result<UciMessage, AdapterError> {
        let mut line = String::new();
        let read = self.stdout.read_line(&mut line).await?;
        if read == 0 {
            return Err(AdapterError::NotRunning);
        }
        Ok(parse_line(&line))
    }

    fn position_command(pos: &Position) -> String {
        let mut command = match pos.initial_fen() {
            Some(fen) => format!("position fen {}", fen),
            None => String::from("position startpos"),
        };
        if !pos.uci_history().is_empty() {
            command.push_str(" moves ");
            command.push_str(&pos.uci_history().join(" "));
        }
        command
    }
}

#[async_trait]
impl PlayerAdapter for UciAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn new_game(&mut self) -> Result<(), AdapterError> {
        self.send("ucinewgame").await?;
        self.wait_ready().await
    }

    async fn propose_move(&mut self, pos: &Position) -> Result<Option<Move>, AdapterError> {
        self.send(&Self::position_command(pos)).await?;
        self.send(&format!("go movetime {}", self.move_time.as_millis()))
            .await?;

        let budget = self.move_time + REPLY_GRACE;
        let wait = async {
            loop {
                match self.read_message().await? {
                    UciMessage::BestMove { mv, .. } => return Ok::<_, AdapterError>(mv),
                    UciMessage::Info(_) => {}
                    other => debug!(engine = %self.name, ?other, "ignoring reply"),
                }
            }
        };
        let best = match timeout(budget, wait).await {
            Ok(result) => result?,
            Err(_) => return Err(AdapterError::Timeout(budget)),
        };

        match best {
            None => Ok(None),
            Some(text) => pos
                .parse_uci(&text)
                .map(Some)
                .ok_or(AdapterError::Malformed(text)),
        }
    }

    async fn shutdown(&mut self) -> Result<(), AdapterError> {
        // the engine may already be gone; quit is best effort
        let _ = self.send("quit").await;
        match timeout(QUIT_TIMEOUT, self.child.wait()).await {
            Ok(status) => {
                status?;
                Ok(())
            }
            Err(_) => {
                warn!(engine = %self.name, "engine ignored quit, killing");
                self.child.start_kill()?;
                Ok(())
            }
        }
    }
}

impl Drop for UciAdapter {
    fn drop(&mut self) {
        let _ = self.child.start_kill();
    }
}
