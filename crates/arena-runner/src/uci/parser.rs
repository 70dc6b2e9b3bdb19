//! Line parser for replies from UCI engine processes

/// Replies the orchestrator cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciMessage {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove {
        /// `None` for `bestmove (none)` / `bestmove 0000`
        mv: Option<String>,
        ponder: Option<String>,
    },
    Info(String),
    Unknown(String),
}

/// Parse one line of engine output
pub fn parse_line(line: &str) -> UciMessage {
    let trimmed = line.trim();
    let mut tokens = trimmed.split_whitespace();
    match tokens.next() {
        Some("uciok") => UciMessage::UciOk,
        Some("readyok") => UciMessage::ReadyOk,
        Some("id") => match tokens.next() {
            Some("name") => UciMessage::IdName(tokens.collect::<Vec<_>>().join(" ")),
            Some("author") => UciMessage::IdAuthor(tokens.collect::<Vec<_>>().join(" ")),
            _ => UciMessage::Unknown(trimmed.to_string()),
        },
        Some("bestmove") => {
            let mv = match tokens.next() {
                None | Some("(none)") | Some("0000") => None,
                Some(text) => Some(text.to_string()),
            };
            let ponder = match (tokens.next(), tokens.next()) {
                (Some("ponder"), Some(text)) => Some(text.to_string()),
                _ => None,
            };
            UciMessage::BestMove { mv, ponder }
        }
        Some("info") => UciMessage::Info(trimmed.to_string()),
        _ => UciMessage::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uciok() {
        assert_eq!(parse_line("uciok\n"), UciMessage::UciOk);
    }

    #[test]
    fn test_parse_readyok() {
        assert_eq!(parse_line("  readyok  "), UciMessage::ReadyOk);
    }

    #[test]
    fn test_parse_id_name() {
        assert_eq!(
            parse_line("id name Stockfish 15"),
            UciMessage::IdName("Stockfish 15".to_string())
        );
    }

    #[test]
    fn test_parse_id_author() {
        assert_eq!(
            parse_line("id author the Stockfish developers"),
            UciMessage::IdAuthor("the Stockfish developers".to_string())
        );
    }

    #[test]
    fn test_parse_bestmove() {
        assert_eq!(
            parse_line("bestmove e2e4"),
            UciMessage::BestMove {
                mv: Some("e2e4".to_string()),
                ponder: None,
            }
        );
    }

    #[test]
    fn test_parse_bestmove_with_ponder() {
        assert_eq!(
            parse_line("bestmove e2e4 ponder e7e5"),
            UciMessage::BestMove {
                mv: Some("e2e4".to_string()),
                ponder: Some("e7e5".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_bestmove_none() {
        assert_eq!(
            parse_line("bestmove (none)"),
            UciMessage::BestMove {
                mv: None,
                ponder: None,
            }
        );
        assert_eq!(
            parse_line("bestmove 0000"),
            UciMessage::BestMove {
                mv: None,
                ponder: None,
            }
        );
    }

    #[test]
    fn test_parse_info_passthrough() {
        assert!(matches!(
            parse_line("info depth 12 score cp 35"),
            UciMessage::Info(_)
        ));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(parse_line("garbage line"), UciMessage::Unknown(_)));
    }
}
