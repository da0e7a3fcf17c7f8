//! Line-level helpers for driving an external UCI engine.
//!
//! The host owns the engine process and its pipes. This module only builds
//! the command lines the host writes and parses the reply lines it reads.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::long_algebraic::{format_uci_move, parse_uci_move};

/// A command line sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Uci,
    IsReady,
    UciNewGame,
    PositionFen(String),
    GoDepth(u32),
    GoMovetime(u64),
    Stop,
    Quit,
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCommand::Uci => write!(f, "uci"),
            EngineCommand::IsReady => write!(f, "isready"),
            EngineCommand::UciNewGame => write!(f, "ucinewgame"),
            EngineCommand::PositionFen(fen) => write!(f, "position fen {fen}"),
            EngineCommand::GoDepth(depth) => write!(f, "go depth {depth}"),
            EngineCommand::GoMovetime(millis) => write!(f, "go movetime {millis}"),
            EngineCommand::Stop => write!(f, "stop"),
            EngineCommand::Quit => write!(f, "quit"),
        }
    }
}

/// A reply line read from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    UciOk,
    ReadyOk,
    BestMove {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// `bestmove (none)` or `bestmove 0000`: the engine sees no legal move.
    NoMove,
    Info(String),
    Other(String),
}

impl EngineReply {
    pub fn parse(line: &str) -> ChessResult<Self> {
        let line = line.trim();
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("uciok") => Ok(EngineReply::UciOk),
            Some("readyok") => Ok(EngineReply::ReadyOk),
            Some("info") => Ok(EngineReply::Info(
                line.strip_prefix("info")
                    .map_or("", str::trim_start)
                    .to_owned(),
            )),
            Some("bestmove") => {
                // Anything after the move, e.g. `ponder e7e5`, is ignored.
                let mv = tokens
                    .next()
                    .ok_or_else(|| ChessError::MalformedProtocolMove(line.to_owned()))?;
                if mv == "(none)" || mv == "0000" {
                    return Ok(EngineReply::NoMove);
                }
                let (from, to, promotion) = parse_uci_move(mv)?;
                Ok(EngineReply::BestMove {
                    from,
                    to,
                    promotion,
                })
            }
            _ => Ok(EngineReply::Other(line.to_owned())),
        }
    }
}

impl fmt::Display for EngineReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineReply::UciOk => write!(f, "uciok"),
            EngineReply::ReadyOk => write!(f, "readyok"),
            EngineReply::BestMove {
                from,
                to,
                promotion,
            } => write!(f, "bestmove {}", format_uci_move(*from, *to, *promotion)),
            EngineReply::NoMove => write!(f, "bestmove (none)"),
            EngineReply::Info(text) => write!(f, "info {text}"),
            EngineReply::Other(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn commands_render_protocol_lines() {
        assert_eq!(EngineCommand::Uci.to_string(), "uci");
        assert_eq!(EngineCommand::IsReady.to_string(), "isready");
        assert_eq!(EngineCommand::UciNewGame.to_string(), "ucinewgame");
        assert_eq!(
            EngineCommand::PositionFen("4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_owned()).to_string(),
            "position fen 4k3/8/8/8/8/8/8/4K3 w - - 0 1"
        );
        assert_eq!(EngineCommand::GoDepth(12).to_string(), "go depth 12");
        assert_eq!(EngineCommand::GoMovetime(1500).to_string(), "go movetime 1500");
        assert_eq!(EngineCommand::Stop.to_string(), "stop");
        assert_eq!(EngineCommand::Quit.to_string(), "quit");
    }

    #[test]
    fn parses_bestmove_with_and_without_promotion() {
        let reply = EngineReply::parse("bestmove e2e4 ponder e7e5").expect("reply should parse");
        assert_eq!(
            reply,
            EngineReply::BestMove {
                from: algebraic_to_square("e2").expect("square should parse"),
                to: algebraic_to_square("e4").expect("square should parse"),
                promotion: None,
            }
        );

        let reply = EngineReply::parse("bestmove a7a8n\n").expect("reply should parse");
        assert!(matches!(
            reply,
            EngineReply::BestMove {
                promotion: Some(PieceKind::Knight),
                ..
            }
        ));
        assert_eq!(reply.to_string(), "bestmove a7a8n");
    }

    #[test]
    fn parses_handshake_and_no_move_replies() {
        assert_eq!(EngineReply::parse("uciok"), Ok(EngineReply::UciOk));
        assert_eq!(EngineReply::parse("readyok"), Ok(EngineReply::ReadyOk));
        assert_eq!(EngineReply::parse("bestmove (none)"), Ok(EngineReply::NoMove));
        assert_eq!(EngineReply::parse("bestmove 0000"), Ok(EngineReply::NoMove));
        assert_eq!(
            EngineReply::parse("info depth 3 score cp 20"),
            Ok(EngineReply::Info("depth 3 score cp 20".to_owned()))
        );
        assert_eq!(
            EngineReply::parse("info info string x"),
            Ok(EngineReply::Info("info string x".to_owned()))
        );
        assert_eq!(EngineReply::parse("info"), Ok(EngineReply::Info(String::new())));
        assert_eq!(
            EngineReply::parse("id name Example"),
            Ok(EngineReply::Other("id name Example".to_owned()))
        );
    }

    #[test]
    fn malformed_bestmove_is_rejected() {
        for line in ["bestmove", "bestmove e2", "bestmove z9z9", "bestmove e7e8k"] {
            assert!(
                matches!(EngineReply::parse(line), Err(ChessError::MalformedProtocolMove(_))),
                "expected '{line}' to be rejected"
            );
        }
    }
}
