use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

/// Serialize a position in standard FEN field order.
pub fn generate_fen(position: &Position) -> String {
    let mut fen = placement_field(position);

    fen.push(' ');
    fen.push(match position.side_to_move {
        Side::White => 'w',
        Side::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_field(position.castling_rights));

    fen.push(' ');
    match position.en_passant_target {
        Some(target) => fen.push_str(&target.to_string()),
        None => fen.push('-'),
    }

    fen.push_str(&format!(
        " {} {}",
        position.halfmove_clock, position.fullmove_number
    ));
    fen
}

fn placement_field(position: &Position) -> String {
    let ranks: Vec<String> = (0..8u8)
        .map(|row| {
            let mut rank = String::with_capacity(8);
            let mut gap = 0u8;

            for col in 0..8u8 {
                let Some(piece) = position.piece_at(Square { row, col }) else {
                    gap += 1;
                    continue;
                };
                if gap > 0 {
                    rank.push(char::from(b'0' + gap));
                    gap = 0;
                }
                rank.push(piece.fen_char());
            }
            if gap > 0 {
                rank.push(char::from(b'0' + gap));
            }

            rank
        })
        .collect();

    // Row 0 is rank 8, which FEN lists first.
    ranks.join("/")
}

fn castling_field(rights: CastlingRights) -> String {
    let field: String = [
        (rights.white_kingside, 'K'),
        (rights.white_queenside, 'Q'),
        (rights.black_kingside, 'k'),
        (rights.black_queenside, 'q'),
    ]
    .into_iter()
    .filter_map(|(held, letter)| held.then_some(letter))
    .collect();

    if field.is_empty() {
        "-".to_owned()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Side};
    use crate::game_state::position::Position;

    #[test]
    fn new_game_serializes_to_starting_fen() {
        assert_eq!(generate_fen(&Position::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn midgame_fields_survive_a_parse_cycle() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let position = Position::from_fen(fen).expect("FEN should parse");

        assert_eq!(generate_fen(&position), fen);
        assert_eq!(position.side_to_move, Side::Black);
        assert_eq!(
            position.castling_rights,
            CastlingRights {
                black_kingside: true,
                black_queenside: true,
                ..CastlingRights::NONE
            }
        );
        assert_eq!((position.halfmove_clock, position.fullmove_number), (4, 6));
    }

    #[test]
    fn empty_rights_and_en_passant_target() {
        let no_rights = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        let position = Position::from_fen(no_rights).expect("FEN should parse");
        assert_eq!(generate_fen(&position), no_rights);

        let after_e4 = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position = Position::from_fen(after_e4).expect("FEN should parse");
        assert_eq!(generate_fen(&position), after_e4);
    }
}
