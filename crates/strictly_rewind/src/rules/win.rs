//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player holding it.
fn first_line(board: &Board) -> Option<([Position; 3], Player)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((line, player))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] held entirely by
/// one player, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_line(board).map(|(_, player)| player)
}

/// Returns the line that [`check_winner`] found, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_line(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // X holds the top row and the left column; the row comes first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}
