//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). They know nothing
//! about history or turn order, which keeps them usable from invariants and
//! the view alike.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
