//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and tests can compose them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completed_label, find_winning_combo, winning_combos};
