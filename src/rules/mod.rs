//! Pure predicates over a board: win and draw detection.

mod draw;
mod win;

pub use draw::{DEFAULT_MOVE_CAP, DEFAULT_TIME_CAP_SECS, check_draw};
pub use win::{WIN_LINES, check_win};
