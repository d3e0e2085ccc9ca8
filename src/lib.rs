//! Simulation core of a two-player, three-plane Submarines game.
//!
//! Each player owns a board of `rows x cols x 3` cells split into undersea,
//! sea-level, and air planes. Pieces from a fixed catalog are placed at
//! random during setup; play then proceeds one targeted coordinate at a time
//! until a board is reduced to its General, or the General itself is hit.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod piece;
mod placement;
mod ui;

pub use board::{Board, BoardShape, BoardSnapshot};
pub use common::{BoardError, ConfigError, Signal};
pub use config::{PieceConfig, MAX_PIECE_COUNT, MAX_PLACEMENT_ATTEMPTS, MIN_BOARD_DIM, PLANES};
pub use game::{GameStatus, Player, SubmarinesGame};
pub use logging::init_logging;
pub use piece::{Coord, Footprint, Piece, PieceId, PieceKind, Plane};
pub use ui::print_board;
