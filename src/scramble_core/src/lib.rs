//! Rewrites cube scrambles that contain wide moves into scrambles made of
//! single-layer moves only.
//!
//! Each wide move is replaced by the single-layer turn of the opposite face,
//! and the whole-cube rotation it implies is recorded in a [`FaceFrame`] that
//! relabels every move after it.
//!
//! ```
//! assert_eq!(scramble_core::reduce("Rw U2 Fw'"), "L F2 U'");
//! ```

mod face;
mod frame;
mod notation;
mod reduce;
mod rotation;

pub use face::{Axis, Face, ParseFaceError, TurnDirection};
pub use frame::FaceFrame;
pub use notation::{Move, MoveSequence, MoveToken, Tokens, tokenize};
pub use reduce::{reduce, reduce_moves, reduce_token};
pub use rotation::{
    QuarterTurnTable, ROTATION_TABLES, RotationTableError, RotationTables, verify_rotation_tables,
};
