use log::trace;

use crate::{FaceFrame, Move, MoveSequence, MoveToken, tokenize};

/// Reduces one token against `frame`, advancing the frame when the token is
/// wide.
///
/// A wide move becomes the single-layer move on the face opposite its base
/// face, as currently labeled by the frame, with the same direction. The frame
/// then turns around the base face's axis by the move's quarter turns, so every
/// later token is read through the new orientation. A narrow move is relabeled
/// through the frame and leaves it untouched.
pub fn reduce_token(frame: &mut FaceFrame, token: MoveToken) -> Move {
    let face = token.face;

    if !token.wide {
        return Move::new(frame.label(face.index()), token.direction);
    }

    let reduced = Move::new(frame.label(face.opposite().index()), token.direction);

    let quarter_turns = (token.direction.quarter_turns() * face.base_quarter_turns()) % 4;
    frame.rotate(face.axis(), quarter_turns);

    reduced
}

/// Rewrites a scramble into single-layer moves only.
///
/// Each call threads its own [`FaceFrame`] through the tokens of `text`, so
/// calls are independent of each other and safe to run concurrently.
pub fn reduce_moves(text: &str) -> MoveSequence {
    let mut frame = FaceFrame::identity();

    tokenize(text)
        .map(|token| {
            let reduced = reduce_token(&mut frame, token);
            trace!(target: "reduce", "{token} -> {reduced}, frame {:?}", frame.labels());
            reduced
        })
        .collect()
}

/// Same as [`reduce_moves`], rendered in standard notation.
pub fn reduce(text: &str) -> String {
    reduce_moves(text).to_string()
}
