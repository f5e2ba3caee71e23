use std::ops::Index;

use crate::{Axis, Face, ROTATION_TABLES};

/// Tracks which face label sits at each fixed physical position after the
/// whole-cube rotations implied by earlier wide moves.
///
/// A frame belongs to exactly one conversion. It starts as the identity and is
/// dropped when that conversion returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceFrame {
    labels: [Face; 6],
}

impl FaceFrame {
    /// Position `i` holds `Face::ALL[i]`.
    pub const fn identity() -> Self {
        FaceFrame { labels: Face::ALL }
    }

    pub fn label(&self, position: usize) -> Face {
        self.labels[position]
    }

    pub fn labels(&self) -> &[Face; 6] {
        &self.labels
    }

    /// Turns the whole cube `quarter_turns` times around `axis`. Counts are
    /// taken mod 4, so four turns leave the frame unchanged.
    pub fn rotate(&mut self, axis: Axis, quarter_turns: u8) {
        ROTATION_TABLES.turn(axis, quarter_turns, &mut self.labels);
    }
}

impl Default for FaceFrame {
    fn default() -> Self {
        FaceFrame::identity()
    }
}

impl Index<usize> for FaceFrame {
    type Output = Face;

    fn index(&self, position: usize) -> &Self::Output {
        &self.labels[position]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{Axis, Face};

    use super::FaceFrame;

    #[test]
    fn identity_maps_each_position_to_its_face() {
        let frame = FaceFrame::identity();

        for (position, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(frame.label(position), face);
            assert_eq!(frame[position], face);
        }

        assert_eq!(frame, FaceFrame::default());
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        // Start from the identity and from every frame two rotations away
        let mut frames = vec![FaceFrame::identity()];
        for (first, second) in Axis::ALL.into_iter().cartesian_product(Axis::ALL) {
            for turns in 1..=3 {
                let mut frame = FaceFrame::identity();
                frame.rotate(first, turns);
                frame.rotate(second, 1);
                frames.push(frame);
            }
        }

        for frame in frames {
            for axis in Axis::ALL {
                let mut rotated = frame;
                rotated.rotate(axis, 4);
                assert_eq!(rotated, frame);

                let mut stepwise = frame;
                for _ in 0..4 {
                    stepwise.rotate(axis, 1);
                }
                assert_eq!(stepwise, frame);
            }
        }
    }

    #[test]
    fn rotations_compose_in_sequence() {
        let mut frame = FaceFrame::identity();
        frame.rotate(Axis::Y, 1);
        assert_eq!(
            frame.labels(),
            &[Face::U, Face::R, Face::B, Face::D, Face::L, Face::F]
        );

        frame.rotate(Axis::Y, 2);
        assert_eq!(
            frame.labels(),
            &[Face::U, Face::L, Face::F, Face::D, Face::R, Face::B]
        );

        let mut direct = FaceFrame::identity();
        direct.rotate(Axis::Y, 3);
        assert_eq!(frame, direct);
    }

    #[test]
    fn rotation_stays_a_permutation() {
        let mut frame = FaceFrame::identity();
        frame.rotate(Axis::X, 1);
        frame.rotate(Axis::Z, 3);
        frame.rotate(Axis::Y, 2);

        assert!(frame.labels().iter().all_unique());
    }
}
