use log::debug;
use thiserror::Error;

use crate::Axis;

/// One quarter turn of the whole cube around some axis, as a mapping over the
/// six position indices. After the turn, position `i` holds whatever was at
/// position `table[i]` before it.
pub type QuarterTurnTable = [usize; 6];

/// The quarter-turn permutation for each axis of whole-cube rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTables {
    x: QuarterTurnTable,
    y: QuarterTurnTable,
    z: QuarterTurnTable,
}

/// The tables every conversion uses. Position indices follow the `U F R D B L`
/// face order.
pub const ROTATION_TABLES: RotationTables = RotationTables::new(
    [1, 3, 2, 4, 0, 5],
    [0, 2, 4, 3, 5, 1],
    [5, 1, 0, 2, 4, 3],
);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationTableError {
    #[error("The {axis} rotation table {table:?} is not a permutation of the six positions")]
    NotABijection {
        axis: Axis,
        table: QuarterTurnTable,
    },
    #[error(
        "Four quarter turns of the {axis} rotation table {table:?} do not return to the identity"
    )]
    WrongOrder {
        axis: Axis,
        table: QuarterTurnTable,
    },
}

impl RotationTables {
    pub const fn new(x: QuarterTurnTable, y: QuarterTurnTable, z: QuarterTurnTable) -> Self {
        RotationTables { x, y, z }
    }

    pub fn quarter_turn(&self, axis: Axis) -> &QuarterTurnTable {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Applies `quarter_turns mod 4` quarter turns around `axis` to `labels`,
    /// one after another.
    pub fn turn<T: Copy>(&self, axis: Axis, quarter_turns: u8, labels: &mut [T; 6]) {
        let table = self.quarter_turn(axis);

        for _ in 0..quarter_turns % 4 {
            *labels = permute(table, labels);
        }
    }

    /// Checks that every table is a permutation of order four.
    ///
    /// # Errors
    ///
    /// Returns the first axis whose table fails either check.
    pub fn verify(&self) -> Result<(), RotationTableError> {
        for axis in Axis::ALL {
            let table = *self.quarter_turn(axis);

            let mut seen = [false; 6];
            for &position in &table {
                if position >= seen.len() || seen[position] {
                    return Err(RotationTableError::NotABijection { axis, table });
                }

                seen[position] = true;
            }

            let identity: [usize; 6] = std::array::from_fn(|i| i);
            let mut labels = identity;
            for _ in 0..4 {
                labels = permute(&table, &labels);
            }

            if labels != identity {
                return Err(RotationTableError::WrongOrder { axis, table });
            }
        }

        Ok(())
    }
}

fn permute<T: Copy>(table: &QuarterTurnTable, labels: &[T; 6]) -> [T; 6] {
    std::array::from_fn(|i| labels[table[i]])
}

/// Runs [`RotationTables::verify`] on [`ROTATION_TABLES`]. Call this once
/// before converting anything; a failure means the build is broken and no
/// scramble can be trusted.
///
/// # Errors
///
/// Propagates the table defect found.
pub fn verify_rotation_tables() -> Result<(), RotationTableError> {
    ROTATION_TABLES.verify()?;

    debug!(target: "rotation", "Rotation tables passed the order-4 self-check");

    Ok(())
}
