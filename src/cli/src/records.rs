//! Line-oriented record handling: each line is either a bare scramble or an
//! identifier and a scramble separated by the configured delimiter.

use itertools::Itertools;
use rayon::prelude::*;
use scramble_core::reduce;

use crate::config::Config;

/// Reduces the scramble part of one record, leaving any identifier as is.
pub fn reduce_record(line: &str, delimiter: char) -> String {
    let line = line.trim();

    match line.split_once(delimiter) {
        Some((id, scramble)) => format!("{id}{delimiter}{}", reduce(scramble)),
        None => reduce(line),
    }
}

/// Reduces every record of `text`, keeping their order.
///
/// Records are independent, so they are spread over the worker pool.
pub fn reduce_records(text: &str, config: &Config) -> Vec<String> {
    let lines = text
        .lines()
        .filter(|line| config.keep_blank_lines || !line.trim().is_empty())
        .collect_vec();

    lines
        .par_iter()
        .map(|line| reduce_record(line, config.delimiter))
        .collect()
}
