//! Stage following a sorting segment

use super::{stage, Limit, Sort, Terminal};
use crate::Statement;

/// A statement with at least one `GROUP BY` / `ORDER BY` segment
#[derive(Debug)]
pub struct Sorted {
    statement: Statement,
}

impl Sorted {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }
}

stage!(Sorted);

impl Terminal for Sorted {}
impl Sort for Sorted {}
impl Limit for Sorted {}
