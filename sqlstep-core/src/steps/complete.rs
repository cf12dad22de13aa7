//! Terminal-only stage

use super::{stage, Terminal};
use crate::Statement;

/// A finished statement that can only be rendered
#[derive(Debug)]
pub struct Complete {
    statement: Statement,
}

impl Complete {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }
}

stage!(Complete);

impl Terminal for Complete {}
