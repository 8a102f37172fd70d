use super::Value;

/// Restricts a statement to the rows whose column equals a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Index of the column within its table
    pub column: usize,

    pub value: Value,
}

impl Filter {
    pub fn eq(column: usize, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// Index of the column within its table
    pub column: usize,

    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(column: usize) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: usize) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}
