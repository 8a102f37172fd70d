use chrono::{DateTime, Utc};

/// Default expressions a column definition can carry.
///
/// Rendering is flavor specific and done by the SQL serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// `''`
    EmptyString,

    /// `0`
    Zero,

    /// `false`
    False,

    /// The current date or time, depending on the column type
    Now,

    /// A fixed point in time, rendered as a date or timestamp literal
    At(DateTime<Utc>),

    /// A random UUID generated by the database
    RandomUuid,
}

impl DefaultValue {
    /// Replaces [`DefaultValue::Now`] with the given instant.
    pub fn at(self, now: DateTime<Utc>) -> DefaultValue {
        match self {
            DefaultValue::Now => DefaultValue::At(now),
            other => other,
        }
    }
}
