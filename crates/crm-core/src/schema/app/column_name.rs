use std::fmt;

/// The storage-safe identifier of a custom column.
///
/// Derived from an operator supplied display name: lower-cased, whitespace
/// runs replaced by `_`, anything outside `[a-z0-9_]` removed, and prefixed
/// with [`ColumnName::PREFIX`]. Existing `column_metadata` rows were written
/// with exactly this rule, so it must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnName(String);

impl ColumnName {
    /// Namespaces operator-created columns from the built-in ones.
    pub const PREFIX: &'static str = "custom_";

    pub fn derive(display_name: &str) -> ColumnName {
        let lowered = display_name.to_lowercase();

        let mut suffix = String::with_capacity(lowered.len());
        let mut in_whitespace = false;

        for ch in lowered.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    suffix.push('_');
                }
                in_whitespace = true;
                continue;
            }

            in_whitespace = false;

            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
                suffix.push(ch);
            }
        }

        ColumnName(format!("{}{suffix}", Self::PREFIX))
    }

    /// Wraps an identifier read back from storage without re-deriving it.
    pub fn from_stored(name: impl Into<String>) -> ColumnName {
        ColumnName(name.into())
    }

    /// Returns `true` if `name` is in the custom column namespace.
    pub fn is_custom(name: &str) -> bool {
        name.starts_with(Self::PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier without its prefix.
    pub fn suffix(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Returns `true` when nothing of the display name survived derivation.
    pub fn is_bare(&self) -> bool {
        self.suffix().is_empty()
    }

    /// The name to show an operator, suitable to derive this identifier again.
    ///
    /// Each `_` becomes a space, except that a run of underscores keeps all
    /// but its last one, since a run of spaces would collapse into a single
    /// `_` on derivation.
    pub fn display_name(&self) -> String {
        let suffix = self.suffix();
        let mut display = String::with_capacity(suffix.len());
        let mut chars = suffix.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '_' && chars.peek() != Some(&'_') {
                display.push(' ');
            } else {
                display.push(ch);
            }
        }

        display
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColumnName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<ColumnName> for String {
    fn from(value: ColumnName) -> Self {
        value.0
    }
}
