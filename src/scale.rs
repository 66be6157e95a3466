//! Ordered token scales with named aliases.
//!
//! A [`Scale`] is an ordered progression of token values (spacing steps,
//! font sizes, breakpoints) with an optional table of short names (`sm`,
//! `md`, ...) resolving to positions. Aliases are a secondary read path:
//! iteration and serialization only ever see the positional values.

use std::collections::HashMap;
use std::ops::Index;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Error returned when alias attachment fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// More alias names were supplied than the scale has entries
    TooManyAliases { aliases: usize, len: usize },
    /// The same alias name was supplied twice
    DuplicateAlias { name: String },
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::TooManyAliases { aliases, len } => {
                write!(
                    f,
                    "cannot attach {} aliases to a scale of length {}",
                    aliases, len
                )
            }
            ScaleError::DuplicateAlias { name } => {
                write!(f, "alias '{}' supplied more than once", name)
            }
        }
    }
}

impl std::error::Error for ScaleError {}

/// An ordered sequence of token values with named position aliases.
///
/// # Example
///
/// ```rust
/// use tokendeck::Scale;
///
/// let breakpoints = Scale::new(vec!["32em", "40em", "48em", "64em"])
///     .with_aliases(&["sm", "md", "lg", "xl"])
///     .unwrap();
///
/// assert_eq!(breakpoints[0], "32em");
/// assert_eq!(breakpoints.by_name("sm"), Some(&"32em"));
///
/// // Iteration yields only positional values, never alias names.
/// let listed: Vec<_> = breakpoints.iter().collect();
/// assert_eq!(listed.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scale<T> {
    values: Vec<T>,
    aliases: HashMap<String, usize>,
}

impl<T> Scale<T> {
    /// Creates a scale from an ordered list of values, with no aliases.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            aliases: HashMap::new(),
        }
    }

    /// Attaches alias names to positions `0..names.len()`.
    ///
    /// Alias lists longer than the scale are rejected up front rather than
    /// resolving out of range on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::TooManyAliases`] if `names.len()` exceeds the
    /// scale length, or [`ScaleError::DuplicateAlias`] if a name repeats.
    pub fn with_aliases(mut self, names: &[&str]) -> Result<Self, ScaleError> {
        if names.len() > self.values.len() {
            return Err(ScaleError::TooManyAliases {
                aliases: names.len(),
                len: self.values.len(),
            });
        }
        for (i, name) in names.iter().enumerate() {
            if self.aliases.insert((*name).to_string(), i).is_some() {
                return Err(ScaleError::DuplicateAlias {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(self)
    }

    /// Returns the value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Resolves an alias name to its value.
    ///
    /// Returns `None` for names that were never attached.
    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.aliases.get(name).and_then(|&i| self.values.get(i))
    }

    /// Iterates over the positional values only.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Returns the attached alias names and their positions.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, usize)> {
        self.aliases.iter().map(|(name, &i)| (name.as_str(), i))
    }

    /// Returns the number of positional values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the scale holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Derives a new scale value-by-value, carrying the alias table across.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokendeck::Scale;
    ///
    /// let breakpoints = Scale::new(vec!["32em", "48em"])
    ///     .with_aliases(&["sm", "lg"])
    ///     .unwrap();
    /// let queries = breakpoints.map(|bp| format!("(min-width:{})", bp));
    ///
    /// assert_eq!(queries.by_name("lg").unwrap(), "(min-width:48em)");
    /// ```
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Scale<U> {
        Scale {
            values: self.values.iter().map(f).collect(),
            aliases: self.aliases.clone(),
        }
    }
}

impl<T> Index<usize> for Scale<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

// Scales serialize as plain sequences. The alias table is a read path, not
// extra entries, so it never appears in serialized output.
impl<T: Serialize> Serialize for Scale<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
