//! Sorting model and sort-spec parsing
//!
//! A [`Sorting`] is an ordered set of `(property, direction)` pairs. Insertion
//! order is the tie-break precedence for multi-key sorts: the first property
//! is the primary sort key. An empty `Sorting` means "unsorted".
//!
//! Sort specs arrive from the outside as strings of the form
//! `"<field><delimiter><direction>"` (for example `"name,asc"`). Parsing is
//! deliberately forgiving: a malformed spec is dropped, never fatal to the
//! request carrying it.
//!
//! # Example
//!
//! ```rust
//! use manila::sorting::{Direction, Property, Sorting};
//!
//! let sorting = Sorting::parse(["name,asc", "age,desc"], ',');
//! assert_eq!(
//!     sorting.properties,
//!     vec![Property::asc("name"), Property::desc("age")]
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default delimiter between the field and direction segments of a sort spec
pub const DEFAULT_SORT_DELIMITER: char = ',';

/// Direction to sort by
///
/// Serializes to its wire form (`"ASC"` / `"DESC"`); displays and encodes
/// into sort specs in lowercase.
///
/// # Example
///
/// ```rust
/// use manila::sorting::Direction;
///
/// assert_eq!(format!("{}", Direction::Asc), "asc");
/// assert_eq!(serde_json::to_value(Direction::Desc).unwrap(), "DESC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9)
    Asc,
    /// Descending order (Z-A, 9-0)
    Desc,
}

impl Direction {
    /// The lowercase spec form of this direction
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse the direction segment of a sort spec, case-insensitively.
    ///
    /// Only the literals `asc` and `desc` are recognized; anything else is
    /// `None`, which the parser treats as an invalid spec.
    fn from_segment(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if segment.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Property to sort by
///
/// # Example
///
/// ```rust
/// use manila::sorting::{Direction, Property};
///
/// let property = Property::desc("created_at");
/// assert_eq!(property.name, "created_at");
/// assert_eq!(property.direction, Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    /// Name of the property
    pub name: String,
    /// Direction to sort the property by
    pub direction: Direction,
}

impl Property {
    /// Property with ascending direction
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Asc,
        }
    }

    /// Property with descending direction
    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Desc,
        }
    }

    /// Encode this property back into its spec form
    fn to_spec(&self, delimiter: char) -> String {
        format!("{}{}{}", self.name, delimiter, self.direction)
    }
}

/// Sorting to apply when reading data
///
/// Immutable once constructed; equality is structural. An empty property list
/// means unsorted.
///
/// # Example
///
/// ```rust
/// use manila::sorting::Sorting;
///
/// let unsorted = Sorting::unsorted();
/// assert!(unsorted.is_unsorted());
///
/// let by_name = Sorting::asc("name");
/// assert_eq!(by_name.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sorting {
    /// Properties to sort by, primary key first
    pub properties: Vec<Property>,
}

impl Sorting {
    /// Sorting over the given properties
    #[must_use]
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Unsorted sorting
    #[must_use]
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Ascending sorting on a single property
    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(vec![Property::asc(property)])
    }

    /// Descending sorting on a single property
    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(vec![Property::desc(property)])
    }

    /// Ascending sorting on several properties, in precedence order
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::sorting::Sorting;
    ///
    /// let sorting = Sorting::asc_all(["surname", "name"]);
    /// assert_eq!(sorting.properties.len(), 2);
    /// ```
    pub fn asc_all<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(properties.into_iter().map(Property::asc).collect())
    }

    /// Whether no sort keys are present
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.properties.is_empty()
    }

    /// Parse external sort specs into a `Sorting`.
    ///
    /// Each spec must split on `delimiter` into exactly two non-empty parts:
    /// the property name and the direction. The direction is matched
    /// case-insensitively against `asc` and `desc`; an unrecognized literal
    /// invalidates the spec. Invalid specs are dropped with a warning, never
    /// surfaced as an error. Duplicate `(name, direction)` pairs collapse to
    /// their first occurrence, so output order follows first-seen input
    /// order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::sorting::{Property, Sorting};
    ///
    /// let sorting = Sorting::parse(["name,ASC", "name,ASC", "broken"], ',');
    /// assert_eq!(sorting.properties, vec![Property::asc("name")]);
    ///
    /// assert!(Sorting::parse(Vec::<String>::new(), ',').is_unsorted());
    /// ```
    pub fn parse<I, S>(specs: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut properties: Vec<Property> = Vec::new();
        for spec in specs {
            let spec = spec.as_ref();
            match parse_spec(spec, delimiter) {
                Some(property) => {
                    if !properties.contains(&property) {
                        properties.push(property);
                    }
                }
                None => {
                    tracing::warn!(spec, "discarded invalid sort spec");
                }
            }
        }
        Self::new(properties)
    }

    /// Encode this sorting back into its external spec form.
    ///
    /// The output round-trips through [`Sorting::parse`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::sorting::Sorting;
    ///
    /// let sorting = Sorting::desc("age");
    /// let specs = sorting.to_specs(',');
    /// assert_eq!(specs, vec!["age,desc"]);
    /// assert_eq!(Sorting::parse(&specs, ','), sorting);
    /// ```
    #[must_use]
    pub fn to_specs(&self, delimiter: char) -> Vec<String> {
        self.properties
            .iter()
            .map(|property| property.to_spec(delimiter))
            .collect()
    }
}

/// Parse a single sort spec into a property.
///
/// `None` marks the spec as invalid: wrong number of segments, an empty
/// segment, or an unrecognized direction literal.
fn parse_spec(spec: &str, delimiter: char) -> Option<Property> {
    let mut segments = spec.split(delimiter);
    let name = segments.next()?.trim();
    let direction = segments.next()?.trim();
    if segments.next().is_some() || name.is_empty() || direction.is_empty() {
        return None;
    }

    let direction = Direction::from_segment(direction)?;

    Some(Property {
        name: name.to_string(),
        direction,
    })
}
