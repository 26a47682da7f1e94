use std::fmt;

use super::model::Record;

// ---------------------------------------------------------------------------
// Selection: one choice per categorical dimension
// ---------------------------------------------------------------------------

/// Either the wildcard or one concrete categorical value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Only(v) => f.write_str(v),
        }
    }
}

/// The complete filter state. Replaced as a whole on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub brand: Choice,
    pub segment: Choice,
    pub drivetrain: Choice,
}

impl Selection {
    /// No restriction on any dimension.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_brand(self, brand: Choice) -> Self {
        Self { brand, ..self }
    }

    pub fn with_segment(self, segment: Choice) -> Self {
        Self { segment, ..self }
    }

    pub fn with_drivetrain(self, drivetrain: Choice) -> Self {
        Self { drivetrain, ..self }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.brand.is_all() && self.segment.is_all() && self.drivetrain.is_all()
    }
}

// ---------------------------------------------------------------------------
// Predicate construction and application
// ---------------------------------------------------------------------------

/// Build the record predicate for `selection`. The closure owns its own copy
/// of the selection, so later edits to the caller's state do not leak in.
pub fn build_predicate(selection: &Selection) -> impl Fn(&Record) -> bool {
    let Selection {
        brand,
        segment,
        drivetrain,
    } = selection.clone();

    move |r: &Record| {
        brand.matches(&r.brand) && segment.matches(&r.segment) && drivetrain.matches(&r.drivetrain)
    }
}

/// Records passing `selection`, in dataset order.
pub fn filter_records<'a>(records: &'a [Record], selection: &Selection) -> Vec<&'a Record> {
    let matches = build_predicate(selection);
    records.iter().filter(|r| matches(r)).collect()
}
