//! Extracted diagrams and the per-run collection of them.
//!
//! A [`DiagramRecord`] holds everything the composite document needs to know
//! about one level's diagram: its coordinate system, its intrinsic size, and
//! the cleaned markup that was found inside its root element. Records are
//! gathered into a [`DiagramSet`], keyed by [`Level`], which always iterates
//! in fixed level order.

use std::collections::{BTreeMap, btree_map};

use crate::level::Level;

/// The view box used when a source diagram does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 400 300";

/// The width used when a source diagram's width is missing or unusable.
pub const DEFAULT_WIDTH: f64 = 400.0;

/// The height used when a source diagram's height is missing or unusable.
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// The extracted metadata and cleaned content for one level's diagram.
///
/// Width and height are always positive and finite, so
/// [`aspect_ratio`](Self::aspect_ratio) is always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramRecord {
    level: Level,
    view_box: String,
    width: f64,
    height: f64,
    content: String,
}

impl DiagramRecord {
    /// Creates a new record.
    ///
    /// Non-positive or non-finite sizes are replaced by [`DEFAULT_WIDTH`] and
    /// [`DEFAULT_HEIGHT`] respectively, each independently of the other.
    ///
    /// # Arguments
    ///
    /// * `level` - The level this diagram belongs to.
    /// * `view_box` - The source diagram's `viewBox` attribute value.
    /// * `width` - The intrinsic width in user units.
    /// * `height` - The intrinsic height in user units.
    /// * `content` - The cleaned markup of the root element's children.
    pub fn new(
        level: Level,
        view_box: impl Into<String>,
        width: f64,
        height: f64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            level,
            view_box: view_box.into(),
            width: positive_or(width, DEFAULT_WIDTH),
            height: positive_or(height, DEFAULT_HEIGHT),
            content: content.into(),
        }
    }

    /// Returns the level this diagram belongs to.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the `viewBox` attribute value.
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// Returns the intrinsic width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the intrinsic height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `width / height`. Always positive.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Returns the cleaned fragment markup.
    pub fn content(&self) -> &str {
        &self.content
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

/// The records collected during one run, at most one per [`Level`].
///
/// Iteration always follows [`Level`] order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramSet {
    records: BTreeMap<Level, DiagramRecord>,
}

impl DiagramSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its own level.
    ///
    /// Returns the record previously stored for that level, if any. The new
    /// record always wins; records are never merged.
    pub fn insert(&mut self, record: DiagramRecord) -> Option<DiagramRecord> {
        self.records.insert(record.level(), record)
    }

    /// Returns the record for `level`, if present.
    pub fn get(&self, level: Level) -> Option<&DiagramRecord> {
        self.records.get(&level)
    }

    /// Returns `true` if a record exists for `level`.
    pub fn contains(&self, level: Level) -> bool {
        self.records.contains_key(&level)
    }

    /// Returns the levels that have a record, in level order.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.records.keys().copied()
    }

    /// Iterates over the records in level order.
    pub fn iter(&self) -> btree_map::Values<'_, Level, DiagramRecord> {
        self.records.values()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a DiagramSet {
    type Item = &'a DiagramRecord;
    type IntoIter = btree_map::Values<'a, Level, DiagramRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<DiagramRecord> for DiagramSet {
    fn from_iter<T: IntoIterator<Item = DiagramRecord>>(iter: T) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn record(level: Level, width: f64, height: f64) -> DiagramRecord {
        DiagramRecord::new(level, DEFAULT_VIEW_BOX, width, height, "<rect/>")
    }

    #[test]
    fn test_aspect_ratio() {
        let rec = record(Level::Context, 400.0, 300.0);
        assert!(approx_eq!(f64, rec.aspect_ratio(), 4.0 / 3.0, ulps = 2));

        let rec = record(Level::Container, 500.0, 400.0);
        assert!(approx_eq!(f64, rec.aspect_ratio(), 1.25, ulps = 2));
    }

    #[test]
    fn test_invalid_sizes_fall_back_independently() {
        let rec = record(Level::Code, 640.0, 0.0);
        assert_eq!(rec.width(), 640.0);
        assert_eq!(rec.height(), DEFAULT_HEIGHT);

        let rec = record(Level::Code, -1.0, 200.0);
        assert_eq!(rec.width(), DEFAULT_WIDTH);
        assert_eq!(rec.height(), 200.0);

        let rec = record(Level::Code, f64::NAN, f64::INFINITY);
        assert_eq!(rec.width(), DEFAULT_WIDTH);
        assert_eq!(rec.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_set_last_insert_wins() {
        let mut set = DiagramSet::new();
        assert!(set.insert(record(Level::Context, 100.0, 100.0)).is_none());

        let replaced = set.insert(record(Level::Context, 200.0, 100.0));
        assert_eq!(replaced.map(|r| r.width()), Some(100.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Level::Context).map(|r| r.width()), Some(200.0));
    }

    #[test]
    fn test_set_iterates_in_level_order() {
        let set: DiagramSet = [
            record(Level::Code, 1.0, 1.0),
            record(Level::Context, 1.0, 1.0),
            record(Level::Component, 1.0, 1.0),
        ]
        .into_iter()
        .collect();

        let levels: Vec<_> = set.levels().collect();
        assert_eq!(levels, [Level::Context, Level::Component, Level::Code]);
        assert!(!set.contains(Level::Container));

        let from_iter: Vec<_> = set.iter().map(DiagramRecord::level).collect();
        assert_eq!(from_iter, levels);
    }

    #[test]
    fn test_empty_set() {
        let set = DiagramSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get(Level::Context).is_none());
    }

    proptest! {
        #[test]
        fn aspect_ratio_is_always_positive(width in any::<f64>(), height in any::<f64>()) {
            let rec = DiagramRecord::new(Level::Context, DEFAULT_VIEW_BOX, width, height, "");
            prop_assert!(rec.aspect_ratio() > 0.0);
            prop_assert!(rec.aspect_ratio().is_finite());
        }
    }
}
