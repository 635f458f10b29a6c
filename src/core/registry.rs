use crate::{
    athlete::Athlete,
    contest::Contest,
    core::error::TourError,
    types::{DEFAULT_CAPACITY, EntityKind, Position},
};

/// Record with a natural key used for lookup inside a [`Registry`].
pub trait Keyed {
    /// Entity kind reported in errors.
    const KIND: EntityKind;

    /// Location or name identifying the record.
    fn key(&self) -> &str;
}

/// Fixed-capacity ordered collection addressed by 1-based position.
///
/// Removing an entry shifts every later entry down one position, so
/// positions are not stable across deletions. Keys are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    entries: Vec<T>,
    capacity: usize,
}

/// Contest stops in insertion order.
pub type ContestRegistry = Registry<Contest>;
/// Athletes in insertion order.
pub type AthleteRegistry = Registry<Athlete>;

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Registry<T> {
    /// Creates an empty registry holding at most [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty registry holding at most `capacity` entries.
    ///
    /// `capacity` may come from a file, so storage is only preallocated up
    /// to [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends `entry` at the next free position and returns that position.
    pub fn add(&mut self, entry: T) -> Result<Position, TourError> {
        if self.is_full() {
            return Err(TourError::CapacityExceeded {
                kind: T::KIND,
                capacity: self.capacity,
            });
        }
        if self.position_of(entry.key()).is_some() {
            return Err(TourError::Duplicate {
                kind: T::KIND,
                key: entry.key().to_string(),
            });
        }

        self.entries.push(entry);
        Ok(self.entries.len())
    }

    /// Returns the entry at 1-based `position`.
    pub fn get(&self, position: Position) -> Result<&T, TourError> {
        let idx = self.index_of(position)?;
        Ok(&self.entries[idx])
    }

    /// Mutable form of [`Registry::get`].
    pub fn get_mut(&mut self, position: Position) -> Result<&mut T, TourError> {
        let idx = self.index_of(position)?;
        Ok(&mut self.entries[idx])
    }

    /// Exact, case-sensitive key lookup.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Mutable form of [`Registry::find`].
    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.key() == key)
    }

    /// 1-based position of the entry carrying `key`.
    pub fn position_of(&self, key: &str) -> Option<Position> {
        self.entries
            .iter()
            .position(|e| e.key() == key)
            .map(|idx| idx + 1)
    }

    /// Removes the entry at 1-based `position`, compacting the rest.
    pub fn remove(&mut self, position: Position) -> Result<T, TourError> {
        let idx = self.index_of(position)?;
        Ok(self.entries.remove(idx))
    }

    /// Drops every entry; capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries held.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when another add would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    fn index_of(&self, position: Position) -> Result<usize, TourError> {
        if position == 0 || position > self.entries.len() {
            return Err(TourError::OutOfRange {
                kind: T::KIND,
                position,
                count: self.entries.len(),
            });
        }
        Ok(position - 1)
    }
}

impl Registry<Contest> {
    /// Looks a contest up by its location.
    pub fn find_by_location(&self, location: &str) -> Option<&Contest> {
        self.find(location)
    }
}

impl Registry<Athlete> {
    /// Looks an athlete up by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Athlete> {
        self.find(name)
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
