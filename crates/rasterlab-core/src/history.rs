//! Edit history
//!
//! A value stack of immutable raster snapshots backing undo/redo in an
//! interactive shell. Because [`Raster`] clones share storage, pushing
//! a snapshot costs one reference count, not one image copy; the
//! snapshots stay valid because no operation mutates its input.

use crate::Raster;

/// Undo/redo history of raster snapshots.
///
/// The caller records the current buffer before applying a mutating
/// operation. Recording clears the redo branch, so a new edit after an
/// undo discards the abandoned future states.
///
/// # Examples
///
/// ```
/// use rasterlab_core::{Channels, EditHistory, Raster};
///
/// let v1 = Raster::new(4, 4, Channels::Gray).unwrap();
/// let v2 = v1.create_template();
///
/// let mut history = EditHistory::new();
/// history.record(v1.clone());
/// let back = history.undo(v2.clone()).unwrap();
/// assert!(back.sizes_equal(&v1));
/// assert!(history.can_redo());
/// ```
#[derive(Debug, Default)]
pub struct EditHistory {
    undo: Vec<Raster>,
    redo: Vec<Raster>,
    limit: Option<usize>,
}

impl EditHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        EditHistory::default()
    }

    /// Create a history that keeps at most `limit` undo snapshots.
    ///
    /// When the bound is exceeded the oldest snapshot is discarded.
    pub fn with_limit(limit: usize) -> Self {
        EditHistory {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record the pre-operation buffer and clear the redo branch.
    pub fn record(&mut self, snapshot: Raster) {
        self.undo.push(snapshot);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.remove(0);
            }
        }
        self.redo.clear();
    }

    /// Step back one edit.
    ///
    /// Exchanges `current` for the most recent undo snapshot. Returns
    /// `None` if there is nothing to undo.
    pub fn undo(&mut self, current: Raster) -> Option<Raster> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward one edit after an undo.
    ///
    /// Exchanges `current` for the most recent redo snapshot. Returns
    /// `None` if there is nothing to redo.
    pub fn redo(&mut self, current: Raster) -> Option<Raster> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Check whether an undo step is available.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check whether a redo step is available.
    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of stored undo snapshots.
    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Discard all snapshots, e.g. when a new image is opened.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Channels, Raster};

    fn gray_of(val: u8) -> Raster {
        Raster::from_vec(1, 1, Channels::Gray, vec![val]).unwrap()
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = EditHistory::new();
        let v1 = gray_of(1);
        let v2 = gray_of(2);

        history.record(v1.clone());
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let restored = history.undo(v2.clone()).unwrap();
        assert_eq!(restored.data(), v1.data());
        assert!(history.can_redo());

        let forward = history.redo(restored).unwrap();
        assert_eq!(forward.data(), v2.data());
        assert!(history.can_undo());
    }

    #[test]
    fn test_empty_history() {
        let mut history = EditHistory::new();
        assert!(history.undo(gray_of(0)).is_none());
        assert!(history.redo(gray_of(0)).is_none());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = EditHistory::new();
        history.record(gray_of(1));
        let _ = history.undo(gray_of(2)).unwrap();
        assert!(history.can_redo());

        history.record(gray_of(3));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_bounded_history_drops_oldest() {
        let mut history = EditHistory::with_limit(2);
        history.record(gray_of(1));
        history.record(gray_of(2));
        history.record(gray_of(3));
        assert_eq!(history.undo_depth(), 2);

        // Oldest snapshot (1) was dropped; undo order is 3, then 2
        let a = history.undo(gray_of(9)).unwrap();
        assert_eq!(a.data(), &[3]);
        let b = history.undo(a).unwrap();
        assert_eq!(b.data(), &[2]);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_clear() {
        let mut history = EditHistory::new();
        history.record(gray_of(1));
        let _ = history.undo(gray_of(2));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
