//! Observable collection of data points.
//!
//! ## Purpose
//!
//! This module provides `PointSet`, the single source of truth for which points
//! currently participate in regression. Every mutation emits a `PointEvent`.
//!
//! ## Design notes
//!
//! * **Storage**: Column layout (`ids`, `xs`, `ys`) so summations run over
//!   contiguous slices.
//! * **Identity**: Points are addressed by `PointId`, never by value.
//! * **Two consumers**: Events are delivered synchronously to registered
//!   listeners and also appended to a journal that the owner drains.
//!
//! ## Key concepts
//!
//! * **Listener**: A closure invoked for every event, in registration order.
//! * **Journal**: Ordered record of events since the last `drain_events`.
//!
//! ## Invariants
//!
//! * `ids`, `xs` and `ys` always have the same length.
//! * Every stored coordinate is finite.
//! * A failed mutation emits nothing and changes nothing.
//!
//! ## Non-goals
//!
//! * This module performs no numerical work.
//! * Events are never coalesced.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use core::fmt;
use core::mem;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::point::{Point, PointId};

// ============================================================================
// Events
// ============================================================================

/// Change notification emitted by a `PointSet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointEvent<T> {
    /// A point joined the set.
    Added {
        /// Identity of the new point.
        id: PointId,
        /// Its position.
        point: Point<T>,
    },

    /// A point left the set.
    Removed {
        /// Identity of the removed point.
        id: PointId,
        /// Its last position.
        point: Point<T>,
    },

    /// A member point changed position.
    Moved {
        /// Identity of the moved point.
        id: PointId,
        /// Position before the move.
        from: Point<T>,
        /// Position after the move.
        to: Point<T>,
    },
}

impl<T: Copy> PointEvent<T> {
    /// Identity of the point the event refers to.
    #[inline]
    pub fn id(&self) -> PointId {
        match *self {
            PointEvent::Added { id, .. }
            | PointEvent::Removed { id, .. }
            | PointEvent::Moved { id, .. } => id,
        }
    }
}

/// Handle returned by `PointSet::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked for every point event.
pub type Listener<T> = Box<dyn FnMut(&PointEvent<T>) + Send>;

// ============================================================================
// PointSet
// ============================================================================

/// Ordered, observable set of 2-D points.
pub struct PointSet<T> {
    ids: Vec<PointId>,
    xs: Vec<T>,
    ys: Vec<T>,
    next_id: u64,
    journal: Vec<PointEvent<T>>,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: u64,
}

impl<T: Float> Default for PointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for PointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointSet")
            .field("ids", &self.ids)
            .field("xs", &self.xs)
            .field("ys", &self.ys)
            .field("pending_events", &self.journal.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Float> PointSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            xs: Vec::new(),
            ys: Vec::new(),
            next_id: 0,
            journal: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Create an empty set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of member points.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when `id` is a current member.
    #[inline]
    pub fn contains(&self, id: PointId) -> bool {
        self.index_of(id).is_some()
    }

    /// Current position of a member point.
    pub fn get(&self, id: PointId) -> Option<Point<T>> {
        self.index_of(id).map(|i| Point::new(self.xs[i], self.ys[i]))
    }

    /// Member ids in insertion order.
    #[inline]
    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    /// x coordinates in insertion order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// y coordinates in insertion order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Iterate over `(id, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point<T>)> + '_ {
        self.ids
            .iter()
            .zip(self.xs.iter().zip(self.ys.iter()))
            .map(|(&id, (&x, &y))| (id, Point::new(x, y)))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a point and return its new identity.
    pub fn add(&mut self, point: Point<T>) -> Result<PointId, RegressionError> {
        check_finite(&point)?;

        let id = PointId(self.next_id);
        self.next_id += 1;
        self.ids.push(id);
        self.xs.push(point.x);
        self.ys.push(point.y);

        self.emit(PointEvent::Added { id, point });
        Ok(id)
    }

    /// Remove a member point and return its last position.
    pub fn remove(&mut self, id: PointId) -> Result<Point<T>, RegressionError> {
        let i = self.index_of(id).ok_or(RegressionError::NotFound(id))?;

        self.ids.remove(i);
        let point = Point::new(self.xs.remove(i), self.ys.remove(i));

        self.emit(PointEvent::Removed { id, point });
        Ok(point)
    }

    /// Move a member point in place and return its previous position.
    pub fn set_position(
        &mut self,
        id: PointId,
        point: Point<T>,
    ) -> Result<Point<T>, RegressionError> {
        let i = self.index_of(id).ok_or(RegressionError::NotFound(id))?;
        check_finite(&point)?;

        let from = Point::new(self.xs[i], self.ys[i]);
        self.xs[i] = point.x;
        self.ys[i] = point.y;

        self.emit(PointEvent::Moved { id, from, to: point });
        Ok(from)
    }

    /// Remove every point, emitting one `Removed` event per point.
    ///
    /// Returns the number of points removed.
    pub fn clear(&mut self) -> usize {
        let ids = mem::take(&mut self.ids);
        let xs = mem::take(&mut self.xs);
        let ys = mem::take(&mut self.ys);
        let count = ids.len();

        for ((id, x), y) in ids.into_iter().zip(xs).zip(ys) {
            self.emit(PointEvent::Removed {
                id,
                point: Point::new(x, y),
            });
        }
        count
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    /// Register a listener for every subsequent event.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PointEvent<T>) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Take every event emitted since the previous drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PointEvent<T>> {
        mem::take(&mut self.journal)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    #[inline]
    fn index_of(&self, id: PointId) -> Option<usize> {
        self.ids.iter().position(|&member| member == id)
    }

    fn emit(&mut self, event: PointEvent<T>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
        self.journal.push(event);
    }
}

#[inline]
fn check_finite<T: Float>(point: &Point<T>) -> Result<(), RegressionError> {
    if !point.is_finite() {
        return Err(RegressionError::InvalidPoint {
            x: point.x.to_f64().unwrap_or(f64::NAN),
            y: point.y.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
