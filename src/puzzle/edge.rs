//! Tile edges and the matching predicate
//!
//! An edge pairs an opaque label with a polarity. Two touching edges fit
//! when they carry the same label and opposite polarities, like the front
//! and back halves of a picture printed across two cards.

/// Orientation flag of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    /// Front half of a motif
    Front,
    /// Back half of a motif
    Back,
}

impl Polarity {
    /// The other polarity
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// `true` for [`Polarity::Front`]
    pub const fn is_front(self) -> bool {
        matches!(self, Self::Front)
    }
}

impl From<bool> for Polarity {
    fn from(is_front: bool) -> Self {
        if is_front { Self::Front } else { Self::Back }
    }
}

impl From<Polarity> for bool {
    fn from(polarity: Polarity) -> Self {
        polarity.is_front()
    }
}

/// One side of a tile: a label and its polarity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<S> {
    label: S,
    polarity: Polarity,
}

impl<S> Edge<S> {
    /// Create an edge from a label and polarity
    pub const fn new(label: S, polarity: Polarity) -> Self {
        Self { label, polarity }
    }

    /// Create a front-facing edge
    pub const fn front(label: S) -> Self {
        Self::new(label, Polarity::Front)
    }

    /// Create a back-facing edge
    pub const fn back(label: S) -> Self {
        Self::new(label, Polarity::Back)
    }

    /// Edge label
    pub const fn label(&self) -> &S {
        &self.label
    }

    /// Edge polarity
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<S: PartialEq> Edge<S> {
    /// Check whether two touching edges fit together
    ///
    /// Symmetric: same label and opposite polarity.
    pub fn matches(&self, other: &Self) -> bool {
        self.label == other.label && self.polarity != other.polarity
    }
}
