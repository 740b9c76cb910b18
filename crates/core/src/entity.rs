//! Entity trait: records identified by a server-assigned key.

/// A record whose identity is its key, not its attribute values.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this record is the one identified by `id`.
    fn is_identified_by(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
