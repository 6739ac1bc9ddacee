//! The object store: identity registry and kind-indexed lookup.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{Entity, EntityId, Kind};
use crate::error::{GameError, Result};
use crate::objects::{CardPack, GameObject, Player};

/// Registry of every live domain object, indexed by id and by kind.
///
/// Invariant: an object present in the id index appears exactly once in the
/// matching kind collection, and vice versa. The set of recognized kinds is
/// fixed when the store is created.
///
/// The store has no concurrency control of its own: it expects a single
/// logical writer, enforced by the calling layer. Games reference a store
/// by borrowing it per call rather than holding shared pointers.
///
/// ## Example
///
/// ```
/// use card_czar::core::Entity;
/// use card_czar::objects::Player;
/// use card_czar::store::ObjectStore;
///
/// let mut store = ObjectStore::new();
/// let player = Player::new("Alex").unwrap();
/// let id = player.id();
///
/// store.add_object(player).unwrap();
/// assert!(store.get_object(id).is_some());
/// assert!(store.remove_object(id));
/// assert!(store.get_object(id).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ObjectStore {
    by_id: FxHashMap<EntityId, GameObject>,
    by_kind: FxHashMap<Kind, Vector<EntityId>>,
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore {
    /// Create an empty store recognizing every domain kind.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kinds(&Kind::ALL)
    }

    /// Create an empty store recognizing only the given kinds.
    ///
    /// Objects of other kinds are rejected with `UnknownKind` on insert.
    #[must_use]
    pub fn with_kinds(kinds: &[Kind]) -> Self {
        let by_kind = kinds.iter().map(|&kind| (kind, Vector::new())).collect();
        Self {
            by_id: FxHashMap::default(),
            by_kind,
        }
    }

    /// Register an object under both indices.
    ///
    /// Fails with `DuplicateIdentifier` if the id is already registered,
    /// and `UnknownKind` if the store was not created with the object's
    /// kind. On failure nothing is inserted.
    pub fn add_object(&mut self, obj: impl Into<GameObject>) -> Result<()> {
        let obj = obj.into();
        let id = obj.id();
        let kind = obj.kind();

        if self.by_id.contains_key(&id) {
            return Err(GameError::DuplicateIdentifier { id });
        }
        let Some(ids) = self.by_kind.get_mut(&kind) else {
            return Err(GameError::UnknownKind { id, kind });
        };

        ids.push_back(id);
        self.by_id.insert(id, obj);
        Ok(())
    }

    /// Register several objects in sequence.
    ///
    /// Not transactional: a failure partway leaves earlier insertions in
    /// place and reports the first error.
    pub fn add_objects<I>(&mut self, objs: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<GameObject>,
    {
        for obj in objs {
            self.add_object(obj)?;
        }
        Ok(())
    }

    /// Remove an object by id, reporting whether anything was removed.
    ///
    /// Removing an absent id is a no-op returning `false`, never an error.
    pub fn remove_object(&mut self, id: EntityId) -> bool {
        let Some(obj) = self.by_id.remove(&id) else {
            return false;
        };
        if let Some(ids) = self.by_kind.get_mut(&obj.kind()) {
            if let Some(pos) = ids.iter().position(|&existing| existing == id) {
                ids.remove(pos);
            }
        }
        true
    }

    /// Look up an object by id.
    #[must_use]
    pub fn get_object(&self, id: EntityId) -> Option<&GameObject> {
        self.by_id.get(&id)
    }

    /// Look up a player by id, `None` if absent or not a player.
    #[must_use]
    pub fn get_player(&self, id: EntityId) -> Option<&Player> {
        self.by_id.get(&id).and_then(GameObject::as_player)
    }

    /// Look up a card pack by id, `None` if absent or not a pack.
    #[must_use]
    pub fn get_card_pack(&self, id: EntityId) -> Option<&CardPack> {
        self.by_id.get(&id).and_then(GameObject::as_card_pack)
    }

    /// Iterate over all objects of a kind, in insertion order.
    ///
    /// `None` for a kind this store was not created with, as opposed to
    /// `Some` over an empty collection for a known kind with no members.
    pub fn objects_of_kind(&self, kind: Kind) -> Option<impl Iterator<Item = &GameObject>> {
        self.by_kind.get(&kind).map(|ids| {
            ids.iter()
                .filter_map(move |id| self.by_id.get(id))
        })
    }

    /// Snapshot the ordered ids of a kind. Cheap to clone further.
    ///
    /// Same `None` semantics as [`ObjectStore::objects_of_kind`].
    #[must_use]
    pub fn ids_of_kind(&self, kind: Kind) -> Option<Vector<EntityId>> {
        self.by_kind.get(&kind).cloned()
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of registered objects across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
