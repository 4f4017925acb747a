//! Typed entity arena

use super::{Behavior, Entity, FrameContext};
use slotmap::SlotMap;

/// Arena owning every live entity of one type.
///
/// Spawning returns a generational [`Entity`] handle; despawning hands the
/// entity back to the caller so it can run its teardown logic.
pub struct EntityPool<T> {
    entities: SlotMap<Entity, T>,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityPool<T> {
    /// Create an empty pool
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Take ownership of an entity and return its handle
    pub fn spawn(&mut self, entity: T) -> Entity {
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it if the handle was still live
    pub fn despawn(&mut self, handle: Entity) -> Option<T> {
        self.entities.remove(handle)
    }

    /// Borrow an entity
    pub fn get(&self, handle: Entity) -> Option<&T> {
        self.entities.get(handle)
    }

    /// Mutably borrow an entity
    pub fn get_mut(&mut self, handle: Entity) -> Option<&mut T> {
        self.entities.get_mut(handle)
    }

    /// Whether the handle refers to a live entity
    pub fn contains(&self, handle: Entity) -> bool {
        self.entities.contains_key(handle)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over live entities
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter()
    }

    /// Iterate mutably over live entities
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter_mut()
    }

    /// Remove every entity, yielding them for teardown
    pub fn drain(&mut self) -> impl Iterator<Item = (Entity, T)> + '_ {
        self.entities.drain()
    }
}

impl<T: Behavior> EntityPool<T> {
    /// Run every entity's behaviour once and collect the commands it emitted,
    /// tagged with the emitting entity.
    pub fn update_all(&mut self, ctx: &FrameContext<'_>) -> Vec<(Entity, T::Command)> {
        let mut emitted = Vec::new();
        let mut commands = Vec::new();

        for (handle, entity) in &mut self.entities {
            entity.update(ctx, &mut commands);
            emitted.extend(commands.drain(..).map(|command| (handle, command)));
        }

        emitted
    }
}
