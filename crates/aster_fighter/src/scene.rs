//! Live entities and the per-frame simulation step

use crate::config::ProjectileConfig;
use crate::entities::{
    Asteroid, AsteroidDestroyed, Projectile, ProjectileCommand, Ship, ShipCommand,
};
use aster_engine::ecs::{Behavior, Entity, EntityPool, FrameContext};
use aster_engine::events::EventQueue;
use aster_engine::physics::{self, PhysicsBody};

/// Owner of every live entity.
///
/// There is at most one ship. Asteroids and projectiles live in arenas; an
/// entity leaves the game exactly when it is removed from its arena.
#[derive(Default)]
pub struct Scene {
    ship: Option<Ship>,
    asteroids: EntityPool<Asteroid>,
    projectiles: EntityPool<Projectile>,
}

impl Scene {
    /// An empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// The ship, if one is alive
    pub const fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    /// Mutable access to the live ship
    pub fn ship_mut(&mut self) -> Option<&mut Ship> {
        self.ship.as_mut()
    }

    /// Put a ship into play, replacing any existing one
    pub fn spawn_ship(&mut self, ship: Ship) {
        self.ship = Some(ship);
    }

    /// Remove the ship from play
    pub fn take_ship(&mut self) -> Option<Ship> {
        self.ship.take()
    }

    /// Live asteroids
    pub const fn asteroids(&self) -> &EntityPool<Asteroid> {
        &self.asteroids
    }

    /// Live projectiles
    pub const fn projectiles(&self) -> &EntityPool<Projectile> {
        &self.projectiles
    }

    /// Add an asteroid
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> Entity {
        self.asteroids.spawn(asteroid)
    }

    /// Add a projectile
    pub fn spawn_projectile(&mut self, projectile: Projectile) -> Entity {
        self.projectiles.spawn(projectile)
    }

    /// Remove every asteroid without reporting any destruction.
    ///
    /// Returns how many were removed.
    pub fn clear_asteroids(&mut self) -> usize {
        self.asteroids.drain().count()
    }

    /// Advance every entity by one frame: behaviours, then physics, then
    /// trigger overlaps. Asteroids destroyed by projectiles are reported to
    /// `destroyed`.
    pub fn step(
        &mut self,
        ctx: &FrameContext<'_>,
        projectile_tuning: &ProjectileConfig,
        destroyed: &mut EventQueue<AsteroidDestroyed>,
    ) {
        self.run_behaviors(ctx, projectile_tuning);

        if let Some(ship) = &mut self.ship {
            ship.body_mut().integrate(ctx.delta_time);
        }
        physics::integrate_pool(&mut self.asteroids, ctx.delta_time);
        physics::integrate_pool(&mut self.projectiles, ctx.delta_time);

        self.resolve_projectile_hits(destroyed);

        if let Some(ship) = &mut self.ship {
            if !physics::overlapping(&*ship, &self.asteroids).is_empty() {
                ship.on_asteroid_contact();
            }
        }
    }

    fn run_behaviors(&mut self, ctx: &FrameContext<'_>, projectile_tuning: &ProjectileConfig) {
        if let Some(ship) = &mut self.ship {
            let mut commands = Vec::new();
            ship.update(ctx, &mut commands);
            for command in commands {
                match command {
                    ShipCommand::Fire { position, rotation } => {
                        self.projectiles
                            .spawn(Projectile::fire(position, rotation, projectile_tuning));
                    }
                }
            }
        }

        for (handle, command) in self.projectiles.update_all(ctx) {
            match command {
                ProjectileCommand::OutOfBounds => {
                    self.projectiles.despawn(handle);
                }
            }
        }

        for (_, never) in self.asteroids.update_all(ctx) {
            match never {}
        }
    }

    /// Each projectile takes out at most one asteroid, and a removed asteroid
    /// cannot be hit again
    fn resolve_projectile_hits(&mut self, destroyed: &mut EventQueue<AsteroidDestroyed>) {
        let projectiles: Vec<Entity> = self.projectiles.iter().map(|(handle, _)| handle).collect();

        for handle in projectiles {
            let Some(projectile) = self.projectiles.get(handle) else {
                continue;
            };
            let Some(&target) = physics::overlapping(projectile, &self.asteroids).first() else {
                continue;
            };

            self.projectiles.despawn(handle);
            if let Some(mut asteroid) = self.asteroids.despawn(target) {
                asteroid.mark_destroyed_by_projectile();
                if let Some(notice) = asteroid.destroy() {
                    log::debug!(
                        "{:?} asteroid shot at ({:.2}, {:.2})",
                        notice.size,
                        notice.position.x,
                        notice.position.y
                    );
                    destroyed.send(notice);
                }
            }
        }
    }
}
