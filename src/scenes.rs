//! Built-in scenes.

use glam::Vec3A;

use crate::material::{Color, Material};
use crate::scene::World;
use crate::sphere::Sphere;

/// Radius of the sphere standing in for the ground plane.
const GROUND_RADIUS: f32 = 100.0;

fn add_ground(world: &mut World) {
    let ground = world.add_material(Material::lambertian(Color::splat(0.75)));
    world.add(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), GROUND_RADIUS, ground));
}

/// Gray ground only. Used as the regression scene.
pub fn ground_world() -> World {
    let mut world = World::new();
    add_ground(&mut world);
    world
}

/// Ground plus four half-unit diffuse spheres: a pale blue, a green and a red
/// one in a row behind the origin, and a white one at the origin.
pub fn demo_world() -> World {
    let mut world = World::new();
    add_ground(&mut world);

    let pale_blue = world.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.9)));
    let green = world.add_material(Material::lambertian(Color::new(0.0, 1.0, 0.0)));
    let red = world.add_material(Material::lambertian(Color::new(1.0, 0.0, 0.0)));
    let white = world.add_material(Material::lambertian(Color::new(1.0, 1.0, 1.0)));

    world.add(Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, pale_blue));
    world.add(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, green));
    world.add(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, red));
    world.add(Sphere::new(Vec3A::new(0.0, 0.0, 0.0), 0.5, white));

    world
}
