//! The two kinds of moving things in the scene: orbiting particles and
//! twinkling background stars.

use crate::vec2::Vec2;
use std::f32::consts::TAU;

/// Brings an angle that drifted by at most one turn back into `[0, TAU)`.
pub fn wrap_angle(mut a: f32) -> f32 {
    if a >= TAU {
        a -= TAU;
    }
    if a < 0.0 {
        a += TAU;
    }
    // a tiny negative plus TAU can round up to exactly TAU in f32
    if a >= TAU {
        a = 0.0;
    }
    a
}

/// A point on a fixed circular orbit around the galaxy center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    radius: f32,
    angle: f32,
    angular_velocity: f32,
    brightness: f32,
}

impl Particle {
    pub fn new(radius: f32, angle: f32, angular_velocity: f32, brightness: f32) -> Self {
        Self {
            radius,
            angle: wrap_angle(angle.rem_euclid(TAU)),
            angular_velocity,
            brightness,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn angle(&self) -> f32 {
        self.angle
    }
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn update(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.angular_velocity * dt);
    }

    /// Screen-space position. `aspect` stretches x so orbits stay round on
    /// cells that are taller than they are wide.
    pub fn project(&self, center: Vec2, aspect: f32) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        Vec2 {
            x: center.x + self.radius * c * aspect,
            y: center.y + self.radius * s,
        }
    }
}

/// A fixed background point whose brightness oscillates with its phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pos: Vec2,
    phase: f32,
    speed: f32,
    base_brightness: f32,
}

impl Star {
    pub fn new(pos: Vec2, phase: f32, speed: f32, base_brightness: f32) -> Self {
        Self {
            pos,
            phase: wrap_angle(phase.rem_euclid(TAU)),
            speed,
            base_brightness,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
    pub fn phase(&self) -> f32 {
        self.phase
    }
    pub fn speed(&self) -> f32 {
        self.speed
    }
    pub fn base_brightness(&self) -> f32 {
        self.base_brightness
    }

    pub fn update(&mut self, dt: f32) {
        self.phase = wrap_angle(self.phase + self.speed * dt);
    }

    /// Twinkle between 30% and 100% of the base brightness.
    pub fn brightness(&self) -> f32 {
        let wave = 0.5 + 0.5 * self.phase.sin();
        self.base_brightness * (0.3 + 0.7 * wave)
    }
}
