//! The simulated galaxy: a two-armed spiral of orbiting particles, a dense
//! core and a field of twinkling background stars.

use crate::body::{Particle, Star};
use crate::frame::Frame;
use crate::vec2::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub const ARM_COUNT: usize = 2;
pub const PARTICLES_PER_ARM: usize = 150;
pub const CORE_PARTICLES: usize = 60;
pub const BACKGROUND_STARS: usize = 80;

/// Terminal cells are roughly twice as tall as wide.
pub const ASPECT_RATIO: f32 = 2.0;

pub struct Galaxy {
    particles: Vec<Particle>,
    stars: Vec<Star>,
    center: Vec2,
    width: usize,
    height: usize,
    aspect: f32,
    sim_time: f32,
}

impl Galaxy {
    /// Seeds arms, core and star field from `rng` for a `width` x `height` grid.
    pub fn new<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut particles = spiral_arms(rng);
        particles.extend(core_cluster(rng));
        let stars = background_stars(rng, width, height);
        log::debug!(
            "galaxy {}x{}: {} particles, {} stars",
            width,
            height,
            particles.len(),
            stars.len()
        );
        Self::with_bodies(width, height, particles, stars)
    }

    /// A galaxy holding exactly the given bodies.
    pub fn with_bodies(
        width: usize,
        height: usize,
        particles: Vec<Particle>,
        stars: Vec<Star>,
    ) -> Self {
        Self {
            particles,
            stars,
            center: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            width,
            height,
            aspect: ASPECT_RATIO,
            sim_time: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
    pub fn center(&self) -> Vec2 {
        self.center
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn aspect(&self) -> f32 {
        self.aspect
    }
    /// Total simulated time, the sum of every `dt` passed to `update`.
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    /// Advances every body independently by one fixed step.
    pub fn update(&mut self, dt: f32) {
        self.sim_time += dt;
        for p in self.particles.iter_mut() {
            p.update(dt);
        }
        for s in self.stars.iter_mut() {
            s.update(dt);
        }
    }

    pub fn render(&self) -> Frame {
        let mut frame = Frame::new(self.width, self.height);
        self.render_into(&mut frame);
        frame
    }

    /// Rasterizes into a caller-owned frame, reusing its buffers.
    pub fn render_into(&self, frame: &mut Frame) {
        frame.reset(self.width, self.height);
        frame.draw_stars(&self.stars);
        frame.accumulate(&self.particles, self.center, self.aspect);
        frame.apply_intensity();
        frame.stamp_core(self.center);
    }
}

fn spiral_arms<R: Rng>(rng: &mut R) -> Vec<Particle> {
    let mut out = Vec::with_capacity(ARM_COUNT * PARTICLES_PER_ARM);
    for arm in 0..ARM_COUNT {
        let arm_offset = arm as f32 * PI;
        for i in 0..PARTICLES_PER_ARM {
            let t = i as f32 / PARTICLES_PER_ARM as f32;
            let base_radius = 2.0 + t * 14.0;
            let spiral_angle = arm_offset + t * 2.5 * PI;

            // outer particles scatter more
            let radius = base_radius + rng.gen_range(-1.0f32..1.0) * (0.5 + t * 1.5);
            let angle = spiral_angle + rng.gen_range(-0.2f32..0.2);

            let angular_velocity = 0.15 / radius.sqrt();
            let brightness = 0.3 + 0.7 * (1.0 - t * 0.6);

            out.push(Particle::new(radius, angle, angular_velocity, brightness));
        }
    }
    out
}

fn core_cluster<R: Rng>(rng: &mut R) -> Vec<Particle> {
    (0..CORE_PARTICLES)
        .map(|_| {
            let radius = rng.gen_range(0.5f32..3.0);
            let angle = rng.gen_range(0.0..TAU);
            let angular_velocity = 0.3 / (radius + 0.5).sqrt();
            let brightness = 0.8 + rng.gen_range(0.0f32..0.2);
            Particle::new(radius, angle, angular_velocity, brightness)
        })
        .collect()
}

fn background_stars<R: Rng>(rng: &mut R, width: usize, height: usize) -> Vec<Star> {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    (0..BACKGROUND_STARS)
        .map(|_| {
            let pos = Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
            let phase = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(0.5..2.0);
            let base = rng.gen_range(0.3..1.0);
            Star::new(pos, phase, speed, base)
        })
        .collect()
}
