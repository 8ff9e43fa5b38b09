// SPDX-License-Identifier: MPL-2.0
//! Confetti burst widget using Canvas for the post-submit celebration.
//!
//! The burst is a one-shot particle system: `ignite` seeds the particles
//! at an origin point, `step` integrates velocity and gravity once per
//! animation frame, and the canvas layer draws whatever is still alive.
//! Units are pixels per frame at the nominal 60 FPS tick rate.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::sync::atomic::{AtomicU64, Ordering};

/// Fraction of life lost per frame. 180 frames ~ 3 seconds at 60 FPS,
/// the same horizon as the celebration countdown.
const LIFE_DECAY: f32 = 1.0 / 180.0;

/// Horizontal drag applied each frame.
const AIR_RESISTANCE: f32 = 0.99;

/// Colors cycled across spawned particles.
const COLORS: [Color; 6] = [
    palette::INFO_500,
    palette::SUCCESS_500,
    palette::WARNING_500,
    palette::ERROR_500,
    palette::STAR_400,
    palette::BRAND_400,
];

static RAND_STATE: AtomicU64 = AtomicU64::new(0x243F_6A88_85A3_08D3);

/// Cheap deterministic LCG in `[0, 1)`, shared by all bursts.
fn rand_unit() -> f32 {
    let old = RAND_STATE
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
            Some(s.wrapping_mul(6364136223846793005).wrapping_add(1))
        })
        .unwrap();
    let new = old.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((new >> 33) as f64 / f64::from(1u32 << 31)) as f32
}

/// Physics parameters for one burst, taken from the `[burst]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSettings {
    /// Number of particles spawned per activation.
    pub particle_count: usize,
    /// Downward acceleration in px/frame².
    pub gravity: f32,
    /// Initial upward speed in px/frame.
    pub initial_velocity: f32,
}

#[derive(Debug, Clone)]
struct Particle {
    position: Point,
    velocity: Vector,
    rotation: f32,
    spin: f32,
    size: f32,
    color: Color,
    life: f32,
}

/// One-shot confetti particle system.
pub struct ConfettiBurst {
    cache: Cache,
    particles: Vec<Particle>,
    settings: BurstSettings,
    ignited: bool,
}

impl std::fmt::Debug for ConfettiBurst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfettiBurst")
            .field("settings", &self.settings)
            .field("ignited", &self.ignited)
            .field("particles", &self.particles.len())
            .finish()
    }
}

impl ConfettiBurst {
    /// Creates an unarmed burst; nothing is drawn until `ignite` runs.
    #[must_use]
    pub fn new(settings: BurstSettings) -> Self {
        Self {
            cache: Cache::default(),
            particles: Vec::new(),
            settings,
            ignited: false,
        }
    }

    /// Seeds the particle field around `origin`.
    ///
    /// A burst plays once per activation: repeated calls after the first
    /// are ignored so a late or duplicate origin resolution cannot
    /// double-spawn.
    pub fn ignite(&mut self, origin: Point) {
        if self.ignited {
            return;
        }
        self.ignited = true;

        self.particles = (0..self.settings.particle_count)
            .map(|_| {
                let upward = (0.25 + 0.75 * rand_unit()) * self.settings.initial_velocity;
                let sideways = (rand_unit() * 2.0 - 1.0) * self.settings.initial_velocity * 0.33;
                let color = COLORS[(rand_unit() * COLORS.len() as f32) as usize % COLORS.len()];
                Particle {
                    position: origin,
                    velocity: Vector::new(sideways, -upward),
                    rotation: rand_unit() * std::f32::consts::TAU,
                    spin: (rand_unit() - 0.5) * 0.4,
                    size: 6.0 + rand_unit() * 6.0,
                    color,
                    life: 1.0,
                }
            })
            .collect();
        self.cache.clear();
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        if self.particles.is_empty() {
            return;
        }

        let gravity = self.settings.gravity;
        for p in &mut self.particles {
            p.velocity.y += gravity;
            p.velocity.x *= AIR_RESISTANCE;
            p.position = p.position + p.velocity;
            p.rotation += p.spin;
            p.life -= LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
        self.cache.clear();
    }

    /// Returns true while any particle is still alive.
    #[must_use]
    pub fn has_particles(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Returns true once `ignite` has run.
    #[must_use]
    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    /// Number of live particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Builds the full-window canvas layer drawing this burst.
    ///
    /// The layer never handles events, so clicks pass through to the
    /// widgets underneath it.
    pub fn layer<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(ConfettiLayer { burst: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Canvas program borrowing a burst for drawing.
struct ConfettiLayer<'a> {
    burst: &'a ConfettiBurst,
}

impl<Message> canvas::Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .burst
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let viewport = Rectangle::with_size(bounds.size());
                for p in &self.burst.particles {
                    if !viewport.contains(p.position) {
                        continue;
                    }

                    frame.with_save(|frame| {
                        frame.translate(Vector::new(p.position.x, p.position.y));
                        frame.rotate(p.rotation);

                        // Rectangular flake centered on the particle position,
                        // fading out as life runs down.
                        let flake = Path::rectangle(
                            Point::new(-p.size / 2.0, -p.size / 4.0),
                            Size::new(p.size, p.size / 2.0),
                        );
                        frame.fill(&flake, Color { a: p.life, ..p.color });
                    });
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> BurstSettings {
        BurstSettings {
            particle_count: 200,
            gravity: 0.3,
            initial_velocity: 20.0,
        }
    }

    #[test]
    fn rand_unit_stays_in_range() {
        for _ in 0..1000 {
            let value = rand_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn new_burst_is_unarmed() {
        let burst = ConfettiBurst::new(settings());
        assert!(!burst.is_ignited());
        assert!(!burst.has_particles());
    }

    #[test]
    fn ignite_spawns_configured_particle_count() {
        let mut burst = ConfettiBurst::new(settings());
        burst.ignite(Point::new(100.0, 100.0));
        assert_eq!(burst.particle_count(), 200);
    }

    #[test]
    fn ignite_is_one_shot() {
        let mut burst = ConfettiBurst::new(settings());
        burst.ignite(Point::ORIGIN);
        for _ in 0..10 {
            burst.step();
        }
        let count_after_steps = burst.particle_count();

        burst.ignite(Point::new(50.0, 50.0));
        assert_eq!(burst.particle_count(), count_after_steps);
    }

    #[test]
    fn particles_launch_upward() {
        let mut burst = ConfettiBurst::new(settings());
        burst.ignite(Point::new(0.0, 500.0));
        assert!(burst.particles.iter().all(|p| p.velocity.y < 0.0));
    }

    #[test]
    fn gravity_pulls_velocity_down_each_step() {
        use crate::test_utils::{assert_relative_eq, F32_EPSILON};

        let mut burst = ConfettiBurst::new(settings());
        burst.ignite(Point::ORIGIN);
        let before = burst.particles[0].velocity.y;
        burst.step();
        assert_relative_eq!(
            burst.particles[0].velocity.y,
            before + settings().gravity,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn burst_exhausts_within_its_lifetime() {
        let mut burst = ConfettiBurst::new(settings());
        burst.ignite(Point::ORIGIN);
        for _ in 0..200 {
            burst.step();
        }
        assert!(!burst.has_particles());
    }

    #[test]
    fn step_on_spent_burst_is_a_no_op() {
        let mut burst = ConfettiBurst::new(settings());
        burst.step();
        assert!(!burst.has_particles());
    }

    #[test]
    fn zero_particle_config_spawns_nothing() {
        let mut burst = ConfettiBurst::new(BurstSettings {
            particle_count: 0,
            ..settings()
        });
        burst.ignite(Point::ORIGIN);
        assert!(!burst.has_particles());
        assert!(burst.is_ignited());
    }
}
