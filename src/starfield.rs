//! Flying-through-stars background simulation.
//!
//! A fixed population of stars recedes toward the viewer. Each frame the
//! surface is faded instead of cleared, every star moves closer by a constant
//! step, and the visible ones are projected to screen space and drawn. The
//! simulation knows nothing about the browser: drawing goes through the
//! [`Surface`] trait so the canvas binding lives with the component.

pub mod drift;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_POPULATION: usize = 800;
pub const DEFAULT_SPEED: f64 = 2.0;
pub const DEFAULT_TRAIL_ALPHA: f64 = 0.2;
pub const DEFAULT_ACCENT_CHANCE: f64 = 0.2;
pub const DEFAULT_MAX_RADIUS: f64 = 2.0;
pub const DEFAULT_STAR_SIZE: f64 = 0.5;

/// Far plane used when the viewport has collapsed to zero width.
const MIN_FAR_PLANE: f64 = 1.0;

const ACCENT_COLOR: &str = "#00ffff";
const NEUTRAL_COLOR: &str = "#ffffff";

/// Tuning values for the starfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub population: usize,
    /// Depth units removed from every star per frame.
    pub speed: f64,
    /// Opacity of the black fill painted over the previous frame.
    pub trail_alpha: f64,
    pub accent_chance: f64,
    pub max_radius: f64,
    pub star_size: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            speed: DEFAULT_SPEED,
            trail_alpha: DEFAULT_TRAIL_ALPHA,
            accent_chance: DEFAULT_ACCENT_CHANCE,
            max_radius: DEFAULT_MAX_RADIUS,
            star_size: DEFAULT_STAR_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw on, e.g. a hidden or collapsed frame.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Depth at which stars are (re)spawned; never zero.
    fn far_plane(&self) -> f64 {
        self.width.max(MIN_FAR_PLANE)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    Accent,
    Neutral,
}

impl StarColor {
    pub fn css(self) -> &'static str {
        match self {
            StarColor::Accent => ACCENT_COLOR,
            StarColor::Neutral => NEUTRAL_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub color: StarColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Perspective-divide a star onto the surface.
///
/// `z` must be non-zero; the simulation guarantees this for live stars.
pub fn project(star: &Star, viewport: Viewport, max_radius: f64) -> Projected {
    let Viewport { width, height } = viewport;
    Projected {
        x: (star.x / star.z) * width + width / 2.0,
        y: (star.y / star.z) * height + height / 2.0,
        radius: (1.0 - star.z / width) * max_radius,
    }
}

/// Something a starfield can paint on.
pub trait Surface {
    fn set_size(&mut self, width: u32, height: u32);
    /// Cover the whole surface with translucent black.
    fn fade(&mut self, alpha: f64, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no window available")]
    NoWindow,
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
}

pub struct Starfield {
    config: StarfieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    rng: fastrand::Rng,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, fastrand::Rng::new())
    }

    pub fn with_rng(config: StarfieldConfig, viewport: Viewport, rng: fastrand::Rng) -> Self {
        let mut field = Self {
            config,
            viewport,
            stars: Vec::new(),
            rng,
        };
        field.populate();
        field
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    /// Adopt a new viewport. The whole population is rebuilt.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.populate();
    }

    /// Advance every star one frame toward the viewer.
    pub fn step(&mut self) {
        let speed = self.config.speed;
        let far = self.viewport.far_plane();
        for i in 0..self.stars.len() {
            self.stars[i].z -= speed;
            if self.stars[i].z <= 0.0 {
                let (x, y) = self.spawn_position();
                let star = &mut self.stars[i];
                star.x = x;
                star.y = y;
                star.z = far;
            }
        }
    }

    /// Projected stars that land on the surface, with their colors.
    pub fn visible(&self) -> impl Iterator<Item = (Projected, StarColor)> + '_ {
        let stars: &[Star] = if self.viewport.is_empty() {
            &[]
        } else {
            &self.stars
        };
        stars.iter().filter_map(move |star| {
            let p = project(star, self.viewport, self.config.max_radius);
            self.viewport.contains(p.x, p.y).then_some((p, star.color))
        })
    }

    fn populate(&mut self) {
        self.stars.clear();
        self.stars.reserve(self.config.population);
        for _ in 0..self.config.population {
            let star = self.spawn();
            self.stars.push(star);
        }
    }

    fn spawn(&mut self) -> Star {
        let (x, y) = self.spawn_position();
        // (0, far]: never start on the depth floor
        let z = (1.0 - self.rng.f64()) * self.viewport.far_plane();
        let color = if self.rng.f64() < self.config.accent_chance {
            StarColor::Accent
        } else {
            StarColor::Neutral
        };
        Star {
            x,
            y,
            z,
            size: self.config.star_size,
            color,
        }
    }

    /// Uniform point in a square twice the viewport, centered on the origin.
    fn spawn_position(&mut self) -> (f64, f64) {
        let x = (self.rng.f64() - 0.5) * self.viewport.width * 2.0;
        let y = (self.rng.f64() - 0.5) * self.viewport.height * 2.0;
        (x, y)
    }
}

/// A starfield bound to the surface it paints.
pub struct Animation<S: Surface> {
    surface: S,
    field: Starfield,
    halted: bool,
}

impl<S: Surface> Animation<S> {
    pub fn new(mut surface: S, field: Starfield) -> Self {
        let Viewport { width, height } = field.viewport();
        surface.set_size(width as u32, height as u32);
        Self {
            surface,
            field,
            halted: false,
        }
    }

    pub fn field(&self) -> &Starfield {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Paint one frame. Returns `false` once halted.
    pub fn frame(&mut self) -> bool {
        if self.halted {
            return false;
        }
        let Viewport { width, height } = self.field.viewport();
        self.surface
            .fade(self.field.config().trail_alpha, width, height);
        self.field.step();
        for (p, color) in self.field.visible() {
            self.surface.fill_circle(p.x, p.y, p.radius, color.css());
        }
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.halted {
            return;
        }
        self.surface
            .set_size(viewport.width as u32, viewport.height as u32);
        self.field.resize(viewport);
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Size(u32, u32),
        Fade(f64),
        Circle(f64, f64, f64, String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn set_size(&mut self, width: u32, height: u32) {
            self.ops.push(Op::Size(width, height));
        }

        fn fade(&mut self, alpha: f64, _width: f64, _height: f64) {
            self.ops.push(Op::Fade(alpha));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
            self.ops.push(Op::Circle(x, y, radius, color.to_string()));
        }
    }

    fn seeded(config: StarfieldConfig, viewport: Viewport) -> Starfield {
        Starfield::with_rng(config, viewport, fastrand::Rng::with_seed(7))
    }

    fn assert_in_spawn_square(star: &Star, viewport: Viewport) {
        assert!(star.x >= -viewport.width && star.x < viewport.width);
        assert!(star.y >= -viewport.height && star.y < viewport.height);
    }

    #[test]
    fn test_initial_population() {
        let viewport = Viewport::new(1280.0, 720.0);
        let field = seeded(StarfieldConfig::default(), viewport);

        assert_eq!(field.stars().len(), DEFAULT_POPULATION);
        for star in field.stars() {
            assert!(star.z > 0.0 && star.z <= viewport.width);
            assert_in_spawn_square(star, viewport);
            assert_eq!(star.size, DEFAULT_STAR_SIZE);
        }
    }

    #[test]
    fn test_depth_stays_in_range_every_frame() {
        let viewport = Viewport::new(300.0, 200.0);
        let config = StarfieldConfig {
            population: 200,
            speed: 7.5,
            ..Default::default()
        };
        let mut field = seeded(config, viewport);

        // enough frames for every star to wrap at least once
        for _ in 0..100 {
            field.step();
            for star in field.stars() {
                assert!(star.z > 0.0, "depth hit the floor: {}", star.z);
                assert!(star.z <= viewport.width);
            }
        }
    }

    #[test]
    fn test_respawn_resets_to_far_plane() {
        let viewport = Viewport::new(400.0, 300.0);
        let config = StarfieldConfig {
            population: 50,
            ..Default::default()
        };
        let mut field = seeded(config, viewport);
        for star in field.stars.iter_mut() {
            star.z = 1.5;
        }

        field.step();

        for star in field.stars() {
            assert_eq!(star.z, viewport.width);
            assert_in_spawn_square(star, viewport);
        }
    }

    #[test]
    fn test_step_moves_by_speed() {
        let viewport = Viewport::new(400.0, 300.0);
        let config = StarfieldConfig {
            population: 1,
            ..Default::default()
        };
        let mut field = seeded(config, viewport);
        field.stars[0].z = 100.0;

        field.step();

        assert_eq!(field.stars()[0].z, 100.0 - DEFAULT_SPEED);
    }

    #[test]
    fn test_star_exactly_at_speed_respawns() {
        let viewport = Viewport::new(400.0, 300.0);
        let config = StarfieldConfig {
            population: 1,
            ..Default::default()
        };
        let mut field = seeded(config, viewport);
        field.stars[0].z = DEFAULT_SPEED;

        field.step();

        assert_eq!(field.stars()[0].z, viewport.width);
    }

    #[test]
    fn test_resize_repopulates() {
        let mut field = seeded(
            StarfieldConfig {
                population: 120,
                ..Default::default()
            },
            Viewport::new(1920.0, 1080.0),
        );
        let small = Viewport::new(320.0, 240.0);
        let before = field.stars().to_vec();
        assert!(before.iter().any(|s| s.z > small.width));

        field.resize(small);

        assert_eq!(field.viewport(), small);
        assert_eq!(field.stars().len(), 120);
        for star in field.stars() {
            assert!(star.z > 0.0 && star.z <= small.width);
            assert_in_spawn_square(star, small);
            assert!(!before.contains(star), "star survived resize: {star:?}");
        }
    }

    #[test]
    fn test_collapsed_viewport_keeps_depth_positive() {
        let viewport = Viewport::new(0.0, 600.0);
        let config = StarfieldConfig {
            population: 10,
            ..Default::default()
        };
        let mut field = seeded(config, viewport);

        for star in field.stars() {
            assert!(star.z > 0.0 && star.z <= MIN_FAR_PLANE);
        }
        for _ in 0..3 {
            field.step();
            for star in field.stars() {
                assert!(star.z > 0.0, "depth hit the floor: {}", star.z);
            }
        }
        assert!(viewport.is_empty());
        assert_eq!(field.visible().count(), 0);

        field.resize(Viewport::new(640.0, 480.0));
        assert!(field.stars().iter().all(|s| s.z > 0.0 && s.z <= 640.0));
    }

    #[test]
    fn test_collapsed_viewport_frame_draws_nothing() {
        let field = seeded(
            StarfieldConfig {
                population: 20,
                ..Default::default()
            },
            Viewport::new(0.0, 0.0),
        );
        let mut anim = Animation::new(Recorder::default(), field);

        assert!(anim.frame());

        assert!(anim
            .surface()
            .ops
            .iter()
            .all(|op| !matches!(op, Op::Circle(..))));
    }

    #[test]
    fn test_projection_formula() {
        let viewport = Viewport::new(800.0, 600.0);
        let star = Star {
            x: 100.0,
            y: -50.0,
            z: 200.0,
            size: DEFAULT_STAR_SIZE,
            color: StarColor::Neutral,
        };

        let p = project(&star, viewport, DEFAULT_MAX_RADIUS);

        assert_eq!(p.x, (100.0 / 200.0) * 800.0 + 400.0);
        assert_eq!(p.y, (-50.0 / 200.0) * 600.0 + 300.0);
        assert_eq!(p.radius, (1.0 - 200.0 / 800.0) * 2.0);
    }

    #[test]
    fn test_far_plane_star_has_zero_radius() {
        let viewport = Viewport::new(800.0, 600.0);
        let star = Star {
            x: 0.0,
            y: 0.0,
            z: 800.0,
            size: DEFAULT_STAR_SIZE,
            color: StarColor::Accent,
        };

        let p = project(&star, viewport, DEFAULT_MAX_RADIUS);

        assert_eq!((p.x, p.y, p.radius), (400.0, 300.0, 0.0));
    }

    #[test]
    fn test_offscreen_stars_not_visible() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut field = seeded(
            StarfieldConfig {
                population: 2,
                ..Default::default()
            },
            viewport,
        );
        field.stars[0] = Star {
            x: 10.0,
            y: 10.0,
            z: 400.0,
            size: DEFAULT_STAR_SIZE,
            color: StarColor::Neutral,
        };
        // projects to x = 2000 * 800 + 400
        field.stars[1] = Star {
            x: 1000.0,
            y: 0.0,
            z: 0.5,
            size: DEFAULT_STAR_SIZE,
            color: StarColor::Accent,
        };

        let visible = field.visible().collect::<Vec<_>>();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1, StarColor::Neutral);
    }

    #[test]
    fn test_accent_ratio() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let field = seeded(
            StarfieldConfig {
                population: 5000,
                ..Default::default()
            },
            viewport,
        );
        let accents = field
            .stars()
            .iter()
            .filter(|s| s.color == StarColor::Accent)
            .count();
        let ratio = accents as f64 / 5000.0;
        assert!((0.15..0.25).contains(&ratio), "accent ratio {ratio}");
    }

    #[test]
    fn test_frame_fades_then_draws() {
        let viewport = Viewport::new(640.0, 480.0);
        let field = seeded(StarfieldConfig::default(), viewport);
        let mut anim = Animation::new(Recorder::default(), field);

        assert!(anim.frame());

        let ops = &anim.surface().ops;
        assert_eq!(ops[0], Op::Size(640, 480));
        assert_eq!(ops[1], Op::Fade(DEFAULT_TRAIL_ALPHA));
        let circles = ops[2..]
            .iter()
            .filter(|op| matches!(op, Op::Circle(..)))
            .count();
        assert_eq!(circles, anim.field().visible().count());
        assert!(circles > 0);
    }

    #[test]
    fn test_halt_stops_surface_writes() {
        let field = seeded(StarfieldConfig::default(), Viewport::new(640.0, 480.0));
        let mut anim = Animation::new(Recorder::default(), field);
        anim.frame();
        let written = anim.surface().ops.len();

        anim.halt();

        assert!(!anim.frame());
        anim.resize(Viewport::new(100.0, 100.0));
        assert!(anim.is_halted());
        assert_eq!(anim.surface().ops.len(), written);
    }

    #[test]
    fn test_animation_resize_sets_surface_size() {
        let field = seeded(StarfieldConfig::default(), Viewport::new(640.0, 480.0));
        let mut anim = Animation::new(Recorder::default(), field);

        anim.resize(Viewport::new(1024.0, 768.0));

        assert_eq!(anim.surface().ops.last(), Some(&Op::Size(1024, 768)));
        assert_eq!(anim.field().viewport(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: StarfieldConfig =
            serde_json::from_str(r#"{"population": 100, "trail_alpha": 0.5}"#)
                .expect("config should parse");

        assert_eq!(config.population, 100);
        assert_eq!(config.trail_alpha, 0.5);
        assert_eq!(config.speed, DEFAULT_SPEED);
    }
}
