//! Particle field simulation state.
//!
//! Owns the two sparkle populations and advances them one frame at a time.
//! Created when the engine starts, then mutated by the frame loop (`update`)
//! and by the event handlers (`pointer_moved`, `spawn_burst`, `resize`) in
//! between frames. Nothing in here touches the drawing surface; rendering
//! observes this state read-only once per frame, after `update`.

use super::config::FieldOptions;
use super::particle::Particle;
use super::rng::FieldRng;

/// Twinkle phase advance per frame for ambient sparkles.
const AMBIENT_TWINKLE_STEP: f64 = 0.02;
/// Twinkle phase advance per frame for transients; they flicker faster.
const TRANSIENT_TWINKLE_STEP: f64 = 0.05;
/// Ambient sparkles move at half their stored velocity.
const AMBIENT_DRIFT: f64 = 0.5;
/// Life units removed from every transient each frame.
const LIFE_STEP: f64 = 1.0;
/// Per-frame multiplicative velocity damping for transients.
const VELOCITY_DAMPING: f64 = 0.96;

/// The live sparkle populations plus the shared state the event handlers
/// mutate: surface bounds and the last observed pointer position.
pub struct SparkleField {
	ambient: Vec<Particle>,
	transient: Vec<Particle>,
	width: f64,
	height: f64,
	pointer: Option<(f64, f64)>,
	rng: FieldRng,
	drift_spawn_chance: f64,
	drift_jitter: f64,
	burst_count: usize,
	burst_jitter: f64,
}

impl SparkleField {
	/// Seed a field with the configured ambient population at uniformly
	/// random positions. The population size is fixed for the lifetime of
	/// the field.
	pub fn new(options: &FieldOptions, width: f64, height: f64, seed: u32) -> Self {
		let mut rng = FieldRng::new(seed);
		let ambient = (0..options.ambient_count)
			.map(|_| Particle::ambient(&mut rng, width, height))
			.collect();

		Self {
			ambient,
			transient: Vec::new(),
			width,
			height,
			pointer: None,
			rng,
			drift_spawn_chance: options.drift_spawn_chance,
			drift_jitter: options.drift_jitter,
			burst_count: options.burst_count,
			burst_jitter: options.burst_jitter,
		}
	}

	/// Advance the simulation by one frame.
	///
	/// Ambient sparkles drift at half speed and wrap each coordinate
	/// independently back into `[0, dimension)`; the wrap also recaptures
	/// anything stranded outside the bounds by a resize. Transients are
	/// advanced and evicted in a single pass the moment their life runs out.
	pub fn update(&mut self) {
		for p in &mut self.ambient {
			p.phase += AMBIENT_TWINKLE_STEP;
			p.x = (p.x + p.vx * AMBIENT_DRIFT).rem_euclid(self.width);
			p.y = (p.y + p.vy * AMBIENT_DRIFT).rem_euclid(self.height);
		}

		self.transient.retain_mut(|p| {
			p.phase += TRANSIENT_TWINKLE_STEP;
			p.x += p.vx;
			p.y += p.vy;
			p.vx *= VELOCITY_DAMPING;
			p.vy *= VELOCITY_DAMPING;
			p.tick_life(LIFE_STEP)
		});
	}

	/// Record the pointer position and, with the configured probability,
	/// spawn one drift sparkle jittered around it.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
		if self.rng.chance(self.drift_spawn_chance) {
			self.transient
				.push(Particle::drift(&mut self.rng, x, y, self.drift_jitter));
		}
	}

	/// Spawn a full burst of intense sparkles around the click point.
	pub fn spawn_burst(&mut self, x: f64, y: f64) {
		for _ in 0..self.burst_count {
			self.transient
				.push(Particle::burst(&mut self.rng, x, y, self.burst_jitter));
		}
	}

	/// Adopt new surface bounds. Particle positions are left untouched;
	/// ambient sparkles re-enter via the wrap on their next update.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// The immortal background population.
	pub fn ambient(&self) -> &[Particle] {
		&self.ambient
	}

	/// The decaying pointer-spawned population.
	pub fn transient(&self) -> &[Particle] {
		&self.transient
	}

	/// Current surface width in px.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height in px.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Last pointer position seen, if any.
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}
}

#[cfg(test)]
mod tests {
	use super::super::particle::ParticleKind;
	use super::*;

	fn field(seed: u32) -> SparkleField {
		SparkleField::new(&FieldOptions::default(), 800.0, 600.0, seed)
	}

	#[test]
	fn ambient_population_is_fixed_and_wrapped() {
		let mut f = field(11);
		assert_eq!(f.ambient().len(), 40);
		for _ in 0..500 {
			f.update();
			for p in f.ambient() {
				assert!((0.0..f.width()).contains(&p.x));
				assert!((0.0..f.height()).contains(&p.y));
			}
		}
		assert_eq!(f.ambient().len(), 40);
	}

	#[test]
	fn wrap_recaptures_particles_after_shrink_resize() {
		let mut f = field(12);
		f.resize(200.0, 150.0);
		f.update();
		for p in f.ambient() {
			assert!((0.0..200.0).contains(&p.x));
			assert!((0.0..150.0).contains(&p.y));
		}
	}

	#[test]
	fn transient_life_follows_exact_decay_law() {
		let mut f = field(13);
		f.spawn_burst(400.0, 300.0);
		let max_life = match f.transient()[0].kind {
			ParticleKind::Burst { max_life, .. } => max_life,
			_ => unreachable!(),
		};

		let steps = 10;
		for _ in 0..steps {
			f.update();
		}
		match f.transient()[0].kind {
			ParticleKind::Burst { life, .. } => {
				assert!((life - (max_life - f64::from(steps))).abs() < 1e-9);
			}
			_ => unreachable!(),
		}

		// Everything is gone once its life would reach zero; with max_life
		// under 100 frames, 100 more updates drain the whole burst.
		for _ in 0..100 {
			f.update();
		}
		assert!(f.transient().is_empty());
	}

	#[test]
	fn expired_particles_are_removed_in_the_same_pass() {
		let mut f = field(14);
		f.spawn_burst(100.0, 100.0);
		let longest = f
			.transient()
			.iter()
			.map(|p| match p.kind {
				ParticleKind::Burst { max_life, .. } => max_life,
				_ => unreachable!(),
			})
			.fold(0.0_f64, f64::max);

		for _ in 0..longest.ceil() as u32 {
			f.update();
		}
		assert!(f.transient().is_empty());
	}

	#[test]
	fn burst_spawns_exact_count_within_jitter_radius() {
		let mut f = field(15);
		let (cx, cy) = (250.0, 320.0);
		f.spawn_burst(cx, cy);

		assert_eq!(f.transient().len(), 12);
		for p in f.transient() {
			let dist = ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
			assert!(dist <= 42.0 + 1e-9);
			assert!(p.rays() >= 4);
			assert!(matches!(p.kind, ParticleKind::Burst { .. }));
		}
	}

	#[test]
	fn drift_spawn_rate_matches_configured_chance() {
		let mut f = field(16);
		let events = 100_000;
		for i in 0..events {
			f.pointer_moved(f64::from(i % 700), f64::from(i % 500));
		}
		let observed = f.transient().len() as f64 / f64::from(events);
		assert!(
			(observed - 0.3).abs() < 0.02,
			"observed spawn rate {observed}"
		);
	}

	#[test]
	fn drift_spawns_near_the_pointer_without_rays() {
		let mut f = field(17);
		let (px, py) = (500.0, 100.0);
		while f.transient().is_empty() {
			f.pointer_moved(px, py);
		}
		let p = &f.transient()[0];
		let dist = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
		assert!(dist <= 18.0 + 1e-9);
		assert_eq!(p.rays(), 0);
	}

	#[test]
	fn resize_updates_bounds_and_nothing_else() {
		let mut f = field(18);
		f.spawn_burst(10.0, 10.0);
		let ambient_before: Vec<(f64, f64)> = f.ambient().iter().map(|p| (p.x, p.y)).collect();
		let transient_before = f.transient().len();

		f.resize(1024.0, 768.0);

		assert_eq!(f.width(), 1024.0);
		assert_eq!(f.height(), 768.0);
		assert_eq!(f.transient().len(), transient_before);
		let ambient_after: Vec<(f64, f64)> = f.ambient().iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(ambient_before, ambient_after);
	}

	#[test]
	fn pointer_position_is_recorded() {
		let mut f = field(19);
		assert_eq!(f.pointer(), None);
		f.pointer_moved(33.0, 44.0);
		assert_eq!(f.pointer(), Some((33.0, 44.0)));
	}
}
