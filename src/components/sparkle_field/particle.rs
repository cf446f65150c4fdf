//! Sparkle particle entity and its creation rules.

use std::f64::consts::TAU;

use super::rng::FieldRng;

/// What a particle is, and the lifecycle data that goes with it.
///
/// Ambient particles are immortal and carry no lifetime at all. Transients
/// come in two classes fixed at creation: pointer-move drifts (plain) and
/// click bursts (larger, brighter, ray-bearing).
#[derive(Clone, Debug, PartialEq)]
pub enum ParticleKind {
	/// Background sparkle; wraps at the viewport edges, never removed.
	Ambient,
	/// Spawned near the pointer on move; decays and disappears.
	Drift {
		/// Remaining lifespan in frames.
		life: f64,
		/// Initial lifespan, kept for the fade-out ratio.
		max_life: f64,
	},
	/// Spawned by a click burst; decays like a drift but draws ray spokes.
	Burst {
		/// Remaining lifespan in frames.
		life: f64,
		/// Initial lifespan, kept for the fade-out ratio.
		max_life: f64,
		/// Number of radiating spokes, always at least 4.
		rays: u32,
	},
}

/// A single sparkle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Base radius of the fill disc; the glow halo extends to 4x this.
	pub size: f64,
	/// Base alpha, modulated per frame by the twinkle function.
	pub opacity: f64,
	/// Monotonically increasing angle driving the brightness oscillation.
	pub phase: f64,
	pub kind: ParticleKind,
}

impl Particle {
	/// Ambient sparkle at a uniformly random position with a slow random
	/// drift velocity.
	pub fn ambient(rng: &mut FieldRng, width: f64, height: f64) -> Self {
		let angle = rng.range(0.0, TAU);
		let speed = rng.range(0.1, 0.45);
		Self {
			x: rng.range(0.0, width),
			y: rng.range(0.0, height),
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			size: rng.range(0.6, 1.8),
			opacity: rng.range(0.25, 0.7),
			phase: rng.range(0.0, TAU),
			kind: ParticleKind::Ambient,
		}
	}

	/// Plain transient near `(x, y)`, jittered within `jitter` of it.
	pub fn drift(rng: &mut FieldRng, x: f64, y: f64, jitter: f64) -> Self {
		let (px, py) = jittered(rng, x, y, jitter);
		let angle = rng.range(0.0, TAU);
		let speed = rng.range(0.3, 1.2);
		let max_life = rng.range(45.0, 80.0);
		Self {
			x: px,
			y: py,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			size: rng.range(0.5, 1.6),
			opacity: rng.range(0.4, 0.85),
			phase: rng.range(0.0, TAU),
			kind: ParticleKind::Drift {
				life: max_life,
				max_life,
			},
		}
	}

	/// Intense transient near `(x, y)`: larger, brighter, with 4..=7 rays.
	pub fn burst(rng: &mut FieldRng, x: f64, y: f64, jitter: f64) -> Self {
		let (px, py) = jittered(rng, x, y, jitter);
		let angle = rng.range(0.0, TAU);
		let speed = rng.range(1.0, 3.0);
		let max_life = rng.range(60.0, 100.0);
		let rays = 4 + (rng.next_f64() * 4.0) as u32;
		Self {
			x: px,
			y: py,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			size: rng.range(1.6, 3.2),
			opacity: rng.range(0.7, 1.0),
			phase: rng.range(0.0, TAU),
			kind: ParticleKind::Burst {
				life: max_life,
				max_life,
				rays,
			},
		}
	}

	/// Remaining-life fraction in `[0, 1]`; always 1 for ambient sparkles.
	pub fn life_ratio(&self) -> f64 {
		match self.kind {
			ParticleKind::Ambient => 1.0,
			ParticleKind::Drift { life, max_life }
			| ParticleKind::Burst { life, max_life, .. } => (life / max_life).clamp(0.0, 1.0),
		}
	}

	/// Ray spoke count; zero for everything except bursts.
	pub fn rays(&self) -> u32 {
		match self.kind {
			ParticleKind::Burst { rays, .. } => rays,
			_ => 0,
		}
	}

	/// Instantaneous draw alpha: base opacity scaled by the twinkle
	/// oscillation and the remaining-life fraction.
	pub fn twinkle_opacity(&self) -> f64 {
		self.opacity * (0.5 + 0.5 * self.phase.sin()) * self.life_ratio()
	}

	/// Decrement remaining life by `step`. Returns whether the particle is
	/// still alive; ambient sparkles always are.
	pub fn tick_life(&mut self, step: f64) -> bool {
		match &mut self.kind {
			ParticleKind::Ambient => true,
			ParticleKind::Drift { life, .. } | ParticleKind::Burst { life, .. } => {
				*life -= step;
				*life > 0.0
			}
		}
	}
}

/// Uniform point within `jitter` of `(x, y)`.
fn jittered(rng: &mut FieldRng, x: f64, y: f64, jitter: f64) -> (f64, f64) {
	let angle = rng.range(0.0, TAU);
	let r = jitter * rng.next_f64().sqrt();
	(x + angle.cos() * r, y + angle.sin() * r)
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	#[test]
	fn ambient_twinkle_peaks_at_base_opacity() {
		let mut rng = FieldRng::new(1);
		let mut p = Particle::ambient(&mut rng, 800.0, 600.0);
		p.phase = FRAC_PI_2; // sine = 1, twinkle factor = 1
		assert!((p.twinkle_opacity() - p.opacity).abs() < 1e-12);
	}

	#[test]
	fn drift_carries_no_rays() {
		let mut rng = FieldRng::new(2);
		let p = Particle::drift(&mut rng, 100.0, 100.0, 18.0);
		assert_eq!(p.rays(), 0);
		assert!(matches!(p.kind, ParticleKind::Drift { .. }));
	}

	#[test]
	fn burst_rays_at_least_four() {
		let mut rng = FieldRng::new(3);
		for _ in 0..200 {
			let p = Particle::burst(&mut rng, 0.0, 0.0, 42.0);
			assert!(p.rays() >= 4);
			assert!(p.rays() <= 7);
		}
	}

	#[test]
	fn life_ratio_fades_with_life() {
		let mut rng = FieldRng::new(4);
		let mut p = Particle::drift(&mut rng, 0.0, 0.0, 18.0);
		assert!((p.life_ratio() - 1.0).abs() < 1e-12);
		while p.life_ratio() > 0.5 {
			assert!(p.tick_life(1.0));
		}
		p.phase = FRAC_PI_2;
		assert!(p.twinkle_opacity() <= p.opacity * 0.5 + 1e-9);
	}

	#[test]
	fn ambient_never_expires() {
		let mut rng = FieldRng::new(5);
		let mut p = Particle::ambient(&mut rng, 800.0, 600.0);
		for _ in 0..10_000 {
			assert!(p.tick_life(1.0));
		}
	}
}
