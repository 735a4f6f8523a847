//! Noise backends driving the animated scalar field.
//!
//! All backends share one contract: a continuous, deterministic function
//! of (x, y, t) into [0, 1]. The third axis is animation time, so a
//! slowly increasing `t` morphs the field organically. Backends are
//! selected at construction from [`NoiseConfig`], never by editing call
//! sites.

use field_common::{NoiseBackend, NoiseConfig};
use noise::{NoiseFn, OpenSimplex, Perlin, Value};

/// A 3D scalar field sampled as (x, y, time) -> value in [0, 1].
pub trait NoiseField {
    /// Sample the field. Deterministic for a fixed seed, continuous in
    /// all three arguments, always within [0, 1].
    fn sample(&self, x: f64, y: f64, t: f64) -> f64;
}

/// Adapter from any 3D `NoiseFn` generator to the [0, 1] field contract.
struct Remapped<N> {
    inner: N,
}

impl<N: NoiseFn<f64, 3>> NoiseField for Remapped<N> {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        // Generators return roughly [-1, 1]; some overshoot slightly, so
        // the remapped value is clamped.
        let v = self.inner.get([x, y, t]);
        ((v + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Build the configured noise backend.
pub fn build_noise(config: &NoiseConfig) -> Box<dyn NoiseField> {
    match config.backend {
        NoiseBackend::Value => Box::new(Remapped {
            inner: Value::new(config.seed),
        }),
        NoiseBackend::Perlin => Box::new(Remapped {
            inner: Perlin::new(config.seed),
        }),
        NoiseBackend::OpenSimplex => Box::new(Remapped {
            inner: OpenSimplex::new(config.seed),
        }),
    }
}
