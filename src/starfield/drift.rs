//! Decorative CSS-animated elements layered over the starfield.
//!
//! Positions and timings are drawn once when the element is created and never
//! recomputed; the browser loops the keyframes from there.

pub const BLOCKCHAIN_PLATFORMS: [&str; 15] = [
    "Bitcoin",
    "Ethereum",
    "Hyperledger Fabric",
    "Corda",
    "Binance Smart Chain",
    "Polkadot",
    "Cosmos SDK",
    "Stellar",
    "Tron",
    "Ripple",
    "Quorum",
    "EOS",
    "Tezos",
    "XDC Network",
    "Hedera Hashgraph",
];

pub const PARTICLE_COUNT: usize = 50;
pub const TWINKLE_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLabel {
    pub text: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingLabel {
    pub fn new(rng: &mut fastrand::Rng, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            duration_s: rng.f64() * 20.0 + 10.0,
            delay_s: rng.f64() * 5.0,
        }
    }

    pub fn scatter(rng: &mut fastrand::Rng, texts: &[&str]) -> Vec<Self> {
        texts.iter().map(|t| Self::new(rng, *t)).collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation: float-drift {:.3}s linear {:.3}s infinite;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Small pulsing dot; `ambient` for the page backdrop, `twinkle` for the
/// project section sky.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn ambient(rng: &mut fastrand::Rng) -> Self {
        Self {
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            size_px: rng.f64() * 3.0 + 1.0,
            duration_s: rng.f64() * 20.0 + 10.0,
            delay_s: rng.f64() * 5.0,
        }
    }

    pub fn twinkle(rng: &mut fastrand::Rng) -> Self {
        Self {
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            size_px: rng.f64() * 2.0 + 1.0,
            duration_s: rng.f64() * 5.0 + 3.0,
            delay_s: rng.f64() * 5.0,
        }
    }

    pub fn scatter(
        rng: &mut fastrand::Rng,
        count: usize,
        make: fn(&mut fastrand::Rng) -> Self,
    ) -> Vec<Self> {
        (0..count).map(|_| make(rng)).collect()
    }

    /// Inline style looping the named keyframes.
    pub fn style(&self, keyframes: &str) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; animation: {keyframes} {:.3}s ease-in-out {:.3}s infinite;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.duration_s, self.delay_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        let labels = FloatingLabel::scatter(&mut rng, &BLOCKCHAIN_PLATFORMS);

        assert_eq!(labels.len(), BLOCKCHAIN_PLATFORMS.len());
        for (label, text) in labels.iter().zip(BLOCKCHAIN_PLATFORMS) {
            assert_eq!(label.text, text);
            assert!((0.0..100.0).contains(&label.left_pct));
            assert!((0.0..100.0).contains(&label.top_pct));
            assert!((10.0..30.0).contains(&label.duration_s));
            assert!((0.0..5.0).contains(&label.delay_s));
        }
    }

    #[test]
    fn test_label_style() {
        let label = FloatingLabel {
            text: "Tezos".to_string(),
            left_pct: 12.5,
            top_pct: 40.0,
            duration_s: 15.0,
            delay_s: 2.25,
        };
        assert_eq!(
            label.style(),
            "left: 12.500%; top: 40.000%; animation: float-drift 15.000s linear 2.250s infinite;"
        );
    }

    #[test]
    fn test_particle_ranges() {
        let mut rng = fastrand::Rng::with_seed(3);
        let particles = Particle::scatter(&mut rng, PARTICLE_COUNT, Particle::ambient);

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((1.0..4.0).contains(&p.size_px));
            assert!((10.0..30.0).contains(&p.duration_s));
        }

        let stars = Particle::scatter(&mut rng, TWINKLE_COUNT, Particle::twinkle);
        assert_eq!(stars.len(), TWINKLE_COUNT);
        for p in &stars {
            assert!((1.0..3.0).contains(&p.size_px));
            assert!((3.0..8.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            left_pct: 1.0,
            top_pct: 2.0,
            size_px: 3.0,
            duration_s: 4.0,
            delay_s: 0.5,
        };
        assert_eq!(
            p.style("twinkle"),
            "left: 1.000%; top: 2.000%; width: 3.00px; height: 3.00px; animation: twinkle 4.000s ease-in-out 0.500s infinite;"
        );
    }
}
