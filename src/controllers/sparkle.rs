pub const SPARKLES_PER_BURST: usize = 6;
pub const SPARKLE_COLOR: &str = "#fe240b";

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl Sparkle {
    pub fn transform(&self) -> String {
        format!("rotate({:.1}deg) scale({:.2})", self.rotation, self.scale)
    }
}

fn between(rng: &mut impl FnMut() -> f64, min: f64, max: f64) -> f64 {
    rng() * (max - min) + min
}

/// Scatters a burst of marks around `(x, y)`. `rng` yields values in `[0, 1)`.
pub fn burst(x: f64, y: f64, mut rng: impl FnMut() -> f64) -> Vec<Sparkle> {
    (0..SPARKLES_PER_BURST)
        .map(|_| Sparkle {
            size: between(&mut rng, 10.0, 20.0),
            top: y + between(&mut rng, -20.0, 20.0),
            left: x + between(&mut rng, -20.0, 20.0),
            rotation: between(&mut rng, 0.0, 360.0),
            scale: between(&mut rng, 0.5, 1.0),
        })
        .collect()
}

/// Eight-point star filling a `size` x `size` box.
pub fn sparkle_path(size: f64) -> String {
    let half = size / 2.0;
    let outer = size / 1.5;
    let inner = size / 2.5;
    format!(
        "M{half} 0L{outer} {outer}L{size} {half}L{outer} {outer}L{half} {size}L{inner} {outer}L0 {half}L{inner} {outer}Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_size_and_bounds() {
        let mut seed = 0.0;
        let sparkles = burst(100.0, 50.0, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });

        assert_eq!(sparkles.len(), SPARKLES_PER_BURST);
        for s in &sparkles {
            assert!((10.0..20.0).contains(&s.size));
            assert!((30.0..70.0).contains(&s.top));
            assert!((80.0..120.0).contains(&s.left));
            assert!((0.0..360.0).contains(&s.rotation));
            assert!((0.5..1.0).contains(&s.scale));
        }
    }

    #[test]
    fn test_burst_extremes() {
        let low = burst(0.0, 0.0, || 0.0);
        assert_eq!(low[0], Sparkle { top: -20.0, left: -20.0, size: 10.0, rotation: 0.0, scale: 0.5 });
        assert_eq!(low[0].transform(), "rotate(0.0deg) scale(0.50)");
    }

    #[test]
    fn test_path_for_size_ten() {
        assert_eq!(
            sparkle_path(10.0),
            "M5 0L6.666666666666667 6.666666666666667L10 5L6.666666666666667 6.666666666666667L5 10L4 6.666666666666667L0 5L4 6.666666666666667Z"
        );
    }
}
