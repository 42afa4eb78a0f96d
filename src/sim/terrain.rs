//! Procedural terrain with embedded landing pads
//!
//! The ground is a polyline with `TERRAIN_SEGMENTS + 1` points spanning the
//! full play-field width. Pads sit on stretches that are held flat while the
//! height cursor walks left to right, so "on a pad" reduces to an x-range test.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// A flat landing target occupying `[x, x + width]` at height `y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPad {
    pub x: f32,
    pub width: f32,
    pub y: f32,
}

impl LandingPad {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Inclusive horizontal containment
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }
}

/// Ground profile for one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Play-field width the terrain was generated for
    pub width: f32,
    /// Play-field height the terrain was generated for
    pub height: f32,
    /// Polyline, x non-decreasing
    pub points: Vec<Vec2>,
    pub landing_pads: Vec<LandingPad>,
}

impl Terrain {
    /// Ground height under `x`, interpolated on the first segment that contains it
    ///
    /// Returns `None` when `x` is off the polyline.
    pub fn height_at(&self, x: f32) -> Option<f32> {
        self.points.windows(2).find_map(|seg| {
            let (a, b) = (seg[0], seg[1]);
            if x < a.x || x > b.x {
                return None;
            }
            let span = b.x - a.x;
            let t = if span > 0.0 { (x - a.x) / span } else { 0.0 };
            Some(lerp(a.y, b.y, t))
        })
    }

    /// The first pad whose x-range contains `x`
    pub fn pad_at(&self, x: f32) -> Option<&LandingPad> {
        self.landing_pads.iter().find(|pad| pad.contains_x(x))
    }

    /// The pad whose center is horizontally closest to `x`
    pub fn nearest_pad(&self, x: f32) -> Option<&LandingPad> {
        self.landing_pads.iter().min_by(|a, b| {
            (a.center() - x)
                .abs()
                .partial_cmp(&(b.center() - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Generate terrain using the thread RNG
    pub fn generate(width: f32, height: f32) -> Self {
        generate_terrain(width, height, &mut rand::rng())
    }
}

/// Generate a terrain profile of `width` x `height` with 2-3 flat pads
pub fn generate_terrain<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Terrain {
    let segment_width = width / TERRAIN_SEGMENTS as f32;
    // Ordered so a negative height cannot invert the band
    let (low, high) = (height * MIN_TERRAIN_FRACTION, height * MAX_TERRAIN_FRACTION);
    let (min_y, max_y) = (low.min(high), low.max(high));
    // max/min instead of clamp: NaN bounds must not panic
    let clamp_y = |y: f32| y.max(min_y).min(max_y);

    // Distinct pad boundary indices, away from the field edges
    let num_pads = rng.random_range(MIN_PADS..=MAX_PADS);
    let mut pad_indices = BTreeSet::new();
    while pad_indices.len() < num_pads {
        pad_indices.insert(rng.random_range(PAD_EDGE_MARGIN..TERRAIN_SEGMENTS - PAD_EDGE_MARGIN));
    }

    // A pad at boundary i covers [i - 0.25, i + 1.25] segments, so the
    // segments from i - 1 through i + 2 must stay level: points i, i + 1
    // and i + 2 keep the cursor height.
    let is_flat = |i: usize| {
        pad_indices.contains(&i)
            || (i >= 1 && pad_indices.contains(&(i - 1)))
            || (i >= 2 && pad_indices.contains(&(i - 2)))
    };

    let mut current_y =
        clamp_y(height * START_HEIGHT_FRACTION + rng.random_range(0.0..START_HEIGHT_JITTER));
    log::debug!(
        "Generating terrain {}x{}: pads at {:?}, start height {:.1}",
        width,
        height,
        pad_indices,
        current_y
    );

    let mut points = Vec::with_capacity(TERRAIN_SEGMENTS + 1);
    let mut landing_pads = Vec::with_capacity(num_pads);

    for i in 0..=TERRAIN_SEGMENTS {
        let x = i as f32 * segment_width;

        if pad_indices.contains(&i) {
            landing_pads.push(LandingPad {
                x: x - segment_width * PAD_LEAD_SEGMENTS,
                width: segment_width * PAD_WIDTH_SEGMENTS,
                y: current_y,
            });
        } else if !is_flat(i) {
            let delta = rng.random_range(-MAX_HEIGHT_STEP..MAX_HEIGHT_STEP);
            current_y = clamp_y(current_y + delta);
        }

        points.push(Vec2::new(x, current_y));
    }

    Terrain {
        width,
        height,
        points,
        landing_pads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn flat_terrain(y: f32) -> Terrain {
        Terrain {
            width: 100.0,
            height: 200.0,
            points: vec![Vec2::new(0.0, y), Vec2::new(50.0, y), Vec2::new(100.0, y)],
            landing_pads: vec![LandingPad {
                x: 40.0,
                width: 20.0,
                y,
            }],
        }
    }

    #[test]
    fn test_point_and_pad_counts() {
        let mut rng = Pcg32::seed_from_u64(1);
        let terrain = generate_terrain(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
        assert_eq!(terrain.points.len(), TERRAIN_SEGMENTS + 1);
        assert!((MIN_PADS..=MAX_PADS).contains(&terrain.landing_pads.len()));
    }

    #[test]
    fn test_spans_full_width() {
        let terrain = generate_terrain(FIELD_WIDTH, FIELD_HEIGHT, &mut Pcg32::seed_from_u64(2));
        assert_eq!(terrain.points.first().map(|p| p.x), Some(0.0));
        let last = terrain.points.last().map(|p| p.x).unwrap();
        assert!((last - FIELD_WIDTH).abs() < 1e-3);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let a = generate_terrain(FIELD_WIDTH, FIELD_HEIGHT, &mut Pcg32::seed_from_u64(77));
        let b = generate_terrain(FIELD_WIDTH, FIELD_HEIGHT, &mut Pcg32::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_height_at_interpolates() {
        let terrain = Terrain {
            width: 100.0,
            height: 200.0,
            points: vec![Vec2::new(0.0, 100.0), Vec2::new(100.0, 200.0)],
            landing_pads: Vec::new(),
        };
        assert_eq!(terrain.height_at(0.0), Some(100.0));
        assert_eq!(terrain.height_at(25.0), Some(125.0));
        assert_eq!(terrain.height_at(100.0), Some(200.0));
        assert_eq!(terrain.height_at(-0.5), None);
        assert_eq!(terrain.height_at(100.5), None);
    }

    #[test]
    fn test_height_at_degenerate_segment() {
        let terrain = Terrain {
            width: 10.0,
            height: 20.0,
            points: vec![Vec2::new(10.0, 5.0), Vec2::new(10.0, 15.0)],
            landing_pads: Vec::new(),
        };
        assert_eq!(terrain.height_at(10.0), Some(5.0));
    }

    #[test]
    fn test_height_at_empty_terrain() {
        let terrain = Terrain {
            width: 10.0,
            height: 10.0,
            points: Vec::new(),
            landing_pads: Vec::new(),
        };
        assert_eq!(terrain.height_at(5.0), None);
    }

    #[test]
    fn test_pad_lookup() {
        let terrain = flat_terrain(150.0);
        assert!(terrain.pad_at(40.0).is_some());
        assert!(terrain.pad_at(60.0).is_some());
        assert!(terrain.pad_at(61.0).is_none());
        assert_eq!(terrain.nearest_pad(90.0).map(|p| p.center()), Some(50.0));
    }

    #[test]
    fn test_degenerate_height_does_not_panic() {
        let inverted = generate_terrain(FIELD_WIDTH, -100.0, &mut Pcg32::seed_from_u64(8));
        assert_eq!(inverted.points.len(), TERRAIN_SEGMENTS + 1);
        for p in &inverted.points {
            assert!(p.y >= -90.0 && p.y <= -50.0, "y={} outside band", p.y);
        }

        let nan = generate_terrain(FIELD_WIDTH, f32::NAN, &mut Pcg32::seed_from_u64(8));
        assert_eq!(nan.points.len(), TERRAIN_SEGMENTS + 1);
        assert!((nan.points[TERRAIN_SEGMENTS].x - FIELD_WIDTH).abs() < 1e-3);
    }

    #[test]
    fn test_generate_uses_thread_rng() {
        let terrain = Terrain::generate(400.0, 300.0);
        assert_eq!(terrain.points.len(), TERRAIN_SEGMENTS + 1);
        assert_eq!(terrain.width, 400.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn terrain_is_well_formed(
                seed in any::<u64>(),
                width in 200.0f32..2000.0,
                height in 200.0f32..1500.0,
            ) {
                let terrain = generate_terrain(width, height, &mut Pcg32::seed_from_u64(seed));

                prop_assert_eq!(terrain.points[0].x, 0.0);
                prop_assert!((terrain.points[TERRAIN_SEGMENTS].x - width).abs() < 1e-2);
                for seg in terrain.points.windows(2) {
                    prop_assert!(seg[1].x >= seg[0].x);
                }
                for p in &terrain.points {
                    prop_assert!(p.y >= height * MIN_TERRAIN_FRACTION - 1e-3);
                    prop_assert!(p.y <= height * MAX_TERRAIN_FRACTION + 1e-3);
                }
            }

            #[test]
            fn pads_sit_on_flat_ground(seed in any::<u64>()) {
                let terrain = generate_terrain(FIELD_WIDTH, FIELD_HEIGHT, &mut Pcg32::seed_from_u64(seed));

                for pad in &terrain.landing_pads {
                    prop_assert!(pad.x >= 0.0);
                    prop_assert!(pad.right() <= FIELD_WIDTH);
                    // Sample across the whole footprint, edges included
                    for k in 0..=10 {
                        let x = pad.x + pad.width * k as f32 / 10.0;
                        let ground = terrain.height_at(x);
                        prop_assert_eq!(ground, Some(pad.y), "pad {:?} not flat at x={}", pad, x);
                    }
                }
            }
        }
    }
}
