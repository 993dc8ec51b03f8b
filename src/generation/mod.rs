use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{GenerationError, Result, TrigonError};
use crate::math::{Point2, Segment2};
use crate::polygon::Polygon;

/// Parameters controlling random polygon generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorParams {
    /// Width of the drawing area; x coordinates fall in `0..=width`.
    pub width: u32,
    /// Height of the drawing area; y coordinates fall in `0..=height`.
    pub height: u32,
    /// Smallest number of vertices to draw (at least 4).
    pub min_vertices: usize,
    /// Largest number of vertices to draw.
    pub max_vertices: usize,
    /// Points closer than this to an already drawn point are discarded.
    pub min_separation: f64,
    /// Number of draws before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            width: 720,
            height: 480,
            min_vertices: 4,
            max_vertices: 8,
            min_separation: 10.0,
            max_attempts: 64,
        }
    }
}

/// Generates a random closed simple polygon with integer coordinates.
///
/// The drawn points are split by the line through the leftmost and the
/// rightmost point. The upper chain is visited left to right, the lower
/// chain right to left, which yields an x-monotone polygon.
pub struct RandomPolygon {
    params: GeneratorParams,
    seed: Option<u64>,
}

impl RandomPolygon {
    /// Creates a new `RandomPolygon` operation seeded from the OS.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params, seed: None }
    }

    /// Fixes the seed so repeated runs produce the same polygon.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the generation, returning a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameters` for unusable parameters,
    /// or `GenerationError::AttemptsExhausted` if no draw produced a simple
    /// polygon within `max_attempts`.
    pub fn execute(&self) -> Result<Polygon> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for attempt in 1..=self.params.max_attempts {
            let count = rng.gen_range(self.params.min_vertices..=self.params.max_vertices);
            let Some(points) = self.draw_points(&mut rng, count) else {
                trace!(attempt, count, "not enough separated points");
                continue;
            };
            match Polygon::from_points(&monotone_order(points)) {
                Ok(polygon) => {
                    debug!(attempt, vertices = count, "random polygon generated");
                    return Ok(polygon);
                }
                Err(TrigonError::Polygon(err)) => {
                    trace!(attempt, %err, "draw rejected");
                }
                Err(other) => return Err(other),
            }
        }

        Err(GenerationError::AttemptsExhausted {
            attempts: self.params.max_attempts,
        }
        .into())
    }

    fn validate(&self) -> Result<()> {
        let p = &self.params;
        if p.min_vertices < 4 {
            return Err(GenerationError::InvalidParameters(format!(
                "min_vertices must be at least 4, got {}",
                p.min_vertices
            ))
            .into());
        }
        if p.max_vertices < p.min_vertices {
            return Err(GenerationError::InvalidParameters(format!(
                "max_vertices ({}) is less than min_vertices ({})",
                p.max_vertices, p.min_vertices
            ))
            .into());
        }
        if p.width == 0 || p.height == 0 {
            return Err(
                GenerationError::InvalidParameters("drawing area is empty".to_owned()).into(),
            );
        }
        if p.min_separation.is_nan() || p.min_separation < 0.0 {
            return Err(GenerationError::InvalidParameters(format!(
                "min_separation must be non-negative, got {}",
                p.min_separation
            ))
            .into());
        }
        Ok(())
    }

    /// Draws `count` pairwise separated points, or `None` if the area is too
    /// crowded to place them.
    fn draw_points(&self, rng: &mut StdRng, count: usize) -> Option<Vec<Point2>> {
        let limit = self.params.min_separation * self.params.min_separation;
        let mut points: Vec<Point2> = Vec::with_capacity(count);
        let mut draws = 0;
        while points.len() < count {
            draws += 1;
            if draws > count * 100 {
                return None;
            }
            let candidate = Point2::new(
                f64::from(rng.gen_range(0..=self.params.width)),
                f64::from(rng.gen_range(0..=self.params.height)),
            );
            let crowded = points
                .iter()
                .any(|p| (*p - candidate).norm_squared() <= limit);
            if !crowded {
                points.push(candidate);
            }
        }
        Some(points)
    }
}

/// Orders points as leftmost, upper chain, rightmost, lower chain.
fn monotone_order(points: Vec<Point2>) -> Vec<Point2> {
    let by_xy = |a: &Point2, b: &Point2| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));

    let mut sorted = points;
    sorted.sort_by(by_xy);
    let (Some(&left), Some(&right)) = (sorted.first(), sorted.last()) else {
        return sorted;
    };
    if sorted.len() < 3 {
        return sorted;
    }

    let split = Segment2::new(left, right).direction();
    let (mut upper, mut lower): (Vec<Point2>, Vec<Point2>) = sorted[1..sorted.len() - 1]
        .iter()
        .partition(|p| split.perp(&(**p - left)) > 0.0);
    upper.sort_by(by_xy);
    lower.sort_by(|a, b| by_xy(b, a));

    let mut ordered = Vec::with_capacity(sorted.len());
    ordered.push(left);
    ordered.extend(upper);
    ordered.push(right);
    ordered.extend(lower);
    ordered
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn same_seed_same_polygon() {
        let a = RandomPolygon::new(GeneratorParams::default())
            .with_seed(7)
            .execute()
            .unwrap();
        let b = RandomPolygon::new(GeneratorParams::default())
            .with_seed(7)
            .execute()
            .unwrap();
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn generated_polygon_respects_params() {
        let params = GeneratorParams {
            width: 100,
            height: 50,
            min_vertices: 5,
            max_vertices: 9,
            min_separation: 3.0,
            max_attempts: 32,
        };
        for seed in 0..20 {
            let polygon = RandomPolygon::new(params).with_seed(seed).execute().unwrap();
            assert!(polygon.is_closed());
            assert!((5..=9).contains(&polygon.vertex_count()));
            for point in polygon.points() {
                assert!((0.0..=100.0).contains(&point.x));
                assert!((0.0..=50.0).contains(&point.y));
                assert_eq!(point.x.fract(), 0.0);
            }
        }
    }

    #[test]
    fn unseeded_generation_works() {
        let polygon = RandomPolygon::new(GeneratorParams::default()).execute().unwrap();
        assert!(polygon.is_closed());
    }

    #[test]
    fn rejects_too_few_vertices() {
        let params = GeneratorParams {
            min_vertices: 3,
            ..GeneratorParams::default()
        };
        let err = RandomPolygon::new(params).with_seed(1).execute().unwrap_err();
        assert!(matches!(
            err,
            TrigonError::Generation(GenerationError::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_inverted_vertex_range() {
        let params = GeneratorParams {
            min_vertices: 6,
            max_vertices: 5,
            ..GeneratorParams::default()
        };
        let err = RandomPolygon::new(params).execute().unwrap_err();
        assert!(matches!(
            err,
            TrigonError::Generation(GenerationError::InvalidParameters(_))
        ));
    }

    #[test]
    fn crowded_area_exhausts_attempts() {
        let params = GeneratorParams {
            width: 2,
            height: 2,
            min_separation: 10.0,
            max_attempts: 3,
            ..GeneratorParams::default()
        };
        let err = RandomPolygon::new(params).with_seed(1).execute().unwrap_err();
        assert!(matches!(
            err,
            TrigonError::Generation(GenerationError::AttemptsExhausted { attempts: 3 })
        ));
    }

    #[test]
    fn monotone_order_splits_by_the_extreme_points() {
        let ordered = monotone_order(vec![
            p(5.0, -3.0),
            p(10.0, 0.0),
            p(3.0, 4.0),
            p(0.0, 0.0),
            p(7.0, 2.0),
        ]);
        assert_eq!(
            ordered,
            vec![p(0.0, 0.0), p(3.0, 4.0), p(7.0, 2.0), p(10.0, 0.0), p(5.0, -3.0)]
        );
        assert!(Polygon::from_points(&ordered).unwrap().is_clockwise());
    }
}
