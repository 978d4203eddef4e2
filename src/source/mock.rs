//! Seeded mock route generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::{sample_fuel_stops, sample_tolls};
use super::RouteSource;
use crate::models::{Difficulty, Location, Route};

/// Generates three canned candidate routes for any pair of locations.
///
/// A base distance in `[100, 600)` km is drawn from an RNG seeded with the
/// source seed mixed with both location IDs, so the same pair always yields
/// the same routes:
///
/// 1. Fastest (highway): base km, both tolls, both fuel stops, popular.
/// 2. Scenic (state highway): base + 50 km, first toll only, Moderate.
/// 3. Economic: base + 30 km, toll-free, second fuel stop only.
///
/// Durations are whole hours: distance / 60, 45 and 50 km/h respectively,
/// truncated.
///
/// # Examples
///
/// ```
/// use trip_cost::source::{catalog, MockRouteSource, RouteSource};
///
/// let locations = catalog::popular_locations();
/// let source = MockRouteSource::new(7);
/// let routes = source.candidate_routes(&locations[0], &locations[1]);
/// assert_eq!(routes.len(), 3);
/// assert!(routes[2].is_toll_free());
/// assert_eq!(routes, source.candidate_routes(&locations[0], &locations[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRouteSource {
    seed: u64,
}

impl MockRouteSource {
    /// Creates a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng_for(&self, origin: &Location, destination: &Location) -> StdRng {
        // FNV-1a over "<origin>\0<destination>"
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        let bytes = origin
            .id()
            .bytes()
            .chain(std::iter::once(0))
            .chain(destination.id().bytes());
        for b in bytes {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        StdRng::seed_from_u64(self.seed ^ hash)
    }
}

impl Default for MockRouteSource {
    fn default() -> Self {
        Self::new(42)
    }
}

impl RouteSource for MockRouteSource {
    fn candidate_routes(&self, origin: &Location, destination: &Location) -> Vec<Route> {
        let mut rng = self.rng_for(origin, destination);
        let base: u32 = rng.random_range(100..600);
        let tolls = sample_tolls();
        let stops = sample_fuel_stops();

        log::debug!(
            "generating routes {} -> {} from base distance {} km",
            origin.id(),
            destination.id(),
            base
        );

        let fastest = Route::new(
            "route-1",
            "Fastest Route (via Highway)",
            f64::from(base),
            whole_hours(base, 60),
        )
        .with_tolls(tolls.clone())
        .with_fuel_stops(stops.clone())
        .with_popular(true)
        .with_difficulty(Difficulty::Easy);

        let scenic_km = base + 50;
        let scenic = Route::new(
            "route-2",
            "Scenic Route (via State Highway)",
            f64::from(scenic_km),
            whole_hours(scenic_km, 45),
        )
        .with_tolls(tolls.into_iter().take(1).collect())
        .with_fuel_stops(stops.clone())
        .with_difficulty(Difficulty::Moderate);

        let economic_km = base + 30;
        let economic = Route::new(
            "route-3",
            "Economic Route (Toll-Free)",
            f64::from(economic_km),
            whole_hours(economic_km, 50),
        )
        .with_fuel_stops(stops.into_iter().skip(1).collect())
        .with_difficulty(Difficulty::Easy);

        vec![fastest, scenic, economic]
    }
}

/// Minutes to drive `km` at `speed_kmh`, truncated to whole hours.
fn whole_hours(km: u32, speed_kmh: u32) -> u32 {
    (km / speed_kmh) * 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::catalog::popular_locations;

    #[test]
    fn test_three_routes_in_order() {
        let locs = popular_locations();
        let routes = MockRouteSource::default().candidate_routes(&locs[0], &locs[1]);
        let ids: Vec<&str> = routes.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["route-1", "route-2", "route-3"]);
    }

    #[test]
    fn test_route_shapes() {
        let locs = popular_locations();
        let routes = MockRouteSource::new(1).candidate_routes(&locs[2], &locs[3]);
        let base = routes[0].distance();
        assert!((100.0..600.0).contains(&base));

        assert_eq!(routes[0].toll_count(), 2);
        assert_eq!(routes[0].fuel_stops().len(), 2);
        assert!(routes[0].is_popular());
        assert_eq!(routes[0].difficulty(), Difficulty::Easy);

        assert_eq!(routes[1].distance(), base + 50.0);
        assert_eq!(routes[1].toll_count(), 1);
        assert_eq!(routes[1].tolls()[0].id, "toll-1");
        assert_eq!(routes[1].difficulty(), Difficulty::Moderate);

        assert_eq!(routes[2].distance(), base + 30.0);
        assert!(routes[2].is_toll_free());
        assert_eq!(routes[2].fuel_stops().len(), 1);
        assert_eq!(routes[2].fuel_stops()[0].id, "fuel-2");
    }

    #[test]
    fn test_durations_are_whole_hours() {
        let locs = popular_locations();
        let routes = MockRouteSource::new(9).candidate_routes(&locs[0], &locs[4]);
        let base = routes[0].distance() as u32;
        assert_eq!(routes[0].duration(), (base / 60) * 60);
        assert_eq!(routes[1].duration(), ((base + 50) / 45) * 60);
        assert_eq!(routes[2].duration(), ((base + 30) / 50) * 60);
        assert!(routes.iter().all(|r| r.duration() % 60 == 0));
    }

    #[test]
    fn test_deterministic_per_pair() {
        let locs = popular_locations();
        let source = MockRouteSource::new(123);
        let a = source.candidate_routes(&locs[0], &locs[1]);
        let b = source.candidate_routes(&locs[0], &locs[1]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(whole_hours(119, 60), 60);
        assert_eq!(whole_hours(120, 60), 120);
        assert_eq!(whole_hours(90, 45), 120);
        assert_eq!(whole_hours(49, 50), 0);
    }
}
