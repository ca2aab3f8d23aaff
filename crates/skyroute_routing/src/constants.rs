pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;

pub const DEFAULT_SIMPLIFICATION_ROUNDS: usize = 5;
pub const DEFAULT_K_PATHS: usize = 5;
