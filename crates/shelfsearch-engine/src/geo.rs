//! Geodesic distance between coordinate pairs.
//!
//! Primary path: Vincenty's inverse formula on the WGS-84 ellipsoid,
//! accurate to well under a meter, rounded to 3 decimal places (km).
//! The iteration does not converge for near-antipodal pairs; those fall
//! back to spherical Haversine at reduced precision (1 decimal place).

use shelfsearch_core::Coordinates;

const WGS84_SEMI_MAJOR_M: f64 = 6_378_137.0;
const WGS84_SEMI_MINOR_M: f64 = 6_356_752.314_245;
const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// λ refinement stops once successive values differ by less than this
/// (radians).
const LAMBDA_CONVERGENCE_RAD: f64 = 1e-12;
const MAX_ITERATIONS: usize = 100;

const HAVERSINE_EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two coordinate pairs.
///
/// Pure function: symmetric in its arguments, zero for coincident points.
/// Vincenty result is rounded to 3 decimals; the Haversine fallback to 1
/// decimal, since that path only triggers on pathological inputs where
/// sub-meter precision is unattainable anyway.
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    match vincenty_km(a, b) {
        Some(km) => round_to(km, 3),
        None => round_to(haversine_km(a, b), 1),
    }
}

/// Vincenty inverse solution. `None` when λ fails to converge within
/// [`MAX_ITERATIONS`].
#[allow(clippy::float_cmp)]
fn vincenty_km(a: Coordinates, b: Coordinates) -> Option<f64> {
    let f = WGS84_FLATTENING;
    let reduced_lat_a = ((1.0 - f) * a.latitude.to_radians().tan()).atan();
    let reduced_lat_b = ((1.0 - f) * b.latitude.to_radians().tan()).atan();
    let lon_delta = (b.longitude - a.longitude).to_radians();

    let (sin_u1, cos_u1) = reduced_lat_a.sin_cos();
    let (sin_u2, cos_u2) = reduced_lat_b.sin_cos();

    let mut lambda = lon_delta;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        // Numerically coincident points.
        if sin_sigma == 0.0 {
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // cos_sq_alpha is zero for equatorial geodesics.
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous_lambda = lambda;
        lambda = lon_delta
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (2.0 * cos_2sigma_m * cos_2sigma_m - 1.0)));

        if (lambda - previous_lambda).abs() < LAMBDA_CONVERGENCE_RAD {
            let u_sq = cos_sq_alpha
                * (WGS84_SEMI_MAJOR_M.powi(2) - WGS84_SEMI_MINOR_M.powi(2))
                / WGS84_SEMI_MINOR_M.powi(2);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (2.0 * cos_2sigma_m * cos_2sigma_m - 1.0)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (4.0 * sin_sigma * sin_sigma - 3.0)
                                * (4.0 * cos_2sigma_m * cos_2sigma_m - 3.0)));
            let meters = WGS84_SEMI_MINOR_M * big_a * (sigma - delta_sigma);
            return Some(meters / 1000.0);
        }
    }

    None
}

/// Spherical great-circle distance on a mean Earth radius of 6371 km.
fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let half_dlat = (b.latitude - a.latitude).to_radians() / 2.0;
    let half_dlon = (b.longitude - a.longitude).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    2.0 * HAVERSINE_EARTH_RADIUS_KM * h.sqrt().asin()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
