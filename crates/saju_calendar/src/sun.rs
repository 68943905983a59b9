//! Apparent geocentric longitude of the Sun.
//!
//! Low-accuracy series of Meeus, "Astronomical Algorithms" (2nd ed.),
//! Chapter 25, with the nutation and aberration correction for apparent
//! longitude. Good to about 0.01°, i.e. a quarter hour on term instants.

use saju_time::jde_to_centuries;

/// Normalize degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize degrees to (-180, 180].
pub fn signed_deg(deg: f64) -> f64 {
    let r = normalize_deg(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360) at a JDE.
pub fn apparent_longitude(jde: f64) -> f64 {
    let t = jde_to_centuries(jde);
    let t2 = t * t;

    // geometric mean longitude and mean anomaly
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();

    // equation of centre
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.00569 - 0.00478 * omega.sin())
}
