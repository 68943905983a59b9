//! True new-moon instants.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), Chapter 49: mean phase
//! from the lunation number `k`, then the periodic corrections and the
//! fourteen planetary arguments. Accuracy is well under a minute for
//! dates within a few centuries of 2000.

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588861;

/// JDE of the mean new moon of lunation 0 (2000-01-06).
const EPOCH_JDE: f64 = 2_451_550.09766;

/// Periodic-term coefficients for the new moon.
///
/// Each row: `[coefficient, E power, nM', nM, nF, nΩ]`, summing
/// `coefficient · E^power · sin(nM'·M' + nM·M + nF·F + nΩ·Ω)`.
#[rustfmt::skip]
static NEW_MOON_TERMS: [[f64; 6]; 25] = [
    [-0.40720, 0.0, 1.0,  0.0,  0.0, 0.0],
    [ 0.17241, 1.0, 0.0,  1.0,  0.0, 0.0],
    [ 0.01608, 0.0, 2.0,  0.0,  0.0, 0.0],
    [ 0.01039, 0.0, 0.0,  0.0,  2.0, 0.0],
    [ 0.00739, 1.0, 1.0, -1.0,  0.0, 0.0],
    [-0.00514, 1.0, 1.0,  1.0,  0.0, 0.0],
    [ 0.00208, 2.0, 0.0,  2.0,  0.0, 0.0],
    [-0.00111, 0.0, 1.0,  0.0, -2.0, 0.0],
    [-0.00057, 0.0, 1.0,  0.0,  2.0, 0.0],
    [ 0.00056, 1.0, 2.0,  1.0,  0.0, 0.0],
    [-0.00042, 0.0, 3.0,  0.0,  0.0, 0.0],
    [ 0.00042, 1.0, 0.0,  1.0,  2.0, 0.0],
    [ 0.00038, 1.0, 0.0,  1.0, -2.0, 0.0],
    [-0.00024, 1.0, 2.0, -1.0,  0.0, 0.0],
    [-0.00017, 0.0, 0.0,  0.0,  0.0, 1.0],
    [-0.00007, 0.0, 1.0,  2.0,  0.0, 0.0],
    [ 0.00004, 0.0, 2.0,  0.0, -2.0, 0.0],
    [ 0.00004, 0.0, 0.0,  3.0,  0.0, 0.0],
    [ 0.00003, 0.0, 1.0,  1.0, -2.0, 0.0],
    [ 0.00003, 0.0, 2.0,  0.0,  2.0, 0.0],
    [-0.00003, 0.0, 1.0,  1.0,  2.0, 0.0],
    [ 0.00003, 0.0, 1.0, -1.0,  2.0, 0.0],
    [-0.00002, 0.0, 1.0, -1.0, -2.0, 0.0],
    [-0.00002, 0.0, 3.0,  1.0,  0.0, 0.0],
    [ 0.00002, 0.0, 4.0,  0.0,  0.0, 0.0],
];

/// Planetary arguments A1..A14: `[constant, rate per lunation, amplitude]`.
/// A1 also carries a `T²` term applied separately.
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 3]; 14] = [
    [299.77,  0.107408, 0.000325],
    [251.88,  0.016321, 0.000165],
    [251.83, 26.651886, 0.000164],
    [349.42, 36.412478, 0.000126],
    [ 84.66, 18.206239, 0.000110],
    [141.74, 53.303771, 0.000062],
    [207.14,  2.453732, 0.000060],
    [154.84,  7.306860, 0.000056],
    [ 34.52, 27.261239, 0.000047],
    [207.19,  0.121824, 0.000042],
    [291.34,  1.844379, 0.000040],
    [161.72, 24.198154, 0.000037],
    [239.56, 25.513099, 0.000035],
    [331.55,  3.592518, 0.000023],
];

/// JDE of the true new moon of lunation `k` (k = 0 near 2000-01-06).
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = (2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3).to_radians();
    let mp = (201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
        - 0.000000058 * t4)
        .to_radians();
    let f = (160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
        + 0.000000011 * t4)
        .to_radians();
    let om = (124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3).to_radians();

    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|&[coef, e_pow, n_mp, n_m, n_f, n_om]| {
            coef * e.powi(e_pow as i32) * (n_mp * mp + n_m * m + n_f * f + n_om * om).sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &[c0, rate, amp])| {
            let mut arg = c0 + rate * k;
            if i == 0 {
                arg -= 0.009173 * t2;
            }
            amp * arg.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// Lunation number whose mean new moon is nearest to `jde`.
pub fn lunation_near(jde: f64) -> i64 {
    ((jde - EPOCH_JDE) / SYNODIC_MONTH_DAYS).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_49a() {
        // k = -283: new moon of 1977 February 18, JDE 2443192.65118
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.65118).abs() < 0.0005, "got {jde}");
    }

    #[test]
    fn lunation_zero_is_january_2000() {
        // 2000-01-06 18:14 UT
        let jde = new_moon_jde(0);
        assert!((jde - 2_451_550.26).abs() < 0.01, "got {jde}");
    }

    #[test]
    fn nearest_lunation_roundtrip() {
        for k in [-500, -1, 0, 1, 312] {
            assert_eq!(lunation_near(new_moon_jde(k)), k);
        }
    }
}
