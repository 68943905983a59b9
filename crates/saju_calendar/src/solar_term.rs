//! The 24 solar terms (절기) and the search for their instants.
//!
//! Terms sit every 15° of apparent solar longitude, starting from 입춘
//! (立春) at 315°. Even-numbered terms are the 12 jie (절) that open the
//! solar months; odd-numbered ones are the zhongqi (중기) at multiples of
//! 30° that anchor the lunar month numbering.

use crate::sun::{apparent_longitude, normalize_deg, signed_deg};

/// Mean length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_DEG: f64 = 1e-7;

/// A solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baekro,
    Chubun,
    Hanro,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All terms in order from 입춘.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baekro,
    SolarTerm::Chubun,
    SolarTerm::Hanro,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

const KOREAN_NAMES: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지", "소한", "대한",
];

const HANJA_NAMES: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

/// Longitude of 입춘, where the solar year and the 寅 month begin.
pub const IPCHUN_LONGITUDE: f64 = 315.0;

/// Longitude of 동지 (winter solstice).
pub const DONGJI_LONGITUDE: f64 = 270.0;

impl SolarTerm {
    /// 0-based index from 입춘.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Term at `index` counting from 입춘, wrapping modulo 24.
    pub fn from_index(index: usize) -> Self {
        ALL_SOLAR_TERMS[index % 24]
    }

    /// Apparent solar longitude of the term in degrees.
    pub fn longitude(self) -> f64 {
        normalize_deg(IPCHUN_LONGITUDE + 15.0 * self.index() as f64)
    }

    /// Whether the term opens a solar month (절).
    pub fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Hangul name, e.g. "입춘".
    pub fn korean_name(self) -> &'static str {
        KOREAN_NAMES[self.index()]
    }

    /// Hanja name, e.g. "立春".
    pub fn hanja_name(self) -> &'static str {
        HANJA_NAMES[self.index()]
    }

    /// The jie opening solar month `offset` (0 = 寅 month).
    pub fn jie_of_month(offset: usize) -> Self {
        Self::from_index(2 * (offset % 12))
    }

    /// The most recent term at or before a solar longitude.
    pub fn at_longitude(longitude: f64) -> Self {
        let offset = normalize_deg(longitude - IPCHUN_LONGITUDE);
        Self::from_index((offset / 15.0).floor() as usize)
    }
}

/// Iterate from `guess` to the JDE where the Sun reaches `target` degrees.
fn refine(target: f64, guess: f64) -> f64 {
    let mut jde = guess;
    for i in 0..MAX_ITERATIONS {
        let delta = signed_deg(target - apparent_longitude(jde));
        jde += delta * TROPICAL_YEAR_DAYS / 360.0;
        tracing::trace!(iteration = i, jde, delta, "solar longitude search");
        if delta.abs() < CONVERGENCE_DEG {
            break;
        }
    }
    jde
}

/// First JDE at or after `after` where the Sun reaches `target` degrees.
pub fn next_crossing(target: f64, after: f64) -> f64 {
    let ahead = normalize_deg(target - apparent_longitude(after));
    let mut jde = refine(target, after + ahead * TROPICAL_YEAR_DAYS / 360.0);
    if jde < after {
        jde = refine(target, jde + TROPICAL_YEAR_DAYS);
    }
    jde
}

/// Last JDE at or before `before` where the Sun reached `target` degrees.
pub fn prev_crossing(target: f64, before: f64) -> f64 {
    let behind = normalize_deg(apparent_longitude(before) - target);
    let mut jde = refine(target, before - behind * TROPICAL_YEAR_DAYS / 360.0);
    if jde > before {
        jde = refine(target, jde - TROPICAL_YEAR_DAYS);
    }
    jde
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use saju_time::LocalClock;

    fn jde(clock: &LocalClock, y: i32, m: u32, d: u32) -> f64 {
        clock.to_jde(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn term_table() {
        assert_eq!(SolarTerm::Ipchun.longitude(), 315.0);
        assert_eq!(SolarTerm::Chunbun.longitude(), 0.0);
        assert_eq!(SolarTerm::Dongji.longitude(), 270.0);
        assert!(SolarTerm::Ipchun.is_jie());
        assert!(!SolarTerm::Dongji.is_jie());
        assert_eq!(SolarTerm::Dongji.hanja_name(), "冬至");
        assert_eq!(SolarTerm::jie_of_month(11), SolarTerm::Sohan);
    }

    #[test]
    fn term_at_longitude() {
        assert_eq!(SolarTerm::at_longitude(315.0), SolarTerm::Ipchun);
        assert_eq!(SolarTerm::at_longitude(314.9), SolarTerm::Daehan);
        assert_eq!(SolarTerm::at_longitude(5.0), SolarTerm::Chunbun);
    }

    #[test]
    fn ipchun_2020() {
        // 2020-02-04 17:03 in UTC+8
        let clock = LocalClock::new(480);
        let j = next_crossing(IPCHUN_LONGITUDE, jde(&clock, 2020, 1, 1));
        let t = clock.to_local(j).unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 2, 4)
            .unwrap()
            .and_hms_opt(17, 3, 0)
            .unwrap();
        let off = (t - expected).num_minutes().abs();
        assert!(off <= 15, "got {t}");
    }

    #[test]
    fn dongji_2020() {
        // 2020-12-21 18:02 in UTC+8
        let clock = LocalClock::new(480);
        let j = next_crossing(DONGJI_LONGITUDE, jde(&clock, 2020, 12, 1));
        let t = clock.to_local(j).unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 12, 21)
            .unwrap()
            .and_hms_opt(18, 2, 0)
            .unwrap();
        assert!((t - expected).num_minutes().abs() <= 15, "got {t}");
    }

    #[test]
    fn prev_and_next_bracket() {
        let clock = LocalClock::new(480);
        let at = jde(&clock, 2023, 6, 1);
        let prev = prev_crossing(45.0, at);
        let next = next_crossing(75.0, at);
        assert!(prev <= at && at <= next);
        assert!((next - prev) < 40.0);
    }

    #[test]
    fn crossing_converges() {
        let j = next_crossing(123.0, 2_451_545.0);
        assert!(signed_deg(apparent_longitude(j) - 123.0).abs() < 1e-6);
    }
}
