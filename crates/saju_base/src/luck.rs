//! Luck pillars (대운): the ten-year timeline and the current period.

use serde::Serialize;

use crate::error::SajuError;
use crate::oracle::RawLuckPeriod;
use crate::pillar::Pillar;

/// Number of periods kept in a timeline.
pub const LUCK_TIMELINE_LEN: usize = 10;

/// Periods requested from the oracle: the pre-luck placeholder plus a full timeline.
pub const LUCK_PERIODS_REQUESTED: usize = LUCK_TIMELINE_LEN + 1;

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillarEntry {
    pub pillar: Pillar,
    /// Start age in completed years.
    pub start_age: u32,
    /// Start age in traditional Korean reckoning.
    pub start_age_korean: u32,
}

/// Build the timeline from the oracle's raw periods.
///
/// Entries whose ganzhi text is shorter than two characters are dropped
/// (the oracle leads with an empty pre-luck entry), then the first
/// [`LUCK_TIMELINE_LEN`] survivors are kept in oracle order. A survivor
/// with unknown characters fails the whole build.
pub fn build_luck_timeline(raw: &[RawLuckPeriod]) -> Result<Vec<LuckPillarEntry>, SajuError> {
    let mut out = Vec::with_capacity(LUCK_TIMELINE_LEN);
    for period in raw {
        if out.len() == LUCK_TIMELINE_LEN {
            break;
        }
        if period.ganzhi.chars().count() < 2 {
            tracing::debug!(ganzhi = %period.ganzhi, start_age = period.start_age, "skipping luck entry");
            continue;
        }
        out.push(LuckPillarEntry {
            pillar: Pillar::from_ganzhi(&period.ganzhi)?,
            start_age: period.start_age.saturating_sub(1),
            start_age_korean: period.start_age,
        });
    }
    Ok(out)
}

/// Index of the period containing `age`, if any.
///
/// Period `i` covers `[start_i, start_{i+1})`; the last period is open-ended.
/// Ages before the first start have no period.
pub fn current_period_index(timeline: &[LuckPillarEntry], age: u32) -> Option<usize> {
    for (i, entry) in timeline.iter().enumerate() {
        match timeline.get(i + 1) {
            Some(next) if age >= entry.start_age && age < next.start_age => return Some(i),
            None if age >= entry.start_age => return Some(i),
            _ => {}
        }
    }
    None
}
