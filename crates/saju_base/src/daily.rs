//! Daily fortune (오늘의 운세): today's pillar read against the day master.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::branch::Branch;
use crate::error::SajuError;
use crate::oracle::CalendarOracle;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};

const DEFAULT_COMMENT: &str = "평온한 하루가 예상됩니다.";

const CLASH_COMMENT: &str = "변동수가 강한 날입니다. 차분하게 대응하면 기회가 됩니다.";

/// Ten gods that mark a day as lucky when no clash is present.
pub const LUCKY_TEN_GODS: [TenGod; 4] = [
    TenGod::IndirectWealth,
    TenGod::Eater,
    TenGod::DirectOfficer,
    TenGod::DirectResource,
];

fn comment_for(relation: TenGod) -> &'static str {
    match relation {
        TenGod::Peer => "친구와 협력하거나 경쟁할 일이 생길 수 있습니다.",
        TenGod::Rival => "의외의 지출 조심! 하지만 경쟁심이 불타오르는 날입니다.",
        TenGod::Eater => "맛있는 음식과 즐거운 대화가 따르는 날입니다.",
        TenGod::Hurter => "톡톡 튀는 아이디어가 샘솟지만, 말실수는 조심하세요.",
        TenGod::IndirectWealth => "뜻밖의 횡재수나 재미있는 일이 생길 수 있습니다!",
        TenGod::DirectWealth => "성실하게 일한 만큼 확실한 보상이 따르는 날입니다.",
        TenGod::IndirectOfficer => "책임감이 필요한 날. 조금 바쁘더라도 명예가 따릅니다.",
        TenGod::DirectOfficer => "규칙을 지키고 순리대로 풀리는 안정적인 날입니다.",
        TenGod::IndirectResource => "독창적인 생각이 떠오르거나 깊은 고민에 빠질 수 있습니다.",
        TenGod::DirectResource => "나를 도와주는 귀인을 만나거나 칭찬을 받을 수 있습니다.",
        TenGod::DayMaster => DEFAULT_COMMENT,
    }
}

/// A reading for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFortune {
    /// Civil date, `Y.M.D` without padding.
    pub date: String,
    pub pillar: Pillar,
    /// Today's stem relative to the day master.
    pub ten_god: TenGod,
    pub comment: String,
    pub lucky: bool,
    /// Whether today's branch opposes the natal day branch.
    pub clash: bool,
}

/// Compose the reading from today's pillar.
pub fn compose_daily_fortune(
    day_master: Stem,
    day_branch: Branch,
    today: Pillar,
    now: NaiveDateTime,
) -> Result<DailyFortune, SajuError> {
    let relation = ten_god(day_master, today.stem())?;
    let clash = day_branch.clashes_with(today.branch());
    let (comment, lucky) = if clash {
        (CLASH_COMMENT, false)
    } else {
        (comment_for(relation), LUCKY_TEN_GODS.contains(&relation))
    };

    Ok(DailyFortune {
        date: format!("{}.{}.{}", now.year(), now.month(), now.day()),
        pillar: today,
        ten_god: relation,
        comment: comment.to_string(),
        lucky,
        clash,
    })
}

/// Reading for the day containing `now`, with today's pillar from the oracle.
pub fn daily_fortune<O: CalendarOracle + ?Sized>(
    oracle: &O,
    day_master: Stem,
    day_branch: Branch,
    now: NaiveDateTime,
) -> Result<DailyFortune, SajuError> {
    let reading = oracle.eight_char(now)?;
    let today = Pillar::from_chars(reading.day.stem, reading.day.branch)?;
    compose_daily_fortune(day_master, day_branch, today, now)
}
