//! Golden charts for pillar derivation.

use saju_base::{
    Chart, EarthlyBranch, Element, FiveElementProfile, HeavenlyStem, Pillar, SajuError, TenGod,
    day_pillar, five_elements, hour_pillar, month_pillar, ten_gods_for_chart, year_pillar,
};
use saju_time::CalendarError;

fn pillar(stem: HeavenlyStem, branch: EarthlyBranch) -> Pillar {
    Pillar::new(stem, branch)
}

/// 1984-02-04 00h: the epoch year, on the 입춘 boundary.
#[test]
fn chart_1984_02_04_midnight() {
    let chart = Chart::compute(1984, 2, 4, 0).unwrap();
    assert_eq!(chart.year, pillar(HeavenlyStem::Gap, EarthlyBranch::Ja));
    assert_eq!(chart.month, pillar(HeavenlyStem::Byeong, EarthlyBranch::In));
    assert_eq!(chart.day, pillar(HeavenlyStem::Mu, EarthlyBranch::O));
    assert_eq!(chart.hour, pillar(HeavenlyStem::Im, EarthlyBranch::Ja));
    assert_eq!(chart.day_master, HeavenlyStem::Mu);
    assert_eq!(chart.year.to_string(), "갑자(甲子)");

    let gods = ten_gods_for_chart(&chart);
    assert_eq!(gods.primary, TenGod::Jeonggwan);
    assert_eq!(gods.secondary, Some(TenGod::Jeongin));
    assert_eq!(gods.total(), 3);

    let elements: FiveElementProfile = five_elements(&chart.pillars()).unwrap();
    assert_eq!(elements.strongest, Element::Water);
    assert_eq!(elements.weakest, Element::Metal);
    assert_eq!(elements.balance, 0.0);
}

#[test]
fn day_pillars_from_1900_epoch() {
    let cases = [
        ((1900, 1, 1), HeavenlyStem::Gap, EarthlyBranch::Ja),
        ((2000, 1, 1), HeavenlyStem::Mu, EarthlyBranch::Sin),
        ((1990, 5, 15), HeavenlyStem::Gyeong, EarthlyBranch::O),
        ((2024, 2, 29), HeavenlyStem::Gye, EarthlyBranch::Chuk),
        ((1900, 3, 1), HeavenlyStem::Gye, EarthlyBranch::Hae),
        ((1899, 12, 31), HeavenlyStem::Gye, EarthlyBranch::Hae),
    ];
    for ((y, m, d), stem, branch) in cases {
        assert_eq!(day_pillar(y, m, d).unwrap(), pillar(stem, branch), "{y}-{m}-{d}");
    }
}

#[test]
fn year_pillars_around_epoch() {
    assert_eq!(year_pillar(1983), pillar(HeavenlyStem::Gye, EarthlyBranch::Hae));
    assert_eq!(year_pillar(2024), pillar(HeavenlyStem::Gap, EarthlyBranch::Jin));
    assert_eq!(year_pillar(1924), year_pillar(1984));
}

#[test]
fn month_shift_before_sixth() {
    // 1984-03-05 still counts as month 2.
    assert_eq!(month_pillar(1984, 3, 5).unwrap(), month_pillar(1984, 2, 20).unwrap());
    assert_ne!(month_pillar(1984, 3, 6).unwrap(), month_pillar(1984, 3, 5).unwrap());
}

#[test]
fn hour_23_and_0_share_branch() {
    let late = hour_pillar(HeavenlyStem::Gap, 23).unwrap();
    let early = hour_pillar(HeavenlyStem::Gap, 0).unwrap();
    assert_eq!(late.branch, EarthlyBranch::Ja);
    assert_eq!(late, early);
}

#[test]
fn invalid_inputs_rejected() {
    assert_eq!(
        Chart::compute(1999, 2, 29, 12),
        Err(SajuError::InvalidInput(CalendarError::DayOutOfRange {
            year: 1999,
            month: 2,
            day: 29
        }))
    );
    assert_eq!(
        Chart::compute(2000, 13, 1, 12),
        Err(SajuError::InvalidInput(CalendarError::MonthOutOfRange(13)))
    );
    assert_eq!(
        hour_pillar(HeavenlyStem::Gap, 24),
        Err(SajuError::InvalidInput(CalendarError::HourOutOfRange(24)))
    );
}
