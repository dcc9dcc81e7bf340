//! Integration tests for luck-cycle timelines.

use saju_base::{
    BirthInput, Chart, Direction, EarthlyBranch, Gender, HeavenlyStem, Pillar, SajuError, TenGod,
    luck_timeline,
};

fn chart_1984() -> Chart {
    Chart::from_birth(&BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap())
}

/// 갑 year is yang: male runs forward from 병인.
#[test]
fn male_yang_year_runs_forward() {
    let tl = luck_timeline(&chart_1984(), Gender::Male);
    assert_eq!(tl.direction, Direction::Forward);
    assert_eq!(tl.cycles[0].pillar, Pillar::new(HeavenlyStem::Byeong, EarthlyBranch::In));
    assert_eq!(tl.cycles[0].ten_god, TenGod::Jeongin);
    assert_eq!(tl.cycles[3].pillar, Pillar::new(HeavenlyStem::Gi, EarthlyBranch::Sa));
    assert_eq!(tl.cycles[3].ten_god, TenGod::Geopjae);
}

#[test]
fn female_yang_year_runs_backward() {
    let tl = luck_timeline(&chart_1984(), Gender::Female);
    assert_eq!(tl.direction, Direction::Backward);
    assert_eq!(tl.cycles[2].pillar, Pillar::new(HeavenlyStem::Gap, EarthlyBranch::Ja));
    assert!(tl.iter().all(|c| c.direction == Direction::Backward));
}

#[test]
fn ranges_cover_zero_to_ninety_nine() {
    for gender in [Gender::Male, Gender::Female] {
        let tl = luck_timeline(&chart_1984(), gender);
        let mut next = 0;
        for c in tl.iter() {
            assert_eq!(c.age_range.start, next);
            assert_eq!(c.age_range.end, next + 9);
            next += 10;
        }
        assert_eq!(next, 100);
    }
}

#[test]
fn current_cycle_lookup() {
    let tl = luck_timeline(&chart_1984(), Gender::Male);
    let c = tl.current_for_year(1984, 2024).unwrap();
    assert_eq!(c.age_range.start, 40);
    assert_eq!(tl.current(100), Err(SajuError::NotFound { age: 100 }));
    assert_eq!(
        tl.current_for_year(1984, 2084),
        Err(SajuError::NotFound { age: 100 })
    );
}
