//! Golden fortune scores and period forecasts.

use saju_base::{
    ALL_SCORE_CATEGORIES, BirthInput, Chart, DEFAULT_FORECAST_OFFSETS, FortuneScores, Gender,
    Outlook, PeriodRating, ScoreSeed, five_elements, fortune_score, fortune_scores,
    period_forecasts,
};

fn input() -> BirthInput {
    BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap()
}

#[test]
fn scores_1984_02_04() {
    let chart = Chart::from_birth(&input());
    let elements = five_elements(&chart.pillars()).unwrap();
    let scores = fortune_scores(&chart, &elements, 0);
    assert_eq!(
        scores,
        FortuneScores {
            overall: 90,
            love: 82,
            career: 92,
            // 89 plus the 무 health bonus
            health: 91,
            wealth: 77,
        }
    );
}

#[test]
fn identity_salt_changes_scores() {
    let chart = Chart::from_birth(&input());
    let elements = five_elements(&chart.pillars()).unwrap();
    let scores = fortune_scores(&chart, &elements, 42);
    assert_eq!(
        scores,
        FortuneScores {
            overall: 78,
            love: 90,
            career: 83,
            health: 77,
            wealth: 83,
        }
    );
}

#[test]
fn balanced_chart_earns_bonus() {
    // 경오 무진 계해 갑오: 17/17/25/17/25 percent, balance 68
    let input = BirthInput::new(1990, 3, 9, 12, Gender::Female).unwrap();
    let chart = Chart::from_birth(&input);
    assert_eq!(
        [chart.year, chart.month, chart.day, chart.hour].map(|p| p.korean()),
        ["경오", "무진", "계해", "갑오"]
    );
    let elements = five_elements(&chart.pillars()).unwrap();
    assert_eq!(elements.balance_score(), 68);

    let seed = ScoreSeed::from_chart(&chart);
    assert_eq!(seed, ScoreSeed(10172));
    let scores = fortune_scores(&chart, &elements, 0);
    assert_eq!(
        scores,
        FortuneScores {
            overall: 88,
            love: 73,
            career: 82,
            health: 90,
            wealth: 87,
        }
    );
    for c in ALL_SCORE_CATEGORIES {
        let unbalanced = fortune_score(c, seed, chart.day_master, 0);
        assert_eq!(scores.get(c), unbalanced + 1, "{c:?}");
    }
}

#[test]
fn scores_are_repeatable() {
    let chart = Chart::from_birth(&input());
    let elements = five_elements(&chart.pillars()).unwrap();
    let a = fortune_scores(&chart, &elements, 7);
    let b = fortune_scores(&chart, &elements, 7);
    assert_eq!(a, b);
    for c in ALL_SCORE_CATEGORIES {
        assert!(a.get(c) <= c.max_score());
    }
}

#[test]
fn forecasts_1984_02_04() {
    use PeriodRating::*;
    let chart = Chart::from_birth(&input());
    let f = period_forecasts(chart.day_master, &input(), 2024, &DEFAULT_FORECAST_OFFSETS).unwrap();

    let ratings: Vec<[PeriodRating; 4]> = f
        .iter()
        .map(|p| [p.career, p.wealth, p.love, p.health])
        .collect();
    assert_eq!(
        ratings,
        vec![
            [Steady, Caution, Favorable, Steady],
            [Caution, Favorable, Favorable, Steady],
            [Favorable, Steady, Caution, Favorable],
            [Caution, Favorable, Steady, Caution],
            [Steady, Caution, Favorable, Steady],
        ]
    );
    assert_eq!(f[0].outlook, Outlook::VeryFavorable);
    assert_eq!(f[3].outlook, Outlook::Stable);
    assert_eq!(f[2].age, 44);
}
