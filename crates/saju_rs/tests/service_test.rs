//! Service-level tests over the 1984-02-04 reference chart.

use saju_base::{Direction, Format, HeavenlyStem, Outlook, SajuError, SolarTerm};
use saju_rs::*;

fn input() -> BirthInput {
    BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap()
}

fn service() -> SajuService {
    SajuService::new(SajuConfig::default()).unwrap()
}

#[test]
fn default_service_is_enhanced() {
    match service().analyze(&input()).unwrap() {
        Analysis::Enhanced(r) => {
            assert_eq!(r.reading.chart.day_master, HeavenlyStem::Mu);
            assert_eq!(r.month.governing_term, SolarTerm::Ipchun);
            assert_eq!(r.luck.direction, Direction::Forward);
            assert_eq!(r.format, Format::Jeongin);
        }
        other => panic!("expected enhanced analysis, got {other:?}"),
    }
}

#[test]
fn basic_level_skips_enhancement() {
    let mut config = SajuConfig::default();
    config.analysis.level = AnalysisLevel::Basic;
    let service = SajuService::new(config).unwrap();
    let a = service.analyze(&input()).unwrap();
    assert!(matches!(a, Analysis::Basic(_)));
    assert!(!a.is_degraded());
    assert_eq!(a.reading().chart, service.chart(&input()));
}

#[test]
fn invalid_config_rejected_at_construction() {
    let mut config = SajuConfig::default();
    config.forecast.offsets.clear();
    assert!(matches!(SajuService::new(config), Err(ServiceError::Config(_))));
}

#[test]
fn scores_use_configured_salt() {
    let s = service();
    assert_eq!(s.fortune_scores(&input()).unwrap().overall, 90);

    let mut config = SajuConfig::default();
    config.scoring.identity_salt = 42;
    let salted = SajuService::new(config).unwrap();
    assert_eq!(salted.fortune_scores(&input()).unwrap().overall, 78);
    assert_eq!(
        salted.fortune_scores(&input()).unwrap(),
        s.fortune_scores_for(&input(), 42).unwrap()
    );
}

#[test]
fn forecasts_follow_configured_offsets() {
    let mut config = SajuConfig::default();
    config.forecast.offsets = vec![0, 5];
    let s = SajuService::new(config).unwrap();
    let f = s.period_forecasts(&input(), 2024).unwrap();
    assert_eq!(f.len(), 2);
    assert_eq!(f[1].year, 2029);
    assert_eq!(f[1].outlook, Outlook::Stable);
}

#[test]
fn current_luck_and_errors() {
    let s = service();
    let c = s.current_luck(&input(), 2024).unwrap();
    assert_eq!(c.age_range.start, 40);
    let err = s.current_luck(&input(), 1980).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Chart(SajuError::AgeBeforeBirth { .. })
    ));
}

#[test]
fn readings_serialize_to_json() {
    let r = service().enhanced_reading(&input()).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["reading"]["input"]["gender"], "male");
    assert_eq!(json["reading"]["season"], "winter");
    assert_eq!(json["luck"]["direction"], "forward");
    assert_eq!(json["format"], "jeongin");
    assert_eq!(json["month"]["depth"], "early");
}
