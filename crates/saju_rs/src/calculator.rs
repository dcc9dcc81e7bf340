//! Basic and enhanced chart calculators.

use saju_base::{
    BirthInput, Chart, FiveElementProfile, Format, LuckTimeline, MonthDepth, SajuError, Season,
    SolarTerm, TenGodProfile, Vitality, YongsinGisin, YongsinTable, chart_format, five_elements,
    governing_term_date, luck_timeline, ten_gods_for_chart, vitality,
};
use saju_time::CivilDate;
use serde::{Deserialize, Serialize};

/// Computes one kind of reading from a birth input.
pub trait ChartCalculator {
    type Output;

    fn calculate(&self, input: &BirthInput) -> Result<Self::Output, SajuError>;
}

/// Pillars and the analyses derived directly from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub input: BirthInput,
    pub chart: Chart,
    pub ten_gods: TenGodProfile,
    pub five_elements: FiveElementProfile,
    /// Calendar season of the birth month.
    pub season: Season,
    pub yongsin_gisin: YongsinGisin,
}

/// Calculator for [`Reading`]s, holding a validated yongsin/gisin table.
#[derive(Debug, Clone)]
pub struct BasicCalculator {
    table: YongsinTable,
}

impl BasicCalculator {
    /// Calculator over the standard table.
    pub fn new() -> Result<Self, SajuError> {
        Ok(Self::with_table(YongsinTable::standard()?))
    }

    pub fn with_table(table: YongsinTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &YongsinTable {
        &self.table
    }
}

impl ChartCalculator for BasicCalculator {
    type Output = Reading;

    fn calculate(&self, input: &BirthInput) -> Result<Reading, SajuError> {
        let chart = Chart::from_birth(input);
        let ten_gods = ten_gods_for_chart(&chart);
        let five_elements = five_elements(&chart.pillars())?;
        let season = Season::from_month(input.month());
        let yongsin_gisin = self.table.lookup(chart.day_master.element(), season)?;
        Ok(Reading {
            input: *input,
            chart,
            ten_gods,
            five_elements,
            season,
            yongsin_gisin,
        })
    }
}

/// Where a birth date sits relative to the solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInfo {
    pub governing_term: SolarTerm,
    /// Most recent occurrence of the governing term.
    pub term_date: CivilDate,
    pub term_season: Season,
    pub depth: MonthDepth,
    /// Vitality of the day master's element in the term season.
    pub day_master_vitality: Vitality,
}

impl MonthInfo {
    pub fn for_reading(reading: &Reading) -> Result<Self, SajuError> {
        let date = reading.input.date;
        let (term, term_date) =
            governing_term_date(&date).ok_or(SajuError::NoGoverningTerm(date))?;
        let term_season = term.season();
        Ok(Self {
            governing_term: term,
            term_date,
            term_season,
            depth: MonthDepth::from_days_since_term(term_date.days_until(&date)),
            day_master_vitality: vitality(reading.chart.day_master.element(), term_season),
        })
    }
}

/// A basic reading extended with month information, luck cycles, and format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedReading {
    pub reading: Reading,
    pub month: MonthInfo,
    pub luck: LuckTimeline,
    pub format: Format,
}

/// Wraps a basic calculator and extends its output.
#[derive(Debug, Clone)]
pub struct EnhancedCalculator<C> {
    inner: C,
}

impl<C> EnhancedCalculator<C>
where
    C: ChartCalculator<Output = Reading>,
{
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C> ChartCalculator for EnhancedCalculator<C>
where
    C: ChartCalculator<Output = Reading>,
{
    type Output = EnhancedReading;

    fn calculate(&self, input: &BirthInput) -> Result<EnhancedReading, SajuError> {
        let reading = self.inner.calculate(input)?;
        let month = MonthInfo::for_reading(&reading)?;
        let luck = luck_timeline(&reading.chart, input.gender);
        let format = chart_format(&reading.ten_gods);
        Ok(EnhancedReading {
            reading,
            month,
            luck,
            format,
        })
    }
}

/// Outcome of an analysis. A degraded result always carries the error that
/// stopped the enhanced calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Basic(Reading),
    Enhanced(Box<EnhancedReading>),
    Degraded { reading: Reading, cause: SajuError },
}

impl Analysis {
    /// The basic reading contained in any outcome.
    pub fn reading(&self) -> &Reading {
        match self {
            Self::Basic(r) => r,
            Self::Enhanced(e) => &e.reading,
            Self::Degraded { reading, .. } => reading,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Run `enhanced`; on failure either return the error or, when
/// `fallback_to_basic` is set, a degraded result from `basic`.
pub fn analyze_with<B, E>(
    basic: &B,
    enhanced: &E,
    fallback_to_basic: bool,
    input: &BirthInput,
) -> Result<Analysis, SajuError>
where
    B: ChartCalculator<Output = Reading>,
    E: ChartCalculator<Output = EnhancedReading>,
{
    match enhanced.calculate(input) {
        Ok(r) => Ok(Analysis::Enhanced(Box::new(r))),
        Err(cause) if fallback_to_basic => {
            tracing::warn!(
                date = %input.date,
                error = %cause,
                "enhanced analysis failed, using basic"
            );
            let reading = basic.calculate(input)?;
            Ok(Analysis::Degraded { reading, cause })
        }
        Err(cause) => Err(cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{Element, Gender, TenGod};

    fn input() -> BirthInput {
        BirthInput::new(1984, 2, 4, 0, Gender::Male).unwrap()
    }

    struct Failing;

    impl ChartCalculator for Failing {
        type Output = EnhancedReading;

        fn calculate(&self, input: &BirthInput) -> Result<EnhancedReading, SajuError> {
            Err(SajuError::NoGoverningTerm(input.date))
        }
    }

    #[test]
    fn basic_reading() {
        let r = BasicCalculator::new().unwrap().calculate(&input()).unwrap();
        assert_eq!(r.ten_gods.primary, TenGod::Jeonggwan);
        assert_eq!(r.season, Season::Winter);
        assert_eq!(r.yongsin_gisin.yongsin, Element::Fire);
        assert_eq!(r.yongsin_gisin.gisin, Element::Wood);
    }

    #[test]
    fn enhanced_wraps_basic() {
        let basic = BasicCalculator::new().unwrap();
        let e = EnhancedCalculator::new(basic.clone()).calculate(&input()).unwrap();
        assert_eq!(e.reading, basic.calculate(&input()).unwrap());
        assert_eq!(e.month.governing_term, SolarTerm::Ipchun);
        assert_eq!(e.month.term_season, Season::Spring);
        assert_eq!(e.month.depth, MonthDepth::Early);
        // earth in spring
        assert_eq!(e.month.day_master_vitality, Vitality::Resting);
        assert_eq!(e.format, Format::Jeongin);
    }

    #[test]
    fn fallback_is_marked_degraded() {
        let basic = BasicCalculator::new().unwrap();
        let a = analyze_with(&basic, &Failing, true, &input()).unwrap();
        assert!(a.is_degraded());
        match a {
            Analysis::Degraded { cause, reading } => {
                assert_eq!(cause, SajuError::NoGoverningTerm(input().date));
                assert_eq!(reading.chart.day_master, saju_base::HeavenlyStem::Mu);
            }
            other => panic!("expected degraded, got {other:?}"),
        }
    }

    #[test]
    fn no_fallback_propagates() {
        let basic = BasicCalculator::new().unwrap();
        let err = analyze_with(&basic, &Failing, false, &input()).unwrap_err();
        assert!(matches!(err, SajuError::NoGoverningTerm(_)));
    }
}
