//! The chart service: calculators plus the configuration that drives them.

use saju_base::{
    BirthInput, Chart, FortuneScores, LuckCycle, LuckTimeline, PeriodForecast, five_elements,
    fortune_scores, luck_timeline, period_forecasts,
};
use saju_config::{AnalysisLevel, SajuConfig};

use crate::calculator::{
    Analysis, BasicCalculator, ChartCalculator, EnhancedCalculator, EnhancedReading, Reading,
    analyze_with,
};
use crate::error::ServiceError;

/// Chart service constructed once from a configuration.
#[derive(Debug, Clone)]
pub struct SajuService {
    config: SajuConfig,
    basic: BasicCalculator,
    enhanced: EnhancedCalculator<BasicCalculator>,
}

impl SajuService {
    /// Validate `config` and the yongsin/gisin table, then build the calculators.
    pub fn new(config: SajuConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        let basic = BasicCalculator::new()?;
        let enhanced = EnhancedCalculator::new(basic.clone());
        tracing::debug!(
            level = ?config.analysis.level,
            fallback = config.analysis.fallback_to_basic,
            "saju service ready"
        );
        Ok(Self {
            config,
            basic,
            enhanced,
        })
    }

    pub fn config(&self) -> &SajuConfig {
        &self.config
    }

    pub fn chart(&self, input: &BirthInput) -> Chart {
        Chart::from_birth(input)
    }

    pub fn reading(&self, input: &BirthInput) -> Result<Reading, ServiceError> {
        Ok(self.basic.calculate(input)?)
    }

    pub fn enhanced_reading(&self, input: &BirthInput) -> Result<EnhancedReading, ServiceError> {
        Ok(self.enhanced.calculate(input)?)
    }

    /// Analysis at the configured level. With fallback enabled, a failed
    /// enhanced calculation yields [`Analysis::Degraded`].
    pub fn analyze(&self, input: &BirthInput) -> Result<Analysis, ServiceError> {
        let analysis = match self.config.analysis.level {
            AnalysisLevel::Basic => Analysis::Basic(self.basic.calculate(input)?),
            AnalysisLevel::Enhanced => analyze_with(
                &self.basic,
                &self.enhanced,
                self.config.analysis.fallback_to_basic,
                input,
            )?,
        };
        Ok(analysis)
    }

    pub fn luck_timeline(&self, input: &BirthInput) -> LuckTimeline {
        luck_timeline(&Chart::from_birth(input), input.gender)
    }

    /// Luck cycle in effect during `as_of_year`.
    pub fn current_luck(
        &self,
        input: &BirthInput,
        as_of_year: i32,
    ) -> Result<LuckCycle, ServiceError> {
        let timeline = self.luck_timeline(input);
        Ok(*timeline.current_for_year(input.year(), as_of_year)?)
    }

    /// Fortune scores salted with the configured identity.
    pub fn fortune_scores(&self, input: &BirthInput) -> Result<FortuneScores, ServiceError> {
        self.fortune_scores_for(input, self.config.scoring.identity_salt)
    }

    pub fn fortune_scores_for(
        &self,
        input: &BirthInput,
        identity_salt: u32,
    ) -> Result<FortuneScores, ServiceError> {
        let chart = Chart::from_birth(input);
        let elements = five_elements(&chart.pillars())?;
        Ok(fortune_scores(&chart, &elements, identity_salt))
    }

    /// Forecasts at the configured offsets from `as_of_year`.
    pub fn period_forecasts(
        &self,
        input: &BirthInput,
        as_of_year: i32,
    ) -> Result<Vec<PeriodForecast>, ServiceError> {
        let chart = Chart::from_birth(input);
        Ok(period_forecasts(
            chart.day_master,
            input,
            as_of_year,
            &self.config.forecast.offsets,
        )?)
    }
}
