use super::domain::{
    EstimateReport, EstimateRequest, ImpactProjection, PeriodType, RegionProfile, Scenario,
};

/// Multipliers and rates behind the projections, with the canonical
/// estimation constants as defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    pub impact_multiplier: f64,
    pub severe_impact_multiplier: f64,
    pub doubling_period_days: f64,
    pub severe_case_rate: f64,
    pub bed_availability_rate: f64,
    pub icu_case_rate: f64,
    pub ventilator_case_rate: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            impact_multiplier: 10.0,
            severe_impact_multiplier: 50.0,
            doubling_period_days: 3.0,
            severe_case_rate: 0.15,
            bed_availability_rate: 0.35,
            icu_case_rate: 0.05,
            ventilator_case_rate: 0.02,
        }
    }
}

impl EstimatorConfig {
    pub fn infection_multiplier(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Impact => self.impact_multiplier,
            Scenario::SevereImpact => self.severe_impact_multiplier,
        }
    }
}

/// Arithmetic rejections. Both surface to callers as bad-request errors;
/// no projected figure ever serializes as a non-finite or range-clamped
/// value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("timeToElapse must be a positive number, got {0}")]
    InvalidTimeToElapse(f64),
    #[error("projected figures exceed the representable numeric range")]
    ProjectionOverflow,
}

/// Pure projection engine. No shared state; safe to call concurrently.
#[derive(Debug, Clone, Default)]
pub struct EstimatorEngine {
    config: EstimatorConfig,
}

impl EstimatorEngine {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Runs the full estimate: both scenario blocks plus the echoed input.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateReport, EstimateError> {
        let time = request.time_to_elapse;
        if !time.is_finite() || time <= 0.0 {
            return Err(EstimateError::InvalidTimeToElapse(time));
        }

        Ok(EstimateReport {
            data: request.clone(),
            impact: self.project(Scenario::Impact, request)?,
            severe_impact: self.project(Scenario::SevereImpact, request)?,
        })
    }

    /// People estimated to carry the infection at report time.
    pub fn currently_infected(&self, scenario: Scenario, reported_cases: u64) -> f64 {
        reported_cases as f64 * self.config.infection_multiplier(scenario)
    }

    /// Whole doublings that fit in the elapsed period, one per doubling
    /// interval of days.
    pub fn doubling_factor(&self, period: PeriodType, time_to_elapse: f64) -> i32 {
        let days = time_to_elapse * period.days_per_unit();
        (days / self.config.doubling_period_days).floor() as i32
    }

    /// Bed capacity left for severe cases; a negative figure signals the
    /// shortfall once expected availability is exhausted.
    pub fn hospital_beds_by_requested_time(
        &self,
        total_hospital_beds: u64,
        severe_cases: f64,
    ) -> Result<i64, EstimateError> {
        let expected_beds = self.config.bed_availability_rate * total_hospital_beds as f64;
        if severe_cases > expected_beds {
            floor_to_i64(expected_beds - severe_cases)
        } else {
            floor_to_i64(expected_beds)
        }
    }

    fn project(
        &self,
        scenario: Scenario,
        request: &EstimateRequest,
    ) -> Result<ImpactProjection, EstimateError> {
        let period = request.period();
        let currently_infected = self.currently_infected(scenario, request.reported_cases);
        let factor = self.doubling_factor(period, request.time_to_elapse);
        let infections = currently_infected * 2f64.powi(factor);
        if !infections.is_finite() {
            return Err(EstimateError::ProjectionOverflow);
        }

        let severe_cases = self.config.severe_case_rate * infections;
        let dollars_in_flight =
            self.dollars_in_flight(&request.region, period, request.time_to_elapse, infections)?;

        Ok(ImpactProjection {
            currently_infected,
            infections_by_requested_time: infections,
            severe_cases_by_requested_time: severe_cases,
            hospital_beds_by_requested_time: self
                .hospital_beds_by_requested_time(request.total_hospital_beds, severe_cases)?,
            cases_for_icu_by_requested_time: floor_to_i64(self.config.icu_case_rate * infections)?,
            cases_for_ventilators_by_requested_time: floor_to_i64(
                self.config.ventilator_case_rate * infections,
            )?,
            dollars_in_flight,
        })
    }

    /// Economic loss over the period. The day-normalized divisor keeps its
    /// fractional part; only the final quotient is floored.
    fn dollars_in_flight(
        &self,
        region: &RegionProfile,
        period: PeriodType,
        time_to_elapse: f64,
        infections: f64,
    ) -> Result<i64, EstimateError> {
        let normalized_period = time_to_elapse * period.days_per_unit();
        let loss = infections * region.avg_daily_income_population * region.avg_daily_income_in_usd
            / normalized_period;
        floor_to_i64(loss)
    }
}

/// Floors to the exact integer the report carries, rejecting values the
/// `i64` cast cannot represent.
fn floor_to_i64(value: f64) -> Result<i64, EstimateError> {
    let floored = value.floor();
    // i64::MAX rounds up to 2^63 as f64, so `>=` excludes every float
    // beyond the cast's exact range.
    if !floored.is_finite() || floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(EstimateError::ProjectionOverflow);
    }
    Ok(floored as i64)
}
