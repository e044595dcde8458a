use serde::{Deserialize, Serialize};

/// Region covered by an estimate, with the income figures the economic
/// projection needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub name: String,
    pub avg_daily_income_population: f64,
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: f64,
}

/// Typed form of the estimator input payload after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub region: RegionProfile,
    pub period_type: String,
    pub time_to_elapse: f64,
    pub reported_cases: u64,
    pub population: u64,
    pub total_hospital_beds: u64,
}

impl EstimateRequest {
    /// The declared period unit. Unrecognized text falls back to days.
    pub fn period(&self) -> PeriodType {
        PeriodType::parse(&self.period_type)
    }
}

/// Unit of elapsed time for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodType {
    Days,
    Weeks,
    Months,
}

impl PeriodType {
    /// Matches the wire values exactly; anything else means days.
    pub fn parse(value: &str) -> Self {
        match value {
            "weeks" => Self::Weeks,
            "months" => Self::Months,
            _ => Self::Days,
        }
    }

    pub const fn days_per_unit(self) -> f64 {
        match self {
            PeriodType::Days => 1.0,
            PeriodType::Weeks => 7.0,
            PeriodType::Months => 30.0,
        }
    }
}

/// Selects which infection multiplier seeds a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Impact,
    SevereImpact,
}

/// One projection block of the estimate report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactProjection {
    pub currently_infected: f64,
    pub infections_by_requested_time: f64,
    pub severe_cases_by_requested_time: f64,
    pub hospital_beds_by_requested_time: i64,
    #[serde(rename = "casesForICUByRequestedTime")]
    pub cases_for_icu_by_requested_time: i64,
    pub cases_for_ventilators_by_requested_time: i64,
    pub dollars_in_flight: i64,
}

/// Full estimate: the echoed input plus best-case and worst-case blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub data: EstimateRequest,
    pub impact: ImpactProjection,
    pub severe_impact: ImpactProjection,
}
