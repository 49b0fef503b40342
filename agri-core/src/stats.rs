//! Portfolio statistics shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Derived portfolio metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub carbon_credits: u32,
    pub active_loans: u32,
    pub insurance_policies: u32,
    /// Portfolio value in USD.
    pub total_value: f64,
    pub credit_score: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            carbon_credits: 0,
            active_loans: 0,
            insurance_policies: 0,
            total_value: 0.0,
            credit_score: 650,
        }
    }
}

/// Fixed baselines the store resets to.
///
/// The two presets are configuration, not a business rule: a farmer whose
/// registration is found in storage gets `ReturningFarmer`, a farmer who
/// completes registration in this session gets `NewRegistration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPreset {
    ReturningFarmer,
    NewRegistration,
}

impl StatsPreset {
    pub fn stats(self) -> Stats {
        match self {
            StatsPreset::ReturningFarmer => Stats {
                carbon_credits: 150,
                active_loans: 2,
                insurance_policies: 3,
                total_value: 12_500.0,
                credit_score: 750,
            },
            StatsPreset::NewRegistration => Stats {
                carbon_credits: 50,
                active_loans: 0,
                insurance_policies: 1,
                total_value: 2_500.0,
                credit_score: 700,
            },
        }
    }
}

/// Partial update for [`Stats`]. No range validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPatch {
    pub carbon_credits: Option<u32>,
    pub active_loans: Option<u32>,
    pub insurance_policies: Option<u32>,
    pub total_value: Option<f64>,
    pub credit_score: Option<u32>,
}

impl Stats {
    pub fn apply(&mut self, patch: StatsPatch) {
        if let Some(v) = patch.carbon_credits {
            self.carbon_credits = v;
        }
        if let Some(v) = patch.active_loans {
            self.active_loans = v;
        }
        if let Some(v) = patch.insurance_policies {
            self.insurance_policies = v;
        }
        if let Some(v) = patch.total_value {
            self.total_value = v;
        }
        if let Some(v) = patch.credit_score {
            self.credit_score = v;
        }
    }
}
