//! Performance KPIs and historical competency scores.

use serde::{Deserialize, Serialize};

/// Completion percentages above this are shown as-is but capped.
const MAX_COMPLETION_PERCENT: u32 = 999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// e.g. "2024-05"
    pub month: String,
    pub value: f64,
}

/// A headline performance metric with its monthly trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub target: f64,
    pub unit: String,
    pub trend: Vec<MonthlyPoint>,
}

impl Kpi {
    /// Progress toward target as a whole percentage. A zero target reports 0.
    pub fn completion_percent(&self) -> u32 {
        if self.target <= 0.0 {
            return 0;
        }
        let pct = (self.value / self.target * 100.0).round();
        if pct <= 0.0 {
            0
        } else {
            (pct as u32).min(MAX_COMPLETION_PERCENT)
        }
    }

    /// Largest value in the trend, used to scale the bar chart.
    pub fn trend_peak(&self) -> f64 {
        self.trend.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// A KPI with the figures the dashboard cards display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    #[serde(flatten)]
    pub kpi: Kpi,
    pub completion_percent: u32,
    pub trend_peak: f64,
}

impl From<Kpi> for KpiCard {
    fn from(kpi: Kpi) -> Self {
        Self {
            completion_percent: kpi.completion_percent(),
            trend_peak: kpi.trend_peak(),
            kpi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub dimension: String,
    /// 0-100
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencySnapshot {
    /// e.g. "2024 Q2"
    pub period: String,
    pub scores: Vec<CompetencyScore>,
}

impl CompetencySnapshot {
    fn score_of(&self, dimension: &str) -> Option<u8> {
        self.scores
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.score)
    }
}

/// Competency snapshots, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetencyHistory {
    snapshots: Vec<CompetencySnapshot>,
}

impl CompetencyHistory {
    pub fn new(snapshots: Vec<CompetencySnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn snapshots(&self) -> &[CompetencySnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&CompetencySnapshot> {
        self.snapshots.last()
    }

    fn previous(&self) -> Option<&CompetencySnapshot> {
        let n = self.snapshots.len();
        if n < 2 {
            None
        } else {
            self.snapshots.get(n - 2)
        }
    }

    /// Latest score minus the previous period's score for one dimension.
    pub fn delta(&self, dimension: &str) -> Option<i32> {
        let latest = self.latest()?.score_of(dimension)?;
        let previous = self.previous()?.score_of(dimension)?;
        Some(latest as i32 - previous as i32)
    }

    pub fn strongest(&self) -> Option<&CompetencyScore> {
        self.latest()?.scores.iter().max_by_key(|s| s.score)
    }

    pub fn weakest(&self) -> Option<&CompetencyScore> {
        self.latest()?.scores.iter().min_by_key(|s| s.score)
    }

    /// Latest-period view with per-dimension change. `None` when empty.
    pub fn summary(&self) -> Option<CompetencySummary> {
        let latest = self.latest()?;
        Some(CompetencySummary {
            period: latest.period.clone(),
            rows: latest
                .scores
                .iter()
                .map(|s| CompetencyRow {
                    dimension: s.dimension.clone(),
                    score: s.score,
                    delta: self.delta(&s.dimension),
                })
                .collect(),
            strongest: self.strongest().map(|s| s.dimension.clone()),
            weakest: self.weakest().map(|s| s.dimension.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetencyRow {
    pub dimension: String,
    pub score: u8,
    /// Change since the previous period
    pub delta: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetencySummary {
    pub period: String,
    pub rows: Vec<CompetencyRow>,
    pub strongest: Option<String>,
    pub weakest: Option<String>,
}
