//! Peer benchmarking: percentile ranks and averages against a peer set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::PeerStats;
use crate::error::CoreError;

/// How the peer set is selected. Defaults to role when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonType {
    Department,
    Role,
    Level,
    Company,
}

impl ComparisonType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Role => "role",
            Self::Level => "level",
            Self::Company => "company",
        }
    }
}

impl Default for ComparisonType {
    fn default() -> Self {
        Self::Role
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "department" => Ok(Self::Department),
            "role" => Ok(Self::Role),
            "level" => Ok(Self::Level),
            "company" => Ok(Self::Company),
            other => Err(CoreError::Validation(format!(
                "Unknown comparison type: {other}"
            ))),
        }
    }
}

/// Result of [`benchmark`].
#[derive(Debug, Clone, Serialize)]
pub struct PeerBenchmarks {
    pub comparison_type: String,
    pub peer_count: usize,
    pub user_xp_percentile: i32,
    pub user_streak_percentile: i32,
    pub average_peer_xp: i32,
    pub average_peer_streak: i32,
    pub top_performer_xp: i32,
    pub performance_rating: String,
    pub improvement_opportunities: Vec<String>,
}

/// Percentile of `value` within `peers`: share of peers strictly below it.
fn percentile(value: i32, peers: &[i32]) -> i32 {
    if peers.is_empty() {
        return 100;
    }
    let below = peers.iter().filter(|&&p| p < value).count();
    ((below as f64 / peers.len() as f64) * 100.0).round() as i32
}

fn average(values: &[i32]) -> i32 {
    if values.is_empty() {
        return 0;
    }
    let total: i64 = values.iter().map(|&v| v as i64).sum();
    (total as f64 / values.len() as f64).round() as i32
}

/// Benchmark the caller against an already-selected peer set.
///
/// The peer set must exclude the caller; selection by role/department/level/
/// company happens at the query layer.
pub fn benchmark(
    comparison_type: ComparisonType,
    user_xp: i32,
    user_streak: i32,
    peers: &[PeerStats],
) -> PeerBenchmarks {
    let peer_xp: Vec<i32> = peers.iter().map(|p| p.current_xp).collect();
    let peer_streaks: Vec<i32> = peers.iter().map(|p| p.streak_days).collect();

    let xp_percentile = percentile(user_xp, &peer_xp);
    let streak_percentile = percentile(user_streak, &peer_streaks);

    let performance_rating = if peers.is_empty() {
        "No peer data available".to_string()
    } else if xp_percentile >= 75 {
        "Top performer".to_string()
    } else if xp_percentile >= 50 {
        "Above average".to_string()
    } else if xp_percentile >= 25 {
        "On track".to_string()
    } else {
        "Needs momentum".to_string()
    };

    let mut improvement_opportunities = Vec::new();
    if !peers.is_empty() {
        if xp_percentile < 50 {
            improvement_opportunities
                .push("Complete more high-point tasks to close the XP gap with peers".to_string());
        }
        if streak_percentile < 50 {
            improvement_opportunities
                .push("Build a daily habit to improve your streak ranking".to_string());
        }
    }

    PeerBenchmarks {
        comparison_type: comparison_type.to_string(),
        peer_count: peers.len(),
        user_xp_percentile: xp_percentile,
        user_streak_percentile: streak_percentile,
        average_peer_xp: average(&peer_xp),
        average_peer_streak: average(&peer_streaks),
        top_performer_xp: peer_xp.iter().copied().max().unwrap_or(0),
        performance_rating,
        improvement_opportunities,
    }
}
