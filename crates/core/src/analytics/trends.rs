//! Performance-trend analysis over a recent window of tasks.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::{percentage, TaskSnapshot};
use crate::tasks::TaskStatus;
use crate::types::Timestamp;

/// Window applied when the period string cannot be parsed.
pub const DEFAULT_PERIOD_DAYS: i64 = 30;

/// Parse a free-text period ("30 days", "2 weeks", "6 months") into days.
///
/// Unparsable input falls back to [`DEFAULT_PERIOD_DAYS`].
pub fn parse_period_to_days(period: &str) -> i64 {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*(day|week|month)").unwrap());

    let Some(caps) = pattern.captures(period) else {
        return DEFAULT_PERIOD_DAYS;
    };
    let count: i64 = caps[1].parse().unwrap_or(0);
    let multiplier = match &caps[2] {
        "day" => 1,
        "week" => 7,
        "month" => 30,
        _ => unreachable!("pattern only matches day|week|month"),
    };
    count * multiplier
}

/// Per-category completion breakdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryPerformance {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub completion_rate: i32,
}

/// Completions bucketed by week within the analysis window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklyTrend {
    /// 1-based week index from the window start.
    pub week: i64,
    pub completed: usize,
    pub xp_earned: i32,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceAnalysis {
    pub period: String,
    pub completion_rate: i32,
    pub average_completion_time_hours: i64,
    pub overdue_rate: i32,
    pub total_xp_earned: i32,
    pub category_performance: BTreeMap<String, CategoryPerformance>,
    pub weekly_trends: Vec<WeeklyTrend>,
    pub insights: Vec<String>,
}

/// Analyze tasks created within the period window.
///
/// The caller is expected to have filtered `tasks` to the window already;
/// `window_start` anchors the weekly buckets. All rates are integer-rounded
/// percentages and an empty window yields zeros, never NaN.
pub fn analyze(
    tasks: &[TaskSnapshot],
    period: &str,
    window_start: Timestamp,
    now: Timestamp,
) -> PerformanceAnalysis {
    let completed: Vec<&TaskSnapshot> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .collect();
    let overdue_count = tasks.iter().filter(|t| t.is_overdue(now)).count();

    let completion_rate = percentage(completed.len(), tasks.len());
    let overdue_rate = percentage(overdue_count, tasks.len());
    let total_xp_earned: i32 = completed.iter().map(|t| t.points).sum();

    let category_performance = analyze_by_category(tasks, now);
    let weekly_trends = weekly_trends(&completed, window_start);
    let insights = generate_insights(completion_rate, overdue_rate, &category_performance);

    PerformanceAnalysis {
        period: period.to_string(),
        completion_rate,
        average_completion_time_hours: average_completion_hours(&completed),
        overdue_rate,
        total_xp_earned,
        category_performance,
        weekly_trends,
        insights,
    }
}

/// Mean hours between creation and completion, rounded. Zero for no data.
fn average_completion_hours(completed: &[&TaskSnapshot]) -> i64 {
    let durations: Vec<i64> = completed
        .iter()
        .filter_map(|t| {
            t.completed_at
                .map(|done| (done - t.created_at).num_seconds())
        })
        .collect();
    if durations.is_empty() {
        return 0;
    }
    let total_secs: i64 = durations.iter().sum();
    ((total_secs as f64 / durations.len() as f64) / 3600.0).round() as i64
}

fn analyze_by_category(
    tasks: &[TaskSnapshot],
    now: Timestamp,
) -> BTreeMap<String, CategoryPerformance> {
    let mut categories: BTreeMap<String, CategoryPerformance> = BTreeMap::new();
    for task in tasks {
        let entry = categories
            .entry(task.category.clone())
            .or_insert(CategoryPerformance {
                total: 0,
                completed: 0,
                overdue: 0,
                completion_rate: 0,
            });
        entry.total += 1;
        if task.status == TaskStatus::Done {
            entry.completed += 1;
        }
        if task.is_overdue(now) {
            entry.overdue += 1;
        }
    }
    for perf in categories.values_mut() {
        perf.completion_rate = percentage(perf.completed, perf.total);
    }
    categories
}

fn weekly_trends(completed: &[&TaskSnapshot], window_start: Timestamp) -> Vec<WeeklyTrend> {
    let mut buckets: BTreeMap<i64, WeeklyTrend> = BTreeMap::new();
    for task in completed {
        let Some(done_at) = task.completed_at else {
            continue;
        };
        let days_in = (done_at - window_start).num_days().max(0);
        let week = days_in / 7 + 1;
        let bucket = buckets.entry(week).or_insert(WeeklyTrend {
            week,
            completed: 0,
            xp_earned: 0,
        });
        bucket.completed += 1;
        bucket.xp_earned += task.points;
    }
    buckets.into_values().collect()
}

/// Threshold-triggered textual insights.
fn generate_insights(
    completion_rate: i32,
    overdue_rate: i32,
    categories: &BTreeMap<String, CategoryPerformance>,
) -> Vec<String> {
    let mut insights = Vec::new();

    if completion_rate > 80 {
        insights.push("Excellent completion rate - you're highly productive".to_string());
    } else if completion_rate < 50 {
        insights.push("Low completion rate suggests potential time management issues".to_string());
    }

    if overdue_rate > 20 {
        insights.push("High overdue rate - consider better deadline planning".to_string());
    }

    if let Some((name, perf)) = categories
        .iter()
        .min_by_key(|(_, perf)| perf.completion_rate)
    {
        if perf.completion_rate < 60 {
            insights.push(format!("{name} tasks need attention - lowest completion rate"));
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::tasks::TaskStatus;

    fn task(status: TaskStatus, category: &str, points: i32, age_days: i64) -> TaskSnapshot {
        let now = Utc::now();
        let created = now - Duration::days(age_days);
        TaskSnapshot {
            title: "t".into(),
            category: category.into(),
            status,
            points,
            due_date: now + Duration::days(1),
            created_at: created,
            completed_at: (status == TaskStatus::Done).then(|| created + Duration::hours(6)),
        }
    }

    #[test]
    fn period_parsing_handles_days_weeks_months() {
        assert_eq!(parse_period_to_days("30 days"), 30);
        assert_eq!(parse_period_to_days("2 weeks"), 14);
        assert_eq!(parse_period_to_days("6 months"), 180);
        assert_eq!(parse_period_to_days("1 day"), 1);
    }

    #[test]
    fn unparsable_period_defaults_to_thirty_days() {
        assert_eq!(parse_period_to_days("whenever"), DEFAULT_PERIOD_DAYS);
        assert_eq!(parse_period_to_days(""), DEFAULT_PERIOD_DAYS);
    }

    #[test]
    fn empty_window_yields_zero_rates_not_nan() {
        let now = Utc::now();
        let analysis = analyze(&[], "30 days", now - Duration::days(30), now);
        assert_eq!(analysis.completion_rate, 0);
        assert_eq!(analysis.overdue_rate, 0);
        assert_eq!(analysis.average_completion_time_hours, 0);
        assert!(analysis.category_performance.is_empty());
    }

    #[test]
    fn rates_are_rounded_integer_percentages() {
        let now = Utc::now();
        let tasks = vec![
            task(TaskStatus::Done, "Learning", 100, 10),
            task(TaskStatus::Done, "Learning", 50, 8),
            task(TaskStatus::Todo, "Technical", 30, 5),
        ];
        let analysis = analyze(&tasks, "30 days", now - Duration::days(30), now);
        assert_eq!(analysis.completion_rate, 67);
        assert_eq!(analysis.total_xp_earned, 150);
        assert_eq!(analysis.average_completion_time_hours, 6);
    }

    #[test]
    fn overdue_tasks_feed_rate_and_category_breakdown() {
        let now = Utc::now();
        let mut overdue = task(TaskStatus::Todo, "HR", 20, 10);
        overdue.due_date = now - Duration::days(2);
        let tasks = vec![overdue, task(TaskStatus::Done, "HR", 20, 10)];

        let analysis = analyze(&tasks, "30 days", now - Duration::days(30), now);
        assert_eq!(analysis.overdue_rate, 50);
        let hr = &analysis.category_performance["HR"];
        assert_eq!(hr.overdue, 1);
        assert_eq!(hr.completion_rate, 50);
    }

    #[test]
    fn insights_trigger_on_thresholds() {
        let now = Utc::now();
        let window = now - Duration::days(30);

        // 100% completion: positive insight.
        let good = vec![task(TaskStatus::Done, "IT", 10, 3)];
        let analysis = analyze(&good, "30 days", window, now);
        assert!(analysis.insights[0].contains("Excellent completion rate"));

        // All pending and overdue: low completion + overdue warnings.
        let mut late = task(TaskStatus::Todo, "IT", 10, 9);
        late.due_date = now - Duration::days(1);
        let analysis = analyze(&[late], "30 days", window, now);
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("Low completion rate")));
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("High overdue rate")));
        assert!(analysis
            .insights
            .iter()
            .any(|i| i.contains("IT tasks need attention")));
    }

    #[test]
    fn weekly_trends_bucket_completions_from_window_start() {
        let now = Utc::now();
        let window = now - Duration::days(30);
        let mut first_week = task(TaskStatus::Done, "Learning", 40, 0);
        first_week.completed_at = Some(window + Duration::days(2));
        let mut third_week = task(TaskStatus::Done, "Learning", 60, 0);
        third_week.completed_at = Some(window + Duration::days(16));

        let analysis = analyze(&[first_week, third_week], "30 days", window, now);
        assert_eq!(analysis.weekly_trends.len(), 2);
        assert_eq!(analysis.weekly_trends[0].week, 1);
        assert_eq!(analysis.weekly_trends[0].xp_earned, 40);
        assert_eq!(analysis.weekly_trends[1].week, 3);
    }
}
