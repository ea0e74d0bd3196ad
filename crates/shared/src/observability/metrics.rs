//! 指标模块
//!
//! 基于 metrics crate 门面记录业务指标。未安装 recorder 时所有记录操作为空操作。

use std::time::Duration;

/// 按标签统计 XP 的查询次数
pub const TAG_XP_QUERIES_TOTAL: &str = "tag_xp_queries_total";
/// 按标签统计 XP 的查询耗时
pub const TAG_XP_QUERY_DURATION_SECONDS: &str = "tag_xp_query_duration_seconds";
/// 新徽章检查次数
pub const NEW_BADGE_CHECKS_TOTAL: &str = "new_badge_checks_total";

/// 注册指标描述
pub fn describe_metrics() {
    metrics::describe_counter!(TAG_XP_QUERIES_TOTAL, "Total number of tag XP aggregations");
    metrics::describe_histogram!(
        TAG_XP_QUERY_DURATION_SECONDS,
        "Tag XP aggregation duration in seconds"
    );
    metrics::describe_counter!(NEW_BADGE_CHECKS_TOTAL, "Total number of new badge checks");
}

/// 记录一次 XP 聚合
#[inline]
pub fn record_tag_xp_query(success: bool, duration: Duration) {
    let outcome = if success { "success" } else { "error" };
    metrics::counter!(TAG_XP_QUERIES_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(TAG_XP_QUERY_DURATION_SECONDS, "outcome" => outcome)
        .record(duration.as_secs_f64());
}

/// 记录一次新徽章检查
#[inline]
pub fn record_new_badge_check(new_badges: usize) {
    let found = if new_badges > 0 { "true" } else { "false" };
    metrics::counter!(NEW_BADGE_CHECKS_TOTAL, "found" => found).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        describe_metrics();
        record_tag_xp_query(true, Duration::from_millis(3));
        record_tag_xp_query(false, Duration::from_millis(1));
        record_new_badge_check(0);
    }
}
