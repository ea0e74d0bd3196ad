//! 服务层数据传输对象

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 按标签聚合的 XP 明细
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagXpBreakdown {
    pub quest_xp: i64,
    pub badge_xp: i64,
    pub total_xp: i64,
    /// 命中的任务 ID（升序）
    pub quest_ids: Vec<i64>,
    /// 命中的徽章 ID（升序）
    pub badge_ids: Vec<i64>,
}

impl TagXpBreakdown {
    /// 由按 ID 去重后的命中实体构建
    pub fn from_matches(quests: BTreeMap<i64, i32>, badges: BTreeMap<i64, i32>) -> Self {
        let quest_xp: i64 = quests.values().map(|&xp| i64::from(xp)).sum();
        let badge_xp: i64 = badges.values().map(|&xp| i64::from(xp)).sum();

        Self {
            quest_xp,
            badge_xp,
            total_xp: quest_xp + badge_xp,
            quest_ids: quests.into_keys().collect(),
            badge_ids: badges.into_keys().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quest_ids.is_empty() && self.badge_ids.is_empty()
    }
}

/// 新徽章检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBadges {
    /// 新获得的徽章 ID，按首次授予时间升序
    pub badge_ids: Vec<i64>,
    /// 调用方应保存并在下次检查时传回的时间点
    pub checkpoint: DateTime<Utc>,
}

impl NewBadges {
    pub fn none(checkpoint: DateTime<Utc>) -> Self {
        Self {
            badge_ids: vec![],
            checkpoint,
        }
    }

    pub fn has_new(&self) -> bool {
        !self.badge_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_from_matches() {
        let quests = BTreeMap::from([(3, 10), (1, 20)]);
        let badges = BTreeMap::from([(7, 5)]);

        let breakdown = TagXpBreakdown::from_matches(quests, badges);
        assert_eq!(breakdown.quest_xp, 30);
        assert_eq!(breakdown.badge_xp, 5);
        assert_eq!(breakdown.total_xp, 35);
        assert_eq!(breakdown.quest_ids, vec![1, 3]);
        assert_eq!(breakdown.badge_ids, vec![7]);
        assert!(!breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_sums_in_i64() {
        let quests = BTreeMap::from([(1, i32::MAX), (2, i32::MAX)]);
        let breakdown = TagXpBreakdown::from_matches(quests, BTreeMap::new());
        assert_eq!(breakdown.total_xp, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let json = serde_json::to_value(TagXpBreakdown::default()).unwrap();
        assert_eq!(json["totalXp"], 0);
        assert!(json["questIds"].as_array().unwrap().is_empty());
    }
}
