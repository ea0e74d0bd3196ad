//! 任务相关实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 任务
///
/// 用户完成后获得 `xp` 经验值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: i64,
    pub name: String,
    pub xp: i32,
}

/// 任务提交记录
///
/// 只有同时完成且已审批的提交才计入 XP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuestSubmission {
    pub id: i64,
    pub quest_id: i64,
    pub user_id: i64,
    pub is_completed: bool,
    pub is_approved: bool,
    /// 所属学期
    #[sqlx(default)]
    pub semester_id: Option<i64>,
    #[sqlx(default)]
    pub time_completed: Option<DateTime<Utc>>,
}

impl QuestSubmission {
    /// 是否计入 XP
    pub fn counts_toward_xp(&self) -> bool {
        self.is_completed && self.is_approved
    }

    /// 是否属于指定学期；未指定学期时总是属于
    pub fn in_semester(&self, semester_id: Option<i64>) -> bool {
        semester_id.is_none_or(|id| self.semester_id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(is_completed: bool, is_approved: bool) -> QuestSubmission {
        QuestSubmission {
            id: 1,
            quest_id: 10,
            user_id: 100,
            is_completed,
            is_approved,
            semester_id: Some(2),
            time_completed: None,
        }
    }

    #[test]
    fn test_counts_toward_xp() {
        assert!(submission(true, true).counts_toward_xp());
        assert!(!submission(true, false).counts_toward_xp());
        assert!(!submission(false, true).counts_toward_xp());
        assert!(!submission(false, false).counts_toward_xp());
    }

    #[test]
    fn test_in_semester() {
        let sub = submission(true, true);
        assert!(sub.in_semester(None));
        assert!(sub.in_semester(Some(2)));
        assert!(!sub.in_semester(Some(3)));
    }
}
