//! 枚举类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 可打标签的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Quest,
    Badge,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quest => "quest",
            Self::Badge => "badge",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_serde() {
        assert_eq!(serde_json::to_string(&EntityKind::Quest).unwrap(), "\"quest\"");
        let kind: EntityKind = serde_json::from_str("\"badge\"").unwrap();
        assert_eq!(kind, EntityKind::Badge);
        assert_eq!(EntityKind::Badge.to_string(), "badge");
    }
}
