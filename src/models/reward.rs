use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RewardTier {
    Newcomer,
    Bronze,
    Silver,
    Gold,
    Master,
}

impl RewardTier {
    /// Tiers from highest to lowest; lookup takes the first whose threshold is met.
    pub const DESCENDING: [RewardTier; 5] = [
        RewardTier::Master,
        RewardTier::Gold,
        RewardTier::Silver,
        RewardTier::Bronze,
        RewardTier::Newcomer,
    ];

    pub fn for_score(total_score: i64) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|tier| total_score >= tier.threshold())
            .unwrap_or(RewardTier::Newcomer)
    }

    pub fn threshold(self) -> i64 {
        match self {
            RewardTier::Master => 1200,
            RewardTier::Gold => 1000,
            RewardTier::Silver => 800,
            RewardTier::Bronze => 600,
            RewardTier::Newcomer => i64::MIN,
        }
    }

    pub fn next(self) -> Option<RewardTier> {
        match self {
            RewardTier::Newcomer => Some(RewardTier::Bronze),
            RewardTier::Bronze => Some(RewardTier::Silver),
            RewardTier::Silver => Some(RewardTier::Gold),
            RewardTier::Gold => Some(RewardTier::Master),
            RewardTier::Master => None,
        }
    }

    /// Points still needed to reach the next tier; `None` at the top.
    pub fn gap_to_next(self, total_score: i64) -> Option<i64> {
        self.next()
            .map(|next| next.threshold().saturating_sub(total_score))
    }

    pub fn title(self) -> &'static str {
        match self {
            RewardTier::Master => "👑 满级大佬",
            RewardTier::Gold => "🍗 黄金段位",
            RewardTier::Silver => "🍜 白银段位",
            RewardTier::Bronze => "🥤 青铜段位",
            RewardTier::Newcomer => "🌱 新手村",
        }
    }

    /// The reward this tier unlocks.
    pub fn unlock(self) -> Option<&'static str> {
        match self {
            RewardTier::Master => Some("新体验"),
            RewardTier::Gold => Some("自由创作"),
            RewardTier::Silver => Some("不同风格衣服"),
            RewardTier::Bronze => Some("搞笑玩具"),
            RewardTier::Newcomer => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RewardTier::Master => "#d97706",
            RewardTier::Gold => "#b91c1c",
            RewardTier::Silver => "#0369a1",
            RewardTier::Bronze => "#15803d",
            RewardTier::Newcomer => "#4b5563",
        }
    }

    pub fn describe(self, total_score: i64) -> String {
        let next_unlock = self.next().and_then(RewardTier::unlock).unwrap_or_default();
        match (self.unlock(), self.gap_to_next(total_score)) {
            (Some(unlock), None) => format!("当前解锁：{unlock}！你这周简直是神！"),
            (Some(unlock), Some(gap)) => {
                format!("当前解锁：{unlock}！ (距【{next_unlock}】还差 {gap} 分)")
            }
            (None, Some(gap)) => {
                format!("暂无奖励 (距最低奖励【{next_unlock}】还差 {gap} 分，冲鸭！)")
            }
            (None, None) => "暂无奖励".to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardTier::Newcomer => "newcomer",
            RewardTier::Bronze => "bronze",
            RewardTier::Silver => "silver",
            RewardTier::Gold => "gold",
            RewardTier::Master => "master",
        }
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardInfo {
    pub tier: RewardTier,
    pub title: String,
    pub description: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_to_next: Option<i64>,
}
