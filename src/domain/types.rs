// ==========================================
// 库存投影引擎 - 领域类型定义
// ==========================================
// 职责: 定义供应风险分级类型
// 红线: 等级制决策树,不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 供应健康度 (Overall Health)
// ==========================================
// 顺序: Healthy < Risk < Shortage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallHealth {
    Healthy,  // 库存充足
    Risk,     // 存在风险
    Shortage, // 短缺
}

impl fmt::Display for OverallHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallHealth::Healthy => write!(f, "HEALTHY"),
            OverallHealth::Risk => write!(f, "RISK"),
            OverallHealth::Shortage => write!(f, "SHORTAGE"),
        }
    }
}

// ==========================================
// 采购优先级 (Purchase Priority)
// ==========================================
// 与健康度一一对应: Healthy->Low, Risk->Medium, Shortage->High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,    // 常规监控
    Medium, // 建议下单
    High,   // 紧急下单
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "LOW"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
        }
    }
}
