// ==========================================
// 库存投影引擎 - 投影结果领域模型
// ==========================================
// 职责: 投影计算的派生实体,每次调用全量重建
// 红线: 派生实体创建后不再变更 (引擎为纯函数)
// ==========================================

use crate::domain::types::{OverallHealth, Priority};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// ComponentDemand - 元件聚合需求 (Aggregator 输出)
// ==========================================
// 用途: 按元件汇总的月度需求及溯源信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDemand {
    pub demand_by_month: BTreeMap<String, f64>, // 月份 -> 需求量
    pub skus: BTreeSet<String>,                 // 使用该元件的产品编码
    pub part_types: BTreeSet<String>,           // 出现过的元件类型
    pub descriptions: BTreeSet<String>,         // 出现过的元件描述
}

// ==========================================
// MonthlyProjection - 单月投影 (Simulator 输出)
// ==========================================
// 不变式: projected_soh = max(0, 期初库存 - total_demand)
//         shortfall = max(0, total_demand - 期初库存)
// 所有数值已按展示口径保留两位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    pub month: String,            // "YYYY-MM"
    pub total_demand: f64,        // 当月需求量
    pub coverage_percentage: f64, // 需求覆盖率 (0-100, 封顶 100)
    pub projected_soh: f64,       // 月末投影库存
    pub shortfall: f64,           // 当月缺口
    pub days_of_coverage: f64,    // 覆盖天数 (30 天月约定, 封顶 30)
}

// ==========================================
// RiskAssessment - 风险评估 (Classifier 输出)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_health: OverallHealth,  // 健康度
    pub priority: Priority,             // 采购优先级
    pub recommended_action: String,     // 建议动作
    pub health_reason: String,          // 分级原因 (可解释性, JSON)
    pub net_four_month_demand: f64,     // 净四月需求 (max(0, 四月需求 - 库存))
    pub total_annual_demand: f64,       // 全部月份需求合计
    pub average_monthly_demand: f64,    // 有需求月份的平均需求
}

// ==========================================
// InventoryProjection - 元件投影报告 (Assembler 输出)
// ==========================================
// 用途: 看板/采购决策的只读数据源
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryProjection {
    pub projection_id: String,      // 投影ID
    pub part_code: String,          // 元件编码

    // ===== 快照信息 =====
    pub current_stock: f64,         // 计算起点在库量
    pub safety_stock: Option<f64>,  // 安全库存
    pub part_types: Vec<String>,    // 元件类型 (升序)
    pub descriptions: Vec<String>,  // 元件描述 (升序)
    pub skus_used_in: Vec<String>,  // 使用该元件的产品 (升序)

    // ===== 需求统计 =====
    pub net_four_month_demand: f64,
    pub total_annual_demand: f64,
    pub average_monthly_demand: f64,

    // ===== 风险分级 =====
    pub overall_health: OverallHealth,
    pub priority: Priority,
    pub recommended_action: String,
    pub health_reason: String,

    // ===== 月度曲线 =====
    pub monthly_projections: Vec<MonthlyProjection>,

    // ===== 元数据 =====
    pub generated_at: NaiveDateTime, // 生成时间
}

impl InventoryProjection {
    /// 判断任一月份是否出现缺口
    pub fn has_shortfall(&self) -> bool {
        self.monthly_projections.iter().any(|m| m.shortfall > 0.0)
    }

    /// 首个出现缺口的月份
    pub fn first_shortfall_month(&self) -> Option<&str> {
        self.monthly_projections
            .iter()
            .find(|m| m.shortfall > 0.0)
            .map(|m| m.month.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_month(month: &str, shortfall: f64) -> MonthlyProjection {
        MonthlyProjection {
            month: month.to_string(),
            total_demand: 10.0,
            coverage_percentage: 100.0,
            projected_soh: 0.0,
            shortfall,
            days_of_coverage: 30.0,
        }
    }

    #[test]
    fn test_first_shortfall_month() {
        let projection = InventoryProjection {
            projection_id: "t1".to_string(),
            part_code: "X1".to_string(),
            current_stock: 20.0,
            safety_stock: None,
            part_types: vec![],
            descriptions: vec![],
            skus_used_in: vec![],
            net_four_month_demand: 0.0,
            total_annual_demand: 30.0,
            average_monthly_demand: 10.0,
            overall_health: OverallHealth::Risk,
            priority: Priority::Medium,
            recommended_action: String::new(),
            health_reason: String::new(),
            monthly_projections: vec![
                sample_month("2025-01", 0.0),
                sample_month("2025-02", 5.0),
                sample_month("2025-03", 10.0),
            ],
            generated_at: chrono::Utc::now().naive_utc(),
        };

        assert!(projection.has_shortfall());
        assert_eq!(projection.first_shortfall_month(), Some("2025-02"));
    }
}
