// ==========================================
// 库存投影引擎 - 供应风险分级引擎
// ==========================================
// 职责: 由需求统计与投影曲线推导健康度/优先级/建议动作
// 红线: 顺序判定的决策树,首个命中即返回; 所有分级输出 reason
// ==========================================

use crate::config::ProjectionConfig;
use crate::domain::component::Component;
use crate::domain::projection::{MonthlyProjection, RiskAssessment};
use crate::domain::types::{OverallHealth, Priority};
use crate::engine::round2;
use serde_json::json;
use std::collections::BTreeMap;

// ==========================================
// RiskClassifier - 供应风险分级引擎
// ==========================================
pub struct RiskClassifier {
    config: ProjectionConfig,
}

impl RiskClassifier {
    /// 构造函数 (默认配置)
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default())
    }

    /// 按指定配置构造
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// 分级元件供应风险
    ///
    /// # 定义
    /// - 四月需求 = 按时间顺序前 4 个有预测记录的月份需求之和
    ///   (不是日历月; 不足 4 个月时取现有月份)
    /// - 净四月需求 = max(0, 四月需求 - 在库量)
    /// - 月均需求 = 全部需求 / 有需求月份数 (无需求时为 0)
    ///
    /// # 判定规则 (顺序评估,首个命中返回)
    /// 1. 在库量 >= 四月需求        -> Healthy / Low
    /// 2. 在库量 > 月均需求         -> Risk / Medium
    /// 3. 其余                      -> Shortage / High
    pub fn classify(
        &self,
        component: &Component,
        demand_by_month: &BTreeMap<String, f64>,
        projections: &[MonthlyProjection],
    ) -> RiskAssessment {
        let (four_month_demand, total_annual_demand, average_monthly_demand) =
            self.calculate_demand_metrics(demand_by_month);

        let net_four_month_demand = (four_month_demand - component.stock).max(0.0);
        let first_shortfall_month = projections
            .iter()
            .find(|p| p.shortfall > 0.0)
            .map(|p| p.month.clone());

        let (overall_health, priority, recommended_action, health_reason) = self
            .assess_health(
                component.stock,
                four_month_demand,
                average_monthly_demand,
                net_four_month_demand,
                first_shortfall_month,
            );

        RiskAssessment {
            overall_health,
            priority,
            recommended_action,
            health_reason,
            net_four_month_demand: round2(net_four_month_demand),
            total_annual_demand: round2(total_annual_demand),
            average_monthly_demand: round2(average_monthly_demand),
        }
    }

    /// 计算需求统计指标
    ///
    /// # 返回
    /// (four_month_demand, total_annual_demand, average_monthly_demand)
    fn calculate_demand_metrics(&self, demand_by_month: &BTreeMap<String, f64>) -> (f64, f64, f64) {
        // BTreeMap 迭代即 "YYYY-MM" 升序
        let four_month_demand: f64 = demand_by_month
            .values()
            .take(self.config.demand_window_months)
            .sum();

        let total_annual_demand: f64 = demand_by_month.values().sum();

        let months_with_demand = demand_by_month.len();
        let average_monthly_demand = if months_with_demand > 0 {
            total_annual_demand / months_with_demand as f64
        } else {
            0.0
        };

        (four_month_demand, total_annual_demand, average_monthly_demand)
    }

    /// 评估健康度 (决策树)
    ///
    /// # 返回
    /// (OverallHealth, Priority, 建议动作, reason)
    fn assess_health(
        &self,
        stock: f64,
        four_month_demand: f64,
        average_monthly_demand: f64,
        net_four_month_demand: f64,
        first_shortfall_month: Option<String>,
    ) -> (OverallHealth, Priority, String, String) {
        let order_qty = net_four_month_demand.ceil() as i64;

        // 1. 库存覆盖四月需求
        if stock >= four_month_demand {
            return (
                OverallHealth::Healthy,
                Priority::Low,
                "Monitor stock levels".to_string(),
                json!({
                    "level": "HEALTHY",
                    "stock": stock,
                    "four_month_demand": four_month_demand
                })
                .to_string(),
            );
        }

        // 2. 库存高于月均需求
        if stock > average_monthly_demand {
            return (
                OverallHealth::Risk,
                Priority::Medium,
                format!("Order {} units", order_qty),
                json!({
                    "level": "RISK",
                    "stock": stock,
                    "four_month_demand": four_month_demand,
                    "average_monthly_demand": average_monthly_demand,
                    "first_shortfall_month": first_shortfall_month
                })
                .to_string(),
            );
        }

        // 3. 短缺
        (
            OverallHealth::Shortage,
            Priority::High,
            format!("URGENT: Order {} units immediately", order_qty),
            json!({
                "level": "SHORTAGE",
                "stock": stock,
                "average_monthly_demand": average_monthly_demand,
                "net_four_month_demand": net_four_month_demand,
                "first_shortfall_month": first_shortfall_month
            })
            .to_string(),
        )
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的需求映射
    fn create_demand(months: &[(&str, f64)]) -> BTreeMap<String, f64> {
        months
            .iter()
            .map(|(m, qty)| (m.to_string(), *qty))
            .collect()
    }

    #[test]
    fn test_healthy_when_stock_covers_four_months() {
        let classifier = RiskClassifier::new();
        let component = Component::new("X1", 400.0);
        let demand = create_demand(&[
            ("2025-01", 100.0),
            ("2025-02", 100.0),
            ("2025-03", 100.0),
            ("2025-04", 100.0),
            ("2025-05", 500.0), // 窗口外
        ]);

        let assessment = classifier.classify(&component, &demand, &[]);

        assert_eq!(assessment.overall_health, OverallHealth::Healthy);
        assert_eq!(assessment.priority, Priority::Low);
        assert_eq!(assessment.recommended_action, "Monitor stock levels");
        assert_eq!(assessment.net_four_month_demand, 0.0);
        assert_eq!(assessment.total_annual_demand, 900.0);
        assert_eq!(assessment.average_monthly_demand, 180.0);
    }

    #[test]
    fn test_risk_when_stock_above_monthly_average() {
        let classifier = RiskClassifier::new();
        // 四月需求 400, 月均 100, 库存介于两者之间
        let component = Component::new("X1", 150.0);
        let demand = create_demand(&[
            ("2025-01", 100.0),
            ("2025-02", 100.0),
            ("2025-03", 100.0),
            ("2025-04", 100.0),
        ]);

        let assessment = classifier.classify(&component, &demand, &[]);

        assert_eq!(assessment.overall_health, OverallHealth::Risk);
        assert_eq!(assessment.priority, Priority::Medium);
        assert_eq!(assessment.net_four_month_demand, 250.0);
        assert_eq!(assessment.recommended_action, "Order 250 units");
    }

    #[test]
    fn test_shortage_when_stock_at_or_below_average() {
        let classifier = RiskClassifier::new();
        let component = Component::new("X1", 0.0);
        let demand = create_demand(&[("2025-01", 60.0)]);

        let assessment = classifier.classify(&component, &demand, &[]);

        assert_eq!(assessment.overall_health, OverallHealth::Shortage);
        assert_eq!(assessment.priority, Priority::High);
        assert_eq!(
            assessment.recommended_action,
            "URGENT: Order 60 units immediately"
        );
    }

    #[test]
    fn test_order_quantity_rounded_up() {
        let classifier = RiskClassifier::new();
        let component = Component::new("X1", 10.0);
        let demand = create_demand(&[("2025-01", 30.5), ("2025-02", 40.2)]);

        let assessment = classifier.classify(&component, &demand, &[]);

        // net = 70.7 - 10 = 60.7 -> 向上取整 61
        assert_eq!(assessment.recommended_action, "URGENT: Order 61 units immediately");
    }

    #[test]
    fn test_window_shorter_than_four_months() {
        let classifier = RiskClassifier::new();
        // 仅两个有预测的月份,窗口取现有的两个
        let component = Component::new("X1", 120.0);
        let demand = create_demand(&[("2025-01", 50.0), ("2025-02", 50.0)]);

        let assessment = classifier.classify(&component, &demand, &[]);

        assert_eq!(assessment.overall_health, OverallHealth::Healthy);
        assert_eq!(assessment.net_four_month_demand, 0.0);
    }

    #[test]
    fn test_window_uses_first_recorded_months() {
        let classifier = RiskClassifier::new();
        // 稀疏预测: 窗口取前 4 个有记录的月份而非日历月
        let component = Component::new("X1", 0.0);
        let demand = create_demand(&[
            ("2025-01", 10.0),
            ("2025-04", 10.0),
            ("2025-07", 10.0),
            ("2025-10", 10.0),
            ("2026-01", 99.0),
        ]);

        let assessment = classifier.classify(&component, &demand, &[]);

        assert_eq!(assessment.net_four_month_demand, 40.0);
    }

    #[test]
    fn test_zero_demand_component_is_healthy() {
        let classifier = RiskClassifier::new();
        let component = Component::new("X1", 0.0);

        let assessment = classifier.classify(&component, &BTreeMap::new(), &[]);

        assert_eq!(assessment.overall_health, OverallHealth::Healthy);
        assert_eq!(assessment.priority, Priority::Low);
        assert_eq!(assessment.net_four_month_demand, 0.0);
        assert_eq!(assessment.total_annual_demand, 0.0);
        assert_eq!(assessment.average_monthly_demand, 0.0);
    }

    #[test]
    fn test_health_reason_is_parseable_json() {
        let classifier = RiskClassifier::new();
        let component = Component::new("X1", 5.0);
        let demand = create_demand(&[("2025-01", 60.0)]);

        let assessment = classifier.classify(&component, &demand, &[]);

        let reason: serde_json::Value = serde_json::from_str(&assessment.health_reason).unwrap();
        assert_eq!(reason["level"], "SHORTAGE");
    }
}
