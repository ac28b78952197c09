// ==========================================
// 库存投影引擎 - 库存推演引擎
// ==========================================
// 职责: 按时间顺序逐月消耗库存,生成投影曲线
// 输入: 元件在库量 + 月度需求
// 输出: MonthlyProjection 列表 (月份升序)
// ==========================================

use crate::config::ProjectionConfig;
use crate::domain::component::Component;
use crate::domain::projection::MonthlyProjection;
use crate::engine::round2;
use std::collections::BTreeMap;

// ==========================================
// StockSimulator - 库存推演引擎
// ==========================================
pub struct StockSimulator {
    config: ProjectionConfig,
}

impl StockSimulator {
    /// 构造函数 (默认配置)
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default())
    }

    /// 按指定配置构造
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// 推演库存消耗曲线
    ///
    /// # 规则
    /// - 月份按 "YYYY-MM" 字符串升序处理
    /// - projected_soh = max(0, 期初库存 - 需求)
    /// - shortfall = max(0, 需求 - 期初库存)
    /// - coverage = min(1, 期初库存 / 需求) * 100 (需求为 0 时取 100)
    /// - days_of_coverage = floor(期初库存 / (需求/30)), 封顶 30 天
    /// - 递推使用全精度,仅输出值保留两位小数
    ///
    /// # 参数
    /// - `component`: 元件库存记录
    /// - `demand_by_month`: 月份 -> 需求量
    ///
    /// # 返回
    /// 月份升序的 MonthlyProjection 列表
    pub fn simulate(
        &self,
        component: &Component,
        demand_by_month: &BTreeMap<String, f64>,
    ) -> Vec<MonthlyProjection> {
        let days_per_month = self.config.days_per_month;
        let mut current_stock = component.stock;
        let mut projections = Vec::with_capacity(demand_by_month.len());

        for (month, &demand) in demand_by_month {
            let coverage_percentage = if demand > 0.0 {
                (current_stock / demand).min(1.0) * 100.0
            } else {
                100.0
            };

            let projected_soh = (current_stock - demand).max(0.0);
            let shortfall = (demand - current_stock).max(0.0);

            let days_of_coverage = if demand > 0.0 {
                (current_stock / (demand / days_per_month))
                    .floor()
                    .min(days_per_month)
            } else {
                days_per_month
            };

            projections.push(MonthlyProjection {
                month: month.clone(),
                total_demand: round2(demand),
                coverage_percentage: round2(coverage_percentage),
                projected_soh: round2(projected_soh),
                shortfall: round2(shortfall),
                days_of_coverage,
            });

            // 递推保持全精度,不使用四舍五入后的输出值
            current_stock = projected_soh;
        }

        projections
    }
}

impl Default for StockSimulator {
    fn default() -> Self {
        Self::new()
    }
}
