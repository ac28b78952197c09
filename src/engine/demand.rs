// ==========================================
// 库存投影引擎 - 需求聚合引擎
// ==========================================
// 职责: 遍历 产品 × BOM行 × 预测月份 三元组,
//       按 (元件, 月份) 累加需求量
// 输入: 产品 BOM 列表 + 销售预测列表
// 输出: 元件编码 -> ComponentDemand
// ==========================================

use crate::config::ProjectionConfig;
use crate::domain::forecast::Forecast;
use crate::domain::product::Product;
use crate::domain::projection::ComponentDemand;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

// ==========================================
// DemandAggregator - 需求聚合引擎
// ==========================================
pub struct DemandAggregator {
    config: ProjectionConfig,
}

impl DemandAggregator {
    /// 构造函数 (默认配置)
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default())
    }

    /// 按指定配置构造
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// 聚合元件月度需求
    ///
    /// # 规则
    /// - 无匹配预测的产品贡献零需求,跳过不报错
    /// - 被排除类型 (Bulk - Supplied) 的 BOM 行不参与累加
    /// - 单行需求 = 预测 shipper 数 × per_shipper
    ///
    /// # 参数
    /// - `products`: 产品 BOM 列表
    /// - `forecasts`: 销售预测列表
    ///
    /// # 返回
    /// 元件编码 -> ComponentDemand (月度需求 + 溯源集合)
    pub fn aggregate(
        &self,
        products: &[Product],
        forecasts: &[Forecast],
    ) -> BTreeMap<String, ComponentDemand> {
        // 预测索引: 同一产品出现多条预测时取第一条
        let mut forecast_index: HashMap<&str, &Forecast> = HashMap::new();
        for forecast in forecasts {
            forecast_index
                .entry(forecast.product_code.as_str())
                .or_insert(forecast);
        }

        let mut demand: BTreeMap<String, ComponentDemand> = BTreeMap::new();
        let mut skipped_products = 0usize;

        for product in products {
            // 无预测的产品跳过 (零需求,不是错误)
            let Some(forecast) = forecast_index.get(product.product_code.as_str()) else {
                skipped_products += 1;
                continue;
            };

            for line in &product.components {
                if self.config.is_excluded_part_type(&line.part_type) {
                    continue;
                }

                let entry = demand.entry(line.part_code.clone()).or_default();
                entry.skus.insert(product.product_code.clone());
                if !line.part_type.is_empty() {
                    entry.part_types.insert(line.part_type.clone());
                }
                if !line.part_description.is_empty() {
                    entry.descriptions.insert(line.part_description.clone());
                }

                for (month, shippers) in &forecast.monthly_forecast {
                    let required_qty = shippers * line.per_shipper;
                    *entry.demand_by_month.entry(month.clone()).or_insert(0.0) += required_qty;
                }
            }
        }

        debug!(
            components = demand.len(),
            skipped_products, "需求聚合完成"
        );

        demand
    }
}

impl Default for DemandAggregator {
    fn default() -> Self {
        Self::new()
    }
}
