// ==========================================
// 库存投影引擎 - 引擎编排器
// ==========================================
// 职责: 协调 聚合 -> 推演 -> 分级 -> 装配 四段流水
// 红线: 纯函数,无跨调用状态; 只为快照中存在的元件生成投影
//       (BOM 引用未跟踪元件产生的需求按策略静默丢弃)
// ==========================================

use crate::config::ProjectionConfig;
use crate::domain::component::Component;
use crate::domain::forecast::Forecast;
use crate::domain::product::Product;
use crate::domain::projection::{ComponentDemand, InventoryProjection};
use crate::engine::assembler::ProjectionAssembler;
use crate::engine::demand::DemandAggregator;
use crate::engine::error::EngineError;
use crate::engine::risk::RiskClassifier;
use crate::engine::stock_sim::StockSimulator;
use chrono::NaiveDateTime;
use std::time::Instant;
use tracing::info;

// ==========================================
// ProjectionEngine - 引擎编排器
// ==========================================
pub struct ProjectionEngine {
    aggregator: DemandAggregator,
    simulator: StockSimulator,
    classifier: RiskClassifier,
    assembler: ProjectionAssembler,
}

impl ProjectionEngine {
    /// 创建编排器 (默认配置)
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default())
    }

    /// 按指定配置创建编排器
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            aggregator: DemandAggregator::with_config(config.clone()),
            simulator: StockSimulator::with_config(config.clone()),
            classifier: RiskClassifier::with_config(config),
            assembler: ProjectionAssembler::new(),
        }
    }

    /// 执行完整投影计算
    ///
    /// # 流程
    /// 1. 数值校验 (唯一硬失败: 非有限数)
    /// 2. 需求聚合 (Product × BOM行 × 预测月份)
    /// 3. 逐元件库存推演
    /// 4. 逐元件风险分级
    /// 5. 装配投影报告
    ///
    /// # 参数
    /// - `components`: 库存快照
    /// - `products`: 产品 BOM 列表
    /// - `forecasts`: 销售预测列表
    /// - `generated_at`: 报告生成时间 (由调用方提供)
    ///
    /// # 不变式
    /// 引擎为四个输入的纯函数: 相同输入两次运行产出完全相同的报告
    /// (投影ID 由元件编码确定性派生,时间戳来自调用方)
    ///
    /// # 返回
    /// 按元件编码升序的 InventoryProjection 列表
    pub fn run(
        &self,
        components: &[Component],
        products: &[Product],
        forecasts: &[Forecast],
        generated_at: NaiveDateTime,
    ) -> Result<Vec<InventoryProjection>, EngineError> {
        let started = Instant::now();

        self.validate_inputs(components, products, forecasts)?;

        let demand = self.aggregator.aggregate(products, forecasts);

        // 只为快照中存在的元件生成投影; 按编码升序保证输出确定性
        let mut snapshot: Vec<&Component> = components.iter().collect();
        snapshot.sort_by(|a, b| a.part_code.cmp(&b.part_code));

        let empty_demand = ComponentDemand::default();
        let mut projections = Vec::with_capacity(snapshot.len());

        for component in snapshot {
            let entry = demand.get(&component.part_code).unwrap_or(&empty_demand);

            let monthly = self.simulator.simulate(component, &entry.demand_by_month);
            let assessment = self
                .classifier
                .classify(component, &entry.demand_by_month, &monthly);
            projections.push(
                self.assembler
                    .assemble(component, entry, assessment, monthly, generated_at),
            );
        }

        info!(
            components = components.len(),
            products = products.len(),
            forecasts = forecasts.len(),
            projections = projections.len(),
            elapsed_ms = started.elapsed().as_millis() as i64,
            "库存投影计算完成"
        );

        Ok(projections)
    }

    // ==========================================
    // 输入校验
    // ==========================================

    /// 校验全部数值字段为有限数
    ///
    /// 缺失字段已由反序列化默认为 0,此处只拦截 NaN/无穷
    fn validate_inputs(
        &self,
        components: &[Component],
        products: &[Product],
        forecasts: &[Forecast],
    ) -> Result<(), EngineError> {
        for component in components {
            if !component.stock.is_finite() {
                return Err(EngineError::invalid_numeric(
                    "stock",
                    &component.part_code,
                    component.stock,
                ));
            }
            if let Some(safety) = component.safety_stock {
                if !safety.is_finite() {
                    return Err(EngineError::invalid_numeric(
                        "safetyStock",
                        &component.part_code,
                        safety,
                    ));
                }
            }
        }

        for product in products {
            for line in &product.components {
                if !line.per_shipper.is_finite() {
                    return Err(EngineError::invalid_numeric(
                        "perShipper",
                        format!("{}/{}", product.product_code, line.part_code),
                        line.per_shipper,
                    ));
                }
            }
        }

        for forecast in forecasts {
            for (month, qty) in &forecast.monthly_forecast {
                if !qty.is_finite() {
                    return Err(EngineError::invalid_numeric(
                        "forecast",
                        format!("{}/{}", forecast.product_code, month),
                        *qty,
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
