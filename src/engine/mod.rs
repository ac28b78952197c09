// ==========================================
// 库存投影引擎 - 引擎层
// ==========================================
// 职责: 实现投影计算的业务规则
// 红线: 引擎无状态,不做 I/O; 所有分级必须输出 reason
// ==========================================

pub mod assembler;
pub mod demand;
pub mod error;
pub mod orchestrator;
pub mod risk;
pub mod stock_sim;

// 重导出核心引擎
pub use assembler::{ExportRow, ProjectionAssembler};
pub use demand::DemandAggregator;
pub use error::EngineError;
pub use orchestrator::ProjectionEngine;
pub use risk::RiskClassifier;
pub use stock_sim::StockSimulator;

/// 展示口径取整: 保留两位小数
///
/// 仅用于输出边界,递推计算保持全精度
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(-50.004), -50.0);
    }
}
