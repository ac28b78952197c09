// ==========================================
// 库存投影引擎 - 引擎错误类型
// ==========================================
// 职责: 定义引擎边界的硬失败
// 红线: 缺数据静默跳过,非法数值必须报错
// ==========================================

use thiserror::Error;

/// 引擎错误类型
///
/// 缺失预测、BOM 引用未跟踪元件等情况属于静默省略,
/// 唯一的硬失败是非法数值输入 (NaN / 无穷)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 非法数值输入 (非有限数)
    #[error("非法数值输入: field={field}, key={key}, value={value}")]
    InvalidNumeric {
        field: String, // 字段名 (stock / perShipper / forecast)
        key: String,   // 定位键 (元件编码 / 产品编码/月份)
        value: f64,
    },
}

impl EngineError {
    /// 构造非法数值错误
    pub fn invalid_numeric(field: &str, key: impl Into<String>, value: f64) -> Self {
        EngineError::InvalidNumeric {
            field: field.to_string(),
            key: key.into(),
            value,
        }
    }
}
