// ==========================================
// 库存投影引擎 - 产品与 BOM 领域模型
// ==========================================
// 职责: 产品及其物料清单 (Bill of Materials)
// 约定: per_shipper 为生产一个发运单位(shipper)消耗的元件数量
// ==========================================

use serde::{Deserialize, Serialize};

/// 外部供应元件类型,不纳入需求统计
pub const PART_TYPE_BULK_SUPPLIED: &str = "Bulk - Supplied";

// ==========================================
// BomLine - BOM 行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    pub part_code: String,        // 元件编码
    #[serde(default)]
    pub part_description: String, // 元件描述
    #[serde(default)]
    pub part_type: String,        // 元件类型 ("Bulk - Supplied" 排除)
    #[serde(default)]
    pub per_shipper: f64,         // 单个 shipper 消耗量
}

impl BomLine {
    /// 判断该行是否纳入需求统计
    ///
    /// 外部供应 (Bulk - Supplied) 元件由供应商直送,不跟踪库存
    pub fn is_demand_relevant(&self) -> bool {
        self.part_type != PART_TYPE_BULK_SUPPLIED
    }
}

// ==========================================
// Product - 产品
// ==========================================
// 用途: 投影计算的结构侧输入; components 为有序 BOM 行列表
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_code: String,    // 产品编码 (SKU)
    #[serde(default)]
    pub components: Vec<BomLine>, // BOM 行
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_supplied_excluded() {
        let line = BomLine {
            part_code: "Y1".to_string(),
            part_description: String::new(),
            part_type: PART_TYPE_BULK_SUPPLIED.to_string(),
            per_shipper: 4.0,
        };

        assert!(!line.is_demand_relevant());
    }

    #[test]
    fn test_other_part_types_included() {
        let line = BomLine {
            part_code: "X1".to_string(),
            part_description: "Cap 38mm".to_string(),
            part_type: "Packaging".to_string(),
            per_shipper: 2.0,
        };

        assert!(line.is_demand_relevant());
    }

    #[test]
    fn test_deserialize_product() {
        let json = r#"{
            "productCode": "P1",
            "components": [
                {"partCode": "X1", "partDescription": "Cap", "partType": "Packaging", "perShipper": 2}
            ]
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();

        assert_eq!(p.product_code, "P1");
        assert_eq!(p.components.len(), 1);
        assert_eq!(p.components[0].per_shipper, 2.0);
    }
}
