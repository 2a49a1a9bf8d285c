//! 產品分類服務
//!
//! 判斷產品記錄是中間產品（在工藝內部流轉）還是最終產品
//! （在工藝邊界產出）。

use techflow_core::{OperationProductInComponent, OperationProductOutComponent, Technology};

/// 產品分類服務介面
pub trait ProductClassifier {
    /// 投入產品是否為中間產品（由工藝內其他作業產出）
    fn is_intermediate(
        &self,
        technology: &Technology,
        component: &OperationProductInComponent,
    ) -> bool;

    /// 產出產品是否為最終產品（於工藝邊界產出）
    fn is_final(
        &self,
        technology: &Technology,
        component: &OperationProductOutComponent,
    ) -> bool;
}

/// 依作業樹結構分類
///
/// 中間產品：其所屬作業的某個子作業產出了同一產品。
/// 最終產品：其所屬作業為作業樹的根。
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralClassifier;

impl StructuralClassifier {
    /// 創建新的結構分類器
    pub fn new() -> Self {
        Self
    }
}

impl ProductClassifier for StructuralClassifier {
    fn is_intermediate(
        &self,
        technology: &Technology,
        component: &OperationProductInComponent,
    ) -> bool {
        let Some(owner) = technology.operation_components.iter().find(|oc| {
            oc.operation_product_in_components
                .iter()
                .any(|opic| opic.id == component.id)
        }) else {
            return false;
        };

        technology
            .operation_components
            .iter()
            .filter(|oc| oc.parent == Some(owner.id))
            .any(|child| {
                child
                    .operation_product_out_components
                    .iter()
                    .any(|opoc| opoc.product_id == component.product_id)
            })
    }

    fn is_final(
        &self,
        technology: &Technology,
        component: &OperationProductOutComponent,
    ) -> bool {
        technology
            .operation_components
            .iter()
            .find(|oc| {
                oc.operation_product_out_components
                    .iter()
                    .any(|opoc| opoc.id == component.id)
            })
            .map(|owner| owner.parent.is_none())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use techflow_core::{
        OperationComponent, OperationProductInComponent, OperationProductOutComponent, Range,
        Technology,
    };

    /// 兩層工藝：根作業組裝自行車，子作業焊接車架
    fn two_level_technology() -> (Technology, OperationProductInComponent) {
        let frame_input =
            OperationProductInComponent::new("FRAME-001".to_string(), Decimal::from(1));
        let frame_input_clone = frame_input.clone();

        let root = OperationComponent::new()
            .with_input(frame_input)
            .with_output(OperationProductOutComponent::new(
                "BIKE-001".to_string(),
                Decimal::ONE,
            ));
        let child = OperationComponent::new()
            .with_parent(root.id)
            .with_input(OperationProductInComponent::new(
                "TUBE-001".to_string(),
                Decimal::from(4),
            ))
            .with_output(OperationProductOutComponent::new(
                "FRAME-001".to_string(),
                Decimal::ONE,
            ));

        let technology = Technology::new(
            "TECH-001".to_string(),
            "自行車組裝".to_string(),
            Range::OneDivision,
        )
        .with_operation_component(root)
        .with_operation_component(child);

        (technology, frame_input_clone)
    }

    #[test]
    fn test_child_produced_input_is_intermediate() {
        let (technology, frame_input) = two_level_technology();
        let classifier = StructuralClassifier::new();

        assert!(classifier.is_intermediate(&technology, &frame_input));
    }

    #[test]
    fn test_purchased_input_is_not_intermediate() {
        let (technology, _) = two_level_technology();
        let classifier = StructuralClassifier::new();

        let tube_input = technology
            .operation_components
            .iter()
            .flat_map(|oc| &oc.operation_product_in_components)
            .find(|opic| opic.product_id == "TUBE-001")
            .unwrap();

        assert!(!classifier.is_intermediate(&technology, tube_input));
    }

    #[test]
    fn test_root_output_is_final() {
        let (technology, _) = two_level_technology();
        let classifier = StructuralClassifier::new();

        let bike_output = technology
            .operation_components
            .iter()
            .flat_map(|oc| &oc.operation_product_out_components)
            .find(|opoc| opoc.product_id == "BIKE-001")
            .unwrap();

        assert!(classifier.is_final(&technology, bike_output));
    }

    #[test]
    fn test_child_output_is_not_final() {
        let (technology, _) = two_level_technology();
        let classifier = StructuralClassifier::new();

        let frame_output = technology
            .operation_components
            .iter()
            .flat_map(|oc| &oc.operation_product_out_components)
            .find(|opoc| opoc.product_id == "FRAME-001")
            .unwrap();

        assert!(!classifier.is_final(&technology, frame_output));
    }

    #[test]
    fn test_unknown_component_classifies_conservatively() {
        let (technology, _) = two_level_technology();
        let classifier = StructuralClassifier::new();

        let stray = OperationProductInComponent::new("UNKNOWN".to_string(), Decimal::ONE);
        assert!(!classifier.is_intermediate(&technology, &stray));

        let stray_out = OperationProductOutComponent::new("UNKNOWN".to_string(), Decimal::ONE);
        assert!(!classifier.is_final(&technology, &stray_out));
    }
}
