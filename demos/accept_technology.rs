//! 工藝接受驗證示例
//!
//! 建立一個單一事業部範圍的工藝，先以缺漏庫位的狀態送交接受，
//! 再補齊庫位後重試。

use std::sync::Arc;

use rust_decimal::Decimal;
use techflow::{
    InMemoryOperationComponentStore, Location, OperationComponent, OperationProductInComponent,
    OperationProductOutComponent, Range, StateChangeContext, StateChangeStatus,
    StructuralClassifier, Technology, TechnologyAcceptValidator, TechnologyState,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 工藝接受驗證示例 ===\n");

    // 1. 建立工藝：根作業組裝自行車
    let technology = Technology::new(
        "TECH-BIKE".to_string(),
        "自行車組裝".to_string(),
        Range::OneDivision,
    )
    .with_operation_component(
        OperationComponent::new()
            .with_input(OperationProductInComponent::new(
                "FRAME-001".to_string(),
                Decimal::ONE,
            ))
            .with_output(OperationProductOutComponent::new(
                "BIKE-001".to_string(),
                Decimal::ONE,
            )),
    );

    // 2. 索引產品記錄並組裝驗證器
    let classifier = StructuralClassifier::new();
    let mut store = InMemoryOperationComponentStore::new();
    store.index_technology(&technology, &classifier);
    let store = Arc::new(store);
    let validator =
        TechnologyAcceptValidator::new(store.clone(), store.clone(), Arc::new(classifier));

    // 3. 第一次嘗試接受：庫位未設置
    let mut context = StateChangeContext::new(Some(technology.clone()), TechnologyState::Accepted);
    validator.validate_on_accepted(&mut context)?;

    println!("第一次嘗試，驗證錯誤:");
    for error in context.validation_errors() {
        match error.field_name() {
            Some(field) => println!("  - 欄位 {}: {}", field, error.key()),
            None => println!("  - {}", error.key()),
        }
    }
    context.set_status(StateChangeStatus::Failure);
    println!("轉換狀態: {:?}\n", context.status());

    // 4. 補齊庫位後重試
    let components_warehouse = Location::new("WH-01".to_string(), "元件倉".to_string());
    let finished_goods_warehouse = Location::new("WH-02".to_string(), "成品倉".to_string());

    let mut technology = technology
        .with_components_location(components_warehouse.id)
        .with_products_input_location(finished_goods_warehouse.id);
    for operation in &mut technology.operation_components {
        for input in &mut operation.operation_product_in_components {
            input.components_location = Some(components_warehouse.id);
        }
        for output in &mut operation.operation_product_out_components {
            output.products_input_location = Some(finished_goods_warehouse.id);
        }
    }

    let mut store = InMemoryOperationComponentStore::new();
    store.add_location(components_warehouse);
    store.add_location(finished_goods_warehouse);
    store.index_technology(&technology, &classifier);
    let store = Arc::new(store);
    let validator =
        TechnologyAcceptValidator::new(store.clone(), store, Arc::new(classifier));

    let mut context = StateChangeContext::new(Some(technology), TechnologyState::Accepted);
    validator.validate_on_accepted(&mut context)?;

    if context.has_validation_errors() {
        context.set_status(StateChangeStatus::Failure);
    } else {
        context.set_status(StateChangeStatus::Successful);
    }
    println!("第二次嘗試，錯誤數: {}", context.validation_errors().len());
    println!("轉換狀態: {:?}", context.status());

    Ok(())
}
