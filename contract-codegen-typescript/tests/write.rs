//! Writing planned files to disk.

use std::fs;

use contractgen_codegen::generation::FileRegistry;
use contractgen_codegen_typescript::{Generator, GeneratorConfig};
use contractgen_model::{ComplexType, Member, PrimitiveKind, TypeId, TypeModel};
use tempfile::TempDir;

fn shop(with_customer: bool) -> (TypeModel, Vec<TypeId>) {
    let mut model = TypeModel::new();
    let string = model.primitive(PrimitiveKind::String);
    let mut order = ComplexType::new("Order")
        .namespace("Shop")
        .member(Member::new("Id", string));
    if with_customer {
        let customer = model.complex(
            ComplexType::new("Customer")
                .namespace("Shop")
                .member(Member::new("Name", string)),
        );
        order = order.member(Member::new("Customer", customer));
    }
    let order = model.complex(order);
    (model, vec![order])
}

#[test]
fn test_write_then_regenerate() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(GeneratorConfig::new());

    let (model, roots) = shop(true);
    let generation = generator.generate(&model, &roots).unwrap();
    let stats = generation.registry().write_all(dir.path()).unwrap();
    assert_eq!(stats.written, ["shop/order.ts", "shop/customer.ts"]);
    assert!(stats.deleted.is_empty());

    let order = fs::read_to_string(dir.path().join("shop").join("order.ts")).unwrap();
    assert_eq!(order, generation.files[0].content);

    // hand-written files next to generated ones survive
    let handwritten = dir.path().join("shop").join("helpers.ts");
    fs::write(&handwritten, "export const x = 1;\n").unwrap();

    // same input, nothing rewritten
    let stats = generation.registry().write_all(dir.path()).unwrap();
    assert!(stats.written.is_empty());
    assert_eq!(stats.unchanged.len(), 2);

    // Customer disappears from the model
    let (model, roots) = shop(false);
    let generation = generator.generate(&model, &roots).unwrap();
    let stats = generation.registry().write_all(dir.path()).unwrap();
    assert_eq!(stats.written, ["shop/order.ts"]);
    assert_eq!(
        stats.deleted,
        [dir.path().join("shop").join("customer.ts")]
    );
    assert!(!dir.path().join("shop").join("customer.ts").exists());
    assert!(handwritten.exists());

    let cleaned = FileRegistry::clean(dir.path(), false).unwrap();
    assert_eq!(cleaned.files, [dir.path().join("shop").join("order.ts")]);
    assert!(handwritten.exists());
}
