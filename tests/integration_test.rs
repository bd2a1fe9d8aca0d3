//! 集成測試

use patch_pricing::patch_core::{Catalog, MachineProfile, MaterialProfile};
use patch_pricing::*;
use rstest::rstest;
use rust_decimal::Decimal;

const EPS: f64 = 1e-6;

fn reference_spec() -> PatchSpec {
    // 12 × 9 cm，28000 針 14 色，熱熔膠，BP2100，Nylon 600，40% 毛利
    PatchSpec::rectangular(12.0, 9.0, 28000, 14)
        .with_fixation(Fixation::ThermoAdhesive)
        .with_machine(Machine::Bp2100)
        .with_base_material(BaseMaterial::Nylon600)
        .with_margin_percent(40.0)
}

#[test]
fn test_reference_patch_end_to_end() {
    let calculator =
        PricingCalculator::new(PricingConfig::default(), DiscountTier::default_tiers());
    let result = calculator.compute_price(&reference_spec()).unwrap();

    // 上框面積 (12 + 2) × (9 + 2) = 154 cm²
    assert!((result.loaded_area_m2 - 0.0154).abs() < 1e-12);
    assert!((result.production_cost - 3.56331).abs() < 1e-4);
    assert!((result.final_unit_price - 5.0).abs() < EPS);
    assert!((result.grand_total - 55.0).abs() < EPS);
}

#[rstest]
#[case(1, 0.0, 55.0)]
#[case(10, 5.0, 97.5)]
#[case(30, 5.0, 142.5 + 50.0)]
#[case(50, 10.0, 225.0)]
#[case(100, 15.0, 425.0)]
fn test_quantity_breaks(#[case] quantity: u32, #[case] discount: f64, #[case] total: f64) {
    let calculator =
        PricingCalculator::new(PricingConfig::default(), DiscountTier::default_tiers());
    let result = calculator
        .compute_price(&reference_spec().with_quantity(quantity))
        .unwrap();

    assert_eq!(result.discount_percent, discount);
    assert!((result.grand_total - total).abs() < EPS);
}

#[test]
fn test_config_from_json_changes_price() {
    let json = PricingConfig::default()
        .with_rounding_unit(1.0)
        .to_json_string()
        .unwrap();
    let config = PricingConfig::from_json_str(&json).unwrap();

    let result = PricingCalculator::new(config, Vec::new())
        .compute_price(&reference_spec())
        .unwrap();
    assert!((result.final_unit_price - 5.0).abs() < EPS);

    // 建議售價 4.99 → 以 2.00 進位為 6.00
    let config = PricingConfig::default().with_rounding_unit(2.0);
    let result = PricingCalculator::new(config, Vec::new())
        .compute_price(&reference_spec())
        .unwrap();
    assert!((result.final_unit_price - 6.0).abs() < EPS);
}

#[test]
fn test_invalid_config_json_rejected() {
    let mut config = PricingConfig::default();
    config.rounding_unit = 0.0;
    let json = serde_json::to_string(&config).unwrap();

    assert!(matches!(
        PricingConfig::from_json_str(&json),
        Err(PricingError::InvalidConfig(_))
    ));
}

#[test]
fn test_catalog_machine_and_material_flow() {
    let mut catalog = Catalog::new();
    let machine_id = catalog
        .add_machine(MachineProfile::new("Tajima TMEZ".to_string(), 1050.0, 0.12))
        .unwrap();
    let material_id = catalog
        .add_material(MaterialProfile::new("Nylon bis".to_string(), 9.0, 1.4))
        .unwrap();

    let spec = reference_spec()
        .with_machine(catalog.machine(machine_id).unwrap())
        .with_base_material(catalog.material(material_id).unwrap());

    let calculator = PricingCalculator::new(PricingConfig::default(), Vec::new());
    let custom = calculator.compute_price(&spec).unwrap();
    let builtin = calculator.compute_price(&reference_spec()).unwrap();

    // 與內建 BP2100 / Nylon 600 同參數，結果一致
    assert!((custom.production_cost - builtin.production_cost).abs() < 1e-12);

    catalog.disable_machine(machine_id).unwrap();
    assert!(matches!(
        catalog.machine(machine_id),
        Err(PricingError::UnknownCatalogEntry(_))
    ));
}

#[test]
fn test_default_hoop_catalog_selection() {
    let hoops = Hoop::default_catalog();
    let gutter = PricingConfig::default().gutter_cm;

    // 5 × 5：Regular 10x10 可繡 9.5 × 9.5 → floor(9.5 / 5.5) = 1
    let best = HoopSelector::best_for_quantity(5.0, 5.0, 40, &hoops, gutter).unwrap();
    assert_eq!(best.hoop.name, "Brother Large 18x30");
    assert_eq!(best.total_pieces, 15);
    assert_eq!(best.hoops_needed(40), Some(3));

    let by_shape = HoopSelector::best_for_shape(5.0, 5.0, &hoops, gutter).unwrap();
    assert!(by_shape.utilization_percent > 0.0);

    // 放不下任何繡框
    assert!(HoopSelector::best_for_shape(40.0, 40.0, &hoops, gutter).is_none());
}

#[test]
fn test_quote_flow_and_record() {
    let quoter = Quoter::with_defaults();
    let spec = reference_spec().with_quantity(50);
    let (response, record) = quoter.quote_record(&spec).unwrap();

    assert!((response.pricing.grand_total - 225.0).abs() < EPS);
    let fit = response.hoop.clone().unwrap();
    assert_eq!(record.hoop_name.as_deref(), Some(fit.hoop.name.as_str()));
    assert_eq!(record.pieces_per_hoop, Some(fit.total_pieces));
    assert_eq!(response.hoops_needed, fit.hoops_needed(50));

    let summary = record.decode();
    assert_eq!(summary.grand_total, Decimal::new(22500, 2));
    assert_eq!(summary.discount_percent, Decimal::new(10, 0));
    assert_eq!(summary.quantity, 50);

    let loaded = QuoteRecord::from_json_str(&record.to_json_string().unwrap()).unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn test_cart_consolidates_quotes() {
    let quoter = Quoter::with_defaults();
    let mut cart = QuoteCart::new();

    // 225.00 + 425.00 + 425.00 + 425.00 = 1500.00 → 10% 訂單折扣
    cart.add(&quoter, reference_spec().with_quantity(50)).unwrap();
    for _ in 0..3 {
        cart.add(&quoter, reference_spec().with_quantity(100)).unwrap();
    }

    let summary = cart.summary().unwrap();
    assert_eq!(summary.item_count, 4);
    assert!((summary.total_price - 1500.0).abs() < EPS);
    assert_eq!(summary.discount_percent, 10.0);
    assert!((summary.discounted_total - 1350.0).abs() < EPS);

    let cost: f64 = cart.items().iter().map(|item| item.total_cost()).sum();
    let expected_margin = (1350.0 - cost) / cost * 100.0;
    assert!((summary.margin_percent - expected_margin).abs() < EPS);

    // 移除一項 425.00 → 1075.00，仍為 10%
    let id = cart.items()[3].id;
    cart.remove(id).unwrap();
    let summary = cart.summary().unwrap();
    assert!((summary.total_price - 1075.0).abs() < EPS);
    assert_eq!(summary.discount_percent, 10.0);
    assert!((summary.discount_amount - 107.5).abs() < EPS);
}

#[test]
fn test_spec_defaults_follow_config_margin() {
    let config = PricingConfig {
        default_margin: 0.25,
        ..PricingConfig::default()
    };
    let quoter = Quoter::new(config, Vec::new(), Hoop::default_catalog());
    let spec = quoter.new_spec(Shape::Circular { diameter: 8.0 }, 12000, 5);

    assert!((spec.margin_percent - 25.0).abs() < EPS);
    let pricing = quoter.quote(&spec).unwrap().pricing;
    assert!((pricing.effective_margin - 0.25).abs() < EPS);
    assert!(!pricing.margin_below_minimum);
}
