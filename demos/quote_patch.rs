//! 布章報價示例
//!
//! RUST_LOG=debug cargo run --example quote_patch

use anyhow::Context;
use patch_pricing::{Fixation, Machine, QuoteCart, Quoter, Shape};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== 布章報價示例 ===\n");

    let quoter = Quoter::with_defaults();
    tracing::info!("已載入 {} 個繡框", quoter.hoops().len());
    let shape = Shape::Rectangular {
        long_side: 12.0,
        short_side: 9.0,
    };
    let spec = quoter
        .new_spec(shape, 28000, 14)
        .with_fixation(Fixation::ThermoAdhesive)
        .with_machine(Machine::Bp2100)
        .with_quantity(50);

    let (response, record) = quoter.quote_record(&spec).context("報價失敗")?;
    let pricing = &response.pricing;

    println!("成本明細:");
    println!("  - 材料: {:.2}", pricing.materials_cost);
    println!("  - 繡線: {:.2}", pricing.thread_cost);
    println!("  - 能源: {:.2}", pricing.energy_cost);
    println!("  - 技術費: {:.2}", pricing.technical_fee);
    println!("  - 固定附加費: {:.2}", pricing.fixation_surcharge);
    println!("  - 生產成本: {:.2}", pricing.production_cost);
    println!();
    println!("單價: {:.2}（折扣 {}%）", pricing.final_unit_price, pricing.discount_percent);
    println!("總額: {:.2}", pricing.grand_total);

    for warning in &pricing.warnings {
        println!("警告 [{}]: {}", warning.code, warning.message);
    }

    match (&response.hoop, response.hoops_needed) {
        (Some(fit), Some(needed)) => println!(
            "\n建議繡框: {}（每框 {} 件，使用率 {:.1}%，共 {} 框）",
            fit.hoop.name, fit.total_pieces, fit.utilization_percent, needed
        ),
        _ => println!("\n沒有可用的繡框"),
    }

    println!("\n儲存記錄:\n{}", record.to_json_string().context("記錄序列化失敗")?);

    let mut cart = QuoteCart::new();
    cart.add(&quoter, spec).context("加入購物車失敗")?;
    let badge = quoter
        .new_spec(Shape::Circular { diameter: 8.0 }, 12000, 5)
        .with_fixation(Fixation::Velcro)
        .with_quantity(200);
    cart.add(&quoter, badge).context("加入購物車失敗")?;

    let summary = cart.summary().context("購物車彙總失敗")?;
    println!(
        "\n購物車 ({} 項，預設毛利 {:.0}%):",
        summary.item_count,
        quoter.config().default_margin_percent()
    );
    println!("  - 總成本: {:.2}", summary.total_cost);
    println!("  - 總額: {:.2}", summary.total_price);
    println!("  - 訂單折扣: {}%（{:.2}）", summary.discount_percent, summary.discount_amount);
    println!("  - 折扣後: {:.2}", summary.discounted_total);
    println!("  - 毛利: {:.2}（{:.1}%）", summary.margin_amount, summary.margin_percent);

    Ok(())
}
