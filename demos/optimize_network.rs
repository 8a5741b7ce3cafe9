//! # 電網負載平衡範例
//!
//! 用法：
//!
//! ```bash
//! # 使用內建範例電網
//! cargo run --example optimize_network
//!
//! # 讀取檔案，優化後寫出
//! RUST_LOG=debug cargo run --example optimize_network -- reseau.txt reseau_opt.txt
//! ```

use powernet::{
    ConsumptionLevel, Generator, House, MultiStartOptimizer, Network, NetworkReader,
    NetworkWriter, OptimizerConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // ========== 1. 載入電網 ==========
    let network = match args.first() {
        Some(path) => NetworkReader::read_path(path)?,
        None => sample_network()?,
    };

    println!("===== 初始電網 =====");
    println!("{network}");
    print_summary(&network);

    for issue in network.validate() {
        println!("   ⚠ {issue}");
    }

    // ========== 2. 多起點優化 ==========
    let config = OptimizerConfig::new(10).with_seed(42);
    let result = MultiStartOptimizer::new(config)?.optimize(&network)?;

    println!();
    println!("===== 優化後電網 =====");
    println!("{}", result.network);
    print_summary(&result.network);

    println!();
    for outcome in &result.restarts {
        println!(
            "   起點 #{:<2} {:?}: {:.6} -> {:.6}",
            outcome.index, outcome.seed_kind, outcome.seed_cost, outcome.final_cost
        );
    }
    println!(
        "   改善 {:.6}，耗時 {} ms",
        result.improvement(),
        result.calculation_time_ms
    );

    // ========== 3. 寫出 ==========
    if let Some(output) = args.get(1) {
        NetworkWriter::write_path(&result.network, output)?;
        println!("   ✓ 已寫出 {output}");
    }

    Ok(())
}

fn sample_network() -> Result<Network, powernet::PowerNetError> {
    let mut network = Network::new();
    network.add_generator(Generator::new("gen1", 120));
    network.add_generator(Generator::new("gen2", 80));
    network.add_generator(Generator::new("gen3", 60));

    let levels = [
        ConsumptionLevel::High,
        ConsumptionLevel::Normal,
        ConsumptionLevel::Low,
        ConsumptionLevel::High,
        ConsumptionLevel::Normal,
        ConsumptionLevel::Normal,
        ConsumptionLevel::Low,
    ];
    for (i, level) in levels.into_iter().enumerate() {
        let name = format!("m{}", i + 1);
        network.add_house(House::new(name.clone(), level));
        network.connect(&name, "gen1")?;
    }

    Ok(network)
}

fn print_summary(network: &Network) {
    let breakdown = network.cost_breakdown();
    println!(
        "   需求 {} / 容量 {}，離散度 {:.6}，過載 {:.6}，成本 {:.6}",
        network.total_demand(),
        network.total_capacity(),
        breakdown.dispersion,
        breakdown.surcharge,
        breakdown.cost
    );
}
