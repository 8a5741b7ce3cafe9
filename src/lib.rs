//! # PowerNet
//!
//! 電網負載平衡：資料模型、多起點優化與文字檔讀寫
//!
//! ```no_run
//! use powernet::{optimize_file, OptimizerConfig};
//!
//! let config = OptimizerConfig::new(10).with_seed(7);
//! let report = optimize_file("reseau.txt", "reseau_opt.txt", 10.0, config)?;
//! println!("成本 {:.4} -> {:.4}", report.initial_cost, report.best_cost);
//! # Ok::<(), powernet::Error>(())
//! ```

use std::path::Path;

// Re-export 主要類型
pub use powernet_core::{
    ConsumptionLevel, CostBreakdown, Generator, House, Network, PowerNetError, StructuralIssue,
    DEFAULT_LAMBDA,
};
pub use powernet_io::{IoError, NetworkReader, NetworkWriter, ParseError, ParseErrorKind};
pub use powernet_optimizer::{
    optimize_multi_start, MultiStartOptimizer, OptimizationResult, OptimizerConfig,
    OptimizerError,
};

/// 統一錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] PowerNetError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Optimizer(#[from] OptimizerError),

    #[error("電網結構無效（{} 個問題）: {}", .0.len(), format_issues(.0))]
    InvalidNetwork(Vec<StructuralIssue>),
}

fn format_issues(issues: &[StructuralIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("；")
}

pub type Result<T> = std::result::Result<T, Error>;

/// 讀取電網檔案、優化後寫出
///
/// 檔案不保存懲罰權重，讀入後套用 `lambda`。讀檔失敗或電網結構無效時
/// 不會寫出任何檔案。
pub fn optimize_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    lambda: f64,
    config: OptimizerConfig,
) -> Result<OptimizationResult> {
    let mut network = NetworkReader::read_path(input.as_ref())?;
    network.set_lambda(lambda)?;

    let issues = network.validate();
    if !issues.is_empty() {
        tracing::warn!("電網有 {} 個結構問題，停止優化", issues.len());
        return Err(Error::InvalidNetwork(issues));
    }

    let mut optimizer = MultiStartOptimizer::new(config)?;
    let result = optimizer.optimize(&network)?;

    NetworkWriter::write_path(&result.network, output.as_ref())?;
    tracing::info!(
        "已寫出優化結果: {}（成本 {:.6} -> {:.6}）",
        output.as_ref().display(),
        result.initial_cost,
        result.best_cost
    );

    Ok(result)
}
