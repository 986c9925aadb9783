//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod demo;
pub mod interactive;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use demo::run_demo;
pub use interactive::run_interactive;
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
