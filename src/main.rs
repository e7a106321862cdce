//! bopalyzer 命令行入口
//! Usage: bopalyzer <URL>

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bopalyzer::{ConfigManager, TechDetector};

/// Detect the technologies behind a web endpoint
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target URL to analyze
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // 缺少参数时 clap 输出用法到 stderr 并以非零状态退出
    let cli = Cli::parse();

    let detector = TechDetector::new(&ConfigManager::get_default())?;
    let Some(report) = detector.scan(&cli.url).await? else {
        return Ok(());
    };

    println!("Detected technologies for {}:", cli.url);
    print!("{}", report);
    Ok(())
}
