use anyhow::Context;
use clap::Parser;
use sensor_size::cli::Cli;
use sensor_size::config::Config;
use sensor_size::SensorSizeResolver;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("設定の読み込みに失敗しました")?;
    let resolver = SensorSizeResolver::from_config(&config).context("初期化に失敗しました")?;

    match resolver.resolve(&cli.image_path) {
        Some(dims) => println!("{}", dims),
        None => println!("None"),
    }

    Ok(())
}
