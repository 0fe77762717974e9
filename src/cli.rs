use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sensor-size")]
#[command(version)]
#[command(about = "写真のEXIFからカメラのセンサーサイズ(mm)を取得", long_about = None)]
pub struct Cli {
    /// 画像ファイルのパス
    #[arg(long = "imagePath", value_name = "PATH")]
    pub image_path: PathBuf,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
