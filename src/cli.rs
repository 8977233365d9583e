use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoutly")]
#[command(about = "事業所ディレクトリ（一覧・検索・お気に入り・入出力）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 事業所データ（ファイルパスまたはhttp(s) URL、デフォルトは設定値）
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 事業所一覧を表示（検索語で絞り込み）
    List {
        /// 検索語（名称・住所・州・バランガイ）
        #[arg(short, long)]
        query: Option<String>,

        /// 地図マーカーも表示
        #[arg(short, long)]
        markers: bool,
    },

    /// 事業所を追加（未指定の項目は対話入力）
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        province: Option<String>,

        #[arg(long)]
        barangay: Option<String>,

        /// 緯度
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,

        /// 経度
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// 対話入力をしない（未指定の項目は空）
        #[arg(long)]
        no_prompt: bool,
    },

    /// お気に入りを切り替え
    Fav {
        /// 事業所ID
        id: i64,
    },

    /// 事業所データをJSONに書き出し
    Export {
        /// 出力ファイル
        #[arg(short, long, default_value = scoutly_common::EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// JSONファイルで事業所データを置き換え
    Import {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定の表示・変更
    Config {
        /// データの既定パスを設定
        #[arg(long)]
        set_data: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
