use clap::Parser;
use scoutly::{cli, config, directory, error, logging, prompt, source};
use cli::{Cli, Commands};
use config::Config;
use directory::Directory;
use error::{Result, ScoutlyError};
use scoutly_common::RecordForm;
use source::DataSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load()?;

    let data = cli.data.clone().unwrap_or_else(|| config.data_path.clone());
    let source: DataSource = data.parse().map_err(ScoutlyError::Config)?;
    let favorites_path = config.favorites_file()?;

    match cli.command {
        Commands::List { query, markers } => {
            let mut directory = Directory::open(source, &favorites_path).await?;
            let session = directory.list(query.as_deref());
            let coordinator = session.coordinator();

            if markers {
                println!("🗺  地図マーカー");
                println!("{}\n", coordinator.markers().to_text());
            }

            let shown = coordinator.list().items().len();
            println!("{}", coordinator.list().to_text());
            println!("\n{}件 / 全{}件", shown, session.store().len());
        }

        Commands::Add { name, category, address, province, barangay, lat, lng, notes, no_prompt } => {
            println!("🏪 scoutly - 事業所追加\n");

            let mut directory = Directory::open_writable(source, &favorites_path).await?;
            let mut form = RecordForm {
                name: name.unwrap_or_default(),
                category: category.unwrap_or_default(),
                address: address.unwrap_or_default(),
                province: province.unwrap_or_default(),
                barangay: barangay.unwrap_or_default(),
                lat: lat.unwrap_or_default(),
                lng: lng.unwrap_or_default(),
                notes: notes.unwrap_or_default(),
            };
            if !no_prompt {
                prompt::fill_missing_fields(&mut form)?;
            }

            let created = directory.add(&form)?;
            if !created.has_valid_coordinates() {
                println!("⚠ 座標が数値ではないため地図には表示されません");
            }
            println!("✔ 追加しました: #{} {}", created.id, created.name);
        }

        Commands::Fav { id } => {
            let mut directory = Directory::open(source, &favorites_path).await?;
            let now_favorite = directory.toggle_favorite(id)?;
            if now_favorite {
                println!("★ お気に入りに追加: #{}", id);
            } else {
                println!("☆ お気に入りから削除: #{}", id);
            }
            println!("\n{}", directory.session().coordinator().list().to_text());
        }

        Commands::Export { output } => {
            let directory = Directory::open(source, &favorites_path).await?;
            let count = directory.export(&output)?;
            println!("✔ {}件を書き出しました: {}", count, output.display());
        }

        Commands::Import { input } => {
            let mut directory = Directory::open_writable(source, &favorites_path).await?;
            let count = directory.import(&input)?;
            println!("✔ {}件を取り込みました: {}", count, input.display());
        }

        Commands::Config { set_data, show } => {
            let mut config = config;

            if let Some(path) = set_data {
                config.set_data_path(path)?;
                println!("✔ データの場所を設定しました");
            }

            if show {
                println!("設定:");
                println!("  データ: {}", config.data_path);
                println!("  お気に入り: {}", config.favorites_file()?.display());
                println!("  地図中心: ({}, {}) ズーム {}", config.map.center_lat, config.map.center_lng, config.map.zoom);
            }
        }
    }

    Ok(())
}
