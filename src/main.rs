use clap::Parser;
use litfetch::domain::ports::ConfigProvider;
use litfetch::utils::{logger, validation::Validate};
use litfetch::{CliConfig, CrossrefClient, LiteratureFetcher, OpenAlexClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting litfetch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let works = CrossrefClient::from_config(&config)?;
    let citations = OpenAlexClient::from_config(&config)?;
    let fetcher = LiteratureFetcher::new(works, citations, config.courtesy_delay());

    match fetcher.fetch(&config.doi).await {
        Ok(record) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{}", json);
            tracing::info!("✅ Literature lookup completed for {}", config.doi);
        }
        Err(failure) => {
            // 錯誤也是資料：輸出單欄位錯誤記錄
            let json = if config.pretty {
                serde_json::to_string_pretty(&failure)?
            } else {
                serde_json::to_string(&failure)?
            };
            println!("{}", json);
            tracing::error!("❌ Literature lookup failed: {}", failure.error);
            std::process::exit(1);
        }
    }

    Ok(())
}
