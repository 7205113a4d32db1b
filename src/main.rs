use clap::Parser;
use guess_my_age::utils::{error::ErrorSeverity, logger, validation::Validate};
use guess_my_age::{CliConfig, ConsoleApp, GameEngine, RandomUserClient, TomlPreferencesStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting guess-my-age");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = RandomUserClient::from_config(&config)?;
    let store = TomlPreferencesStore::from_config(&config);
    let engine = GameEngine::load(source, store).await;

    let mut app = ConsoleApp::new(engine);
    if let Err(e) = app.run().await {
        tracing::error!(
            "❌ Game loop failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
