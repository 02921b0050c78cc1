use anyhow::Context;
use clap::Parser;
use small_utils::utils::error::ErrorSeverity;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{CliConfig, ConfigProvider, OutputFormat, Settings, TomlConfig, UtilityEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        },
        None => TomlConfig::default(),
    };

    let settings = Settings::from_provider(&file_config).with_overrides(cli.format, cli.verbose);

    // 初始化日誌
    match settings.output_format() {
        OutputFormat::Json => logger::init_json_logger(settings.verbose()),
        OutputFormat::Plain => logger::init_cli_logger(settings.verbose()),
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let engine = UtilityEngine::new(settings);

    match engine.run(cli.command.into()) {
        Ok(outcome) => {
            let rendered = outcome
                .render(engine.config().output_format())
                .context("failed to render output")?;
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
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
    }

    Ok(())
}
