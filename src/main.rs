use anyhow::Context;
use clap::Parser;
use signup_guard::core::ConfigProvider;
use signup_guard::utils::{logger, validation::Validate};
use signup_guard::{CliConfig, Feedback, FlowController, LocalStorage, Submission, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    match run(cli) {
        Ok(feedback) => {
            if feedback.is_success() {
                println!("✅ {}", feedback.text());
            } else {
                eprintln!("{}", feedback.text());
                if let Some(field) = feedback.focus {
                    eprintln!("💡 Check the '{}' field", field);
                }
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Submission failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: CliConfig) -> anyhow::Result<Feedback> {
    // 載入 TOML 配置 (未指定時使用預設值)
    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(dir) = &cli.store_dir {
        config.store.base_dir = dir.clone();
    }
    if let Some(origin) = &cli.origin {
        config.store.origin = origin.clone();
    }

    // 初始化日誌
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose || config.verbose());
    }

    config.validate().map_err(|e| {
        tracing::error!("❌ Configuration validation failed: {}", e);
        anyhow::anyhow!(e.user_friendly_message())
    })?;

    tracing::debug!(
        "Using store {} for origin {}",
        config.store_dir(),
        config.origin()
    );

    let storage = LocalStorage::new(config.store_dir().to_string(), config.origin().to_string());
    let mut controller = FlowController::new(storage);

    let feedback = match Submission::from(cli.command) {
        Submission::Register(mut form) => controller.submit_registration(&mut form)?,
        Submission::Login(mut form) => controller.submit_login(&mut form)?,
    };

    Ok(feedback)
}
