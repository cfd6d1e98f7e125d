use clap::Parser;
use naild_studio::app::commands;
use naild_studio::core::toast::ToastLevel;
use naild_studio::domain::ports::ConfigProvider;
use naild_studio::utils::error::ErrorSeverity;
use naild_studio::utils::{logger, validation::Validate};
use naild_studio::{ApiClient, CliConfig, Toasts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting naild");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let settings = config.settings()?;
    let client = ApiClient::new(&settings)?;
    tracing::debug!("Using API at {}", client.base_url());

    let toasts = Toasts::new();
    let today = chrono::Local::now().date_naive();
    let mut stdout = std::io::stdout();

    let outcome = commands::run(
        &config.command,
        &client,
        settings.read_failure_policy(),
        &toasts,
        today,
        &mut stdout,
    )
    .await;

    let mut error_shown = false;
    for toast in toasts.drain() {
        match toast.level {
            ToastLevel::Success => println!("✅ {}", toast.message),
            ToastLevel::Error => {
                error_shown = true;
                eprintln!("❌ {}", toast.message);
            }
        }
    }

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        if !error_shown {
            eprintln!("❌ {}", e.user_friendly_message());
        }
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
