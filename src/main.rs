use clap::Parser;
use helm_kanvas_snapshot::utils::{logger, validation::Validate};
use helm_kanvas_snapshot::{CliArgs, Settings, SnapshotEngine, SnapshotError, SnapshotReport};

async fn run(args: &CliArgs) -> Result<SnapshotReport, SnapshotError> {
    let settings = Settings::load(args.config.as_deref())?;
    tracing::debug!("Settings: {:?}", settings);
    settings.validate()?;

    let engine = SnapshotEngine::from_settings(&settings)?;
    engine.run(args.snapshot_request()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("Starting helm-kanvas-snapshot for {}", args.file);

    match run(&args).await {
        Ok(report) => {
            tracing::info!(
                "✅ Snapshot requested for design {} ({})",
                report.design_id,
                report.design_name
            );
            println!("{}", report.closing_message());
        }
        Err(e) => {
            // 日誌保留分類與狀態碼，stderr 只給使用者看的訊息
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if let Some(status) = e.api_error().and_then(|api| api.status()) {
                tracing::error!("HTTP status: {}", status);
            }

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
