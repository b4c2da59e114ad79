use clap::Parser;
use joplin_frontmatter::utils::error::ErrorSeverity;
use joplin_frontmatter::utils::{logger, validation::Validate};
use joplin_frontmatter::{
    CliArgs, FrontmatterSync, HttpTransport, NoteClient, SyncConfig, SyncError,
};

fn exit_with(e: &SyncError) -> ! {
    tracing::error!(
        "❌ Sync failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_config(args: &CliArgs) -> joplin_frontmatter::Result<SyncConfig> {
    let config = args.resolve()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose, args.log_format);
    tracing::info!("Starting joplin-frontmatter");

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!(
        "Config: base_url={}, mode={:?}, page_size={}",
        config.source.base_url,
        config.run_mode(),
        config.run.page_size
    );

    if config.run.inspect {
        tracing::info!("🔍 Inspect mode - notes will not be modified");
    }

    let zone = match config.block_timezone() {
        Ok(zone) => zone,
        Err(e) => exit_with(&e),
    };
    let transport = match HttpTransport::new(&config.source) {
        Ok(transport) => transport,
        Err(e) => exit_with(&e),
    };
    let client = NoteClient::new(transport, config.run.page_size);
    let sync = FrontmatterSync::new(client, config.run_mode(), zone);

    let result = {
        let mut out = std::io::stdout().lock();
        sync.run(&mut out).await
    };

    match result {
        Ok(summary) => {
            tracing::info!("✅ Sync completed");
            if !config.run.inspect {
                println!(
                    "✅ Updated {} of {} notes ({} skipped)",
                    summary.notes_updated, summary.notes_found, summary.notes_skipped
                );
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
