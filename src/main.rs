use clap::Parser;
use court_lookup::config::TomlConfig;
use court_lookup::core::ConfigProvider;
use court_lookup::utils::{logger, validation::Validate};
use court_lookup::{
    ApiClient, Cli, Command, ConsoleView, CourtDirectory, DownloadOutcome, FormController,
    FormOutcome, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting court-lookup CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 配置來源:指定 TOML 檔案時以檔案為準
    let (client, directory, download_dir) = match &cli.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            validate_or_exit(&file);
            let client = ApiClient::from_config(&file)?;
            (
                client,
                file.court_directory(),
                file.download_dir().to_string(),
            )
        }
        None => {
            let client = ApiClient::from_config(&cli)?;
            (client, CourtDirectory::default(), cli.download_dir.clone())
        }
    };

    let view = ConsoleView::new(cli.format, LocalStorage::new(download_dir));
    let controller = FormController::new(client, directory, view);

    let exit_code = match cli.command {
        Command::Search(args) => {
            validate_or_exit(&args);
            match controller.submit_case_search(args.into_query()).await {
                FormOutcome::Rendered => 0,
                _ => 1,
            }
        }
        Command::Causelist(args) => {
            validate_or_exit(&args);
            match controller.submit_cause_list_search(args.into_query()).await {
                FormOutcome::Rendered => 0,
                _ => 1,
            }
        }
        Command::Download(args) => {
            validate_or_exit(&args);
            match controller.request_download(args.into_request()).await {
                DownloadOutcome::Opened => 0,
                DownloadOutcome::Failed => 1,
            }
        }
        Command::Courts(args) => {
            controller.populate_court_names(&args.court_type).await;
            0
        }
        Command::CaseTypes => {
            for (abbreviation, full_name) in CourtDirectory::case_types() {
                println!("  {:<8}{}", abbreviation, full_name);
            }
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Lookup completed");
    Ok(())
}

fn validate_or_exit(target: &impl Validate) {
    if let Err(e) = target.validate() {
        tracing::error!("Validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }
}
