use clap::Parser;
use quake_watch::utils::{error::QuakeError, logger, validation::Validate};
use quake_watch::{CliConfig, HttpPageSource, QuakePipeline, ReportEngine};

fn fail(e: QuakeError) -> ! {
    tracing::error!("❌ {} (exit code {})", e, e.exit_code());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    // 合併配置檔與命令列參數並驗證
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    if let Err(e) = settings.validate() {
        fail(e);
    }
    tracing::debug!("Settings: {:?}", settings);

    let source = match HttpPageSource::new(settings.timeout) {
        Ok(source) => source,
        Err(e) => fail(e.into()),
    };
    let pipeline = match QuakePipeline::new(source, settings) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    match ReportEngine::new(pipeline).run().await {
        Ok(report) => print!("{}", report),
        Err(e) => fail(e),
    }
}
