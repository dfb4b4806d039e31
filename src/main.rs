use clap::Parser;
use fx_snapshot::utils::{logger, validation::Validate};
use fx_snapshot::{
    CliConfig, Command, DateSpec, FxConfig, FxError, HttpSource, RateResolver, SnapshotFetcher,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: &CliConfig) -> Result<String, FxError> {
    let config = cli.resolve()?;
    config.validate()?;

    let source = HttpSource::new(&config.source)?;

    match &cli.command {
        Command::Currencies => {
            let currencies = fetcher(&source, &config)?.currencies().await?;
            tracing::info!("Fetched {} currencies", currencies.len());
            Ok(serde_json::to_string_pretty(&currencies)?)
        }
        Command::Latest { clean } => {
            let mut document = fetcher(&source, &config)?.latest().await?;
            if *clean {
                document = document.cleaned();
            }
            Ok(serde_json::to_string_pretty(&document)?)
        }
        Command::Historical { date, clean } => {
            let mut document = fetcher(&source, &config)?
                .historical(DateSpec::from(date.as_str()))
                .await?;
            if *clean {
                document = document.cleaned();
            }
            Ok(serde_json::to_string_pretty(&document)?)
        }
        Command::Rate { currency, date } => {
            let resolver = RateResolver::from_config(&source, &config)?;
            let date = date.as_deref().map(DateSpec::from);
            let rate = resolver.rate(currency, date).await?;
            tracing::info!("{} per {} = {}", currency, resolver.expected_base(), rate);
            Ok(rate.to_string())
        }
    }
}

fn fetcher<'a>(
    source: &'a HttpSource,
    config: &FxConfig,
) -> Result<SnapshotFetcher<&'a HttpSource>, FxError> {
    SnapshotFetcher::from_config(source, config)
}
