use anyhow::Result;
use chrono::NaiveDate;
use fx_snapshot::config::FxConfig;
use fx_snapshot::{DateSpec, Endpoint, FxError, HttpSource, RateResolver};
use httpmock::prelude::*;

const HIST_2012_01_01: &str = include_str!("fixtures/historical/2012-01-01.json");
const LATEST: &str = include_str!("fixtures/latest.json");
const LATEST_EUR_BASE: &str = include_str!("fixtures/latest_eur_base.json");

fn serve<'a>(server: &'a MockServer, path: &str, body: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body);
    })
}

#[tokio::test]
async fn test_compact_date_requests_canonical_file() -> Result<()> {
    let server = MockServer::start();
    let mock = serve(&server, "/historical/2012-01-01.json", HIST_2012_01_01);

    let resolver = RateResolver::new(HttpSource::default(), Endpoint::new(&server.base_url())?);
    let rate = resolver.rate("EUR", Some(DateSpec::from("120101"))).await?;

    mock.assert();
    assert_eq!(rate, 0.77151);
    Ok(())
}

#[tokio::test]
async fn test_date_and_compact_forms_agree() -> Result<()> {
    let server = MockServer::start();
    let mock = serve(&server, "/historical/2012-01-01.json", HIST_2012_01_01);

    let resolver = RateResolver::new(HttpSource::default(), Endpoint::new(&server.base_url())?);
    let compact = resolver.rate_on("GBP", "120101").await?;
    let date = resolver
        .rate_on("GBP", NaiveDate::from_ymd_opt(2012, 1, 1).unwrap())
        .await?;

    mock.assert_hits(2);
    assert_eq!(compact, date);
    Ok(())
}

#[tokio::test]
async fn test_latest_rate() -> Result<()> {
    let server = MockServer::start();
    let mock = serve(&server, "/latest.json", LATEST);

    let resolver = RateResolver::new(HttpSource::default(), Endpoint::new(&server.base_url())?);
    let rate = resolver.latest_rate("JPY").await?;

    mock.assert();
    assert_eq!(rate, 78.54);
    Ok(())
}

#[tokio::test]
async fn test_unexpected_base_currency() {
    let server = MockServer::start();
    let mock = serve(&server, "/latest.json", LATEST_EUR_BASE);

    let resolver =
        RateResolver::new(HttpSource::default(), Endpoint::new(&server.base_url()).unwrap());
    let err = resolver.rate("EUR", None).await.unwrap_err();

    mock.assert();
    assert!(matches!(
        err,
        FxError::UnexpectedBaseCurrency { ref expected, ref actual }
            if expected == "USD" && actual == "EUR"
    ));
}

#[tokio::test]
async fn test_unknown_currency() {
    let server = MockServer::start();
    let mock = serve(&server, "/historical/2012-01-01.json", HIST_2012_01_01);

    let resolver =
        RateResolver::new(HttpSource::default(), Endpoint::new(&server.base_url()).unwrap());
    let err = resolver.rate_on("XYZ", "120101").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FxError::CurrencyNotFound { ref currency } if currency == "XYZ"));
}

#[tokio::test]
async fn test_shared_source_across_components() -> Result<()> {
    let server = MockServer::start();
    let mock = serve(&server, "/latest.json", LATEST_EUR_BASE);

    let mut config = FxConfig::default();
    config.source.base_url = server.base_url();
    config.rates.expected_base = "EUR".to_string();

    let source = HttpSource::new(&config.source)?;
    let resolver = RateResolver::from_config(&source, &config)?;
    let fetcher = fx_snapshot::SnapshotFetcher::from_config(&source, &config)?;

    let usd = resolver.latest_rate("USD").await?;
    let document = fetcher.latest().await?;

    mock.assert_hits(2);
    assert_eq!(usd, document.rates["USD"]);
    Ok(())
}
