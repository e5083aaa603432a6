use openaq_history::{AirQualityHistory, HistoryError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), HistoryError> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let location = args.next().unwrap_or_else(|| "Kolkata".to_string());
    let months = args.next().and_then(|m| m.parse().ok()).unwrap_or(12);
    let country = args.next().unwrap_or_else(|| "IN".to_string());

    let client = AirQualityHistory::from_env()?;
    let series = client
        .history()
        .location(&location)
        .months(months)
        .country(&country)
        .call()
        .await?;

    match serde_json::to_string_pretty(&series) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to render series: {}", e),
    }

    Ok(())
}
