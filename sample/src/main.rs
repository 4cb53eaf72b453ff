//! Fixed demonstration of the division client.
//!
//! Takes no arguments. The target server comes from `NAMEDIVIDER_BASE_URL`
//! (default `http://localhost:8000`). Each demonstration step that fails is
//! logged and skipped; the process still exits normally.

use namedivider_client::{ApiError, ClientConfig, DividedName, DivisionClient, MODE_BASIC, MODE_GBDT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TEST_NAMES: [&str; 4] = ["原敬", "菅義偉", "安倍晋三", "中曽根康弘"];
const SINGLE_NAME: &str = "小泉純一郎";

fn init_logger() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("namedivider_sample=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn print_results(inputs: &[&str], results: &[DividedName]) {
    for (i, (input, result)) in inputs.iter().zip(results).enumerate() {
        println!(
            "{}. {} -> {} {} (score: {:.4})",
            i + 1,
            input,
            result.family,
            result.given,
            result.score
        );
    }
}

fn first_pair(results: &[DividedName]) -> (&str, &str) {
    results
        .first()
        .map(|r| (r.family.as_str(), r.given.as_str()))
        .unwrap_or(("", ""))
}

fn show_basic(client: &DivisionClient) -> Result<(), ApiError> {
    let results = client.divide_basic(&TEST_NAMES)?;
    println!("BasicNameDivider Results:");
    print_results(&TEST_NAMES, &results);
    Ok(())
}

fn show_gbdt(client: &DivisionClient) -> Result<(), ApiError> {
    let results = client.divide_gbdt(&TEST_NAMES)?;
    println!("\nGBDTNameDivider Results:");
    print_results(&TEST_NAMES, &results);
    Ok(())
}

fn show_generic(client: &DivisionClient) -> Result<(), ApiError> {
    let basic = client.divide(&TEST_NAMES, MODE_BASIC)?;
    let gbdt = client.divide(&TEST_NAMES, MODE_GBDT)?;
    println!("\nGeneric divide() with explicit mode:");
    let (family, given) = first_pair(&basic);
    println!("basic example: {family} {given}");
    let (family, given) = first_pair(&gbdt);
    println!("gbdt example: {family} {given}");
    Ok(())
}

fn show_single(client: &DivisionClient) -> Result<(), ApiError> {
    let results = client.divide_basic(&[SINGLE_NAME])?;
    let (family, given) = first_pair(&results);
    println!("\nSingle name: {SINGLE_NAME} -> {family} {given}");
    Ok(())
}

fn main() {
    init_logger();

    let client = DivisionClient::with_config(ClientConfig::from_env());
    tracing::info!(base_url = client.base_url(), "running division samples");

    let steps: [(&str, fn(&DivisionClient) -> Result<(), ApiError>); 4] = [
        ("basic", show_basic),
        ("gbdt", show_gbdt),
        ("generic", show_generic),
        ("single", show_single),
    ];
    for (step, run) in steps {
        if let Err(e) = run(&client) {
            tracing::error!(step, error = %e, "sample step failed");
        }
    }

    println!("\nSamples finished.");
}
