use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stackexchange_client::client::Client;
use stackexchange_client::config::Config;
use stackexchange_client::constants::USER_AGENT;
use stackexchange_client::endpoint;
use stackexchange_client::models::{Answer, Question};
use stackexchange_client::params::{Order, Params, Sort};
use stackexchange_client::wrapper::Wrapper;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        site = %config.site,
        count = config.question_count,
        "Fetching top questions"
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client");
    let client = Client {
        http,
        root: config.root.clone(),
        access_token: config.access_token.clone(),
        key: config.key.clone(),
    };

    scrape_questions(&client, &config).await
}

/// Fetch the top questions and print each with its best answer.
async fn scrape_questions(client: &Client, config: &Config) -> Result<()> {
    let params = Params {
        site: config.site.clone(),
        sort: Some(config.sort),
        order: Some(Order::Desc),
        page_size: config.question_count,
        ..Params::default()
    };
    let (wrapper, questions): (Wrapper, Vec<Question>) = client
        .request(endpoint::QUESTIONS, &params)
        .await
        .context("Failed to fetch questions")?;
    if let Some(api_error) = &wrapper.error {
        anyhow::bail!("API refused the question listing: {api_error}");
    }
    report_wrapper(&wrapper);

    for question in &questions {
        println!("{} (ID={})", question.title, question.id);

        // A dead answer fetch shouldn't kill the whole scrape.
        match fetch_top_answer(client, config, question.id).await {
            Ok(Some(answer)) => {
                println!("  {} {}", answer.score, answer.body.as_deref().unwrap_or(""));
            }
            Ok(None) => println!("  (no answers)"),
            Err(e) => warn!(question_id = question.id, "Failed to fetch answers: {e:#}"),
        }
    }

    Ok(())
}

/// Fetch the highest-scored answer to a question, if any.
async fn fetch_top_answer(
    client: &Client,
    config: &Config,
    question_id: u64,
) -> Result<Option<Answer>> {
    let params = Params {
        site: config.site.clone(),
        sort: Some(Sort::Score),
        order: Some(Order::Desc),
        page_size: 1,
        filter: config.filter.clone(),
        args: vec![question_id.to_string()],
        ..Params::default()
    };
    let (wrapper, answers): (Wrapper, Vec<Answer>) = client
        .request(endpoint::QUESTION_ANSWERS, &params)
        .await?;
    if let Some(api_error) = &wrapper.error {
        return Err(api_error.clone().into());
    }
    report_wrapper(&wrapper);

    Ok(answers.into_iter().next())
}

fn report_wrapper(wrapper: &Wrapper) {
    debug!(
        quota_remaining = wrapper.quota_remaining,
        quota_max = wrapper.quota_max,
        "Quota"
    );
    if let Some(delay) = wrapper.backoff_duration() {
        warn!(
            seconds = delay.as_secs(),
            "API asked for backoff before the next request"
        );
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stackexchange_client=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
