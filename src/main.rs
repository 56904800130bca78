mod client;
mod config;
mod error;
mod gateway;
mod service;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::{
    config::{Config, Credentials},
    gateway::{GatewayClient, Lookup},
    service::{CreatePix, HistoryQuery, ServiceClient},
};

#[derive(Parser)]
#[command(author, version, about = "PIX payments from the command line", long_about = None)]
struct Cli {
    /// Payment gateway base URL [env: BOLT_BASE_URL]
    #[arg(long, global = true)]
    gateway_url: Option<String>,

    /// Local payment service base URL [env: PIX_SERVICE_URL]
    #[arg(long, global = true)]
    service_url: Option<String>,

    /// Request timeout in seconds [env: HTTP_TIMEOUT_SECS]
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a gateway transaction by its external id
    Transaction { external_id: String },

    /// Create a PIX charge through the local service
    CreatePix {
        /// API key of the account issuing the charge
        #[arg(long)]
        api: String,
        #[arg(long)]
        amount: Decimal,
        /// Payer name
        #[arg(long)]
        name: String,
        /// Payer CPF/CNPJ
        #[arg(long)]
        document: String,
    },

    /// Show the balance of an account
    Balance { email: String },

    /// List the transactions of an account, newest first
    History {
        email: String,
        #[arg(long)]
        status: Option<String>,
        /// Payment method, e.g. PIX
        #[arg(long)]
        method: Option<String>,
        #[arg(long, default_value_t = HistoryQuery::DEFAULT_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = load_config(&cli)?;
    let http = client::build(config.timeout)?;

    match cli.command {
        Command::Transaction { external_id } => {
            let credentials =
                Credentials::from_env().context("gateway credentials are required")?;
            let gateway = GatewayClient::new(http, config.gateway_url, credentials);

            let lookup = gateway
                .transaction(&external_id)
                .await
                .context("could not verify transaction")?;

            match lookup {
                Lookup::Found(data) => {
                    println!("transaction found");
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                Lookup::NotFound(message) => {
                    let message = message.as_deref().unwrap_or("(no message)");
                    println!("transaction not found: {message}");
                }
            }
        }
        Command::CreatePix {
            api,
            amount,
            name,
            document,
        } => {
            let service = ServiceClient::new(http, config.service_url);
            let req = CreatePix {
                api,
                amount,
                name,
                document,
            };

            let created = service
                .create_pix(&req)
                .await
                .context("could not create pix")?;

            println!("status: {}", created.status.as_u16());
            println!("{}", serde_json::to_string_pretty(&created.body)?);

            if let Some(charge) = created.charge() {
                println!("pix code: {}", charge.code);

                if let Some(qr) = charge.base64 {
                    println!("pix qr (base64 png): {qr}");
                }
            }
        }
        Command::Balance { email } => {
            let service = ServiceClient::new(http, config.service_url);

            let balance = service
                .balance(&email)
                .await
                .context("could not fetch balance")?;

            println!("balance: {}", balance.balance);

            if let Some(message) = &balance.message {
                println!("{message}");
            }
            if let Some(active) = balance.active {
                println!("active: {active}");
            }
            if let Some(fee) = balance.fee {
                println!("fee: {fee}");
            }
            if let Some(api) = balance.api_key() {
                println!("api: {api}");
            }
        }
        Command::History {
            email,
            status,
            method,
            limit,
        } => {
            let service = ServiceClient::new(http, config.service_url);
            let query = HistoryQuery {
                email,
                status,
                method,
                limit,
            };

            let history = service
                .history(&query)
                .await
                .context("could not fetch transactions")?;

            for tx in &history.transactions {
                println!("{tx}");
            }

            println!("total: {}", history.total);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(url) = &cli.gateway_url {
        config.gateway_url =
            config::parse_url("--gateway-url", Some(url.clone()), config::DEFAULT_GATEWAY_URL)?;
    }

    if let Some(url) = &cli.service_url {
        config.service_url =
            config::parse_url("--service-url", Some(url.clone()), config::DEFAULT_SERVICE_URL)?;
    }

    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
