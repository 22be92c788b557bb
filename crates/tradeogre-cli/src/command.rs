/*
[INPUT]:  Parsed subcommand and the clients built from CLI configuration
[OUTPUT]: JSON value of the endpoint response
[POS]:    Command layer - maps subcommands onto adapter calls
[UPDATE]: When adding subcommands or adapter endpoints
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tradeogre_adapter::{AuthenticatedClient, OrderDirection, TradeOgreClient};

use crate::config::{CliConfig, MISSING_CREDENTIALS};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every market with its 24h statistics
    Markets,
    /// Order book of a market
    Book { market: String },
    /// 24h ticker of a market
    Ticker { market: String },
    /// Recent trades of a market
    History { market: String },
    /// Place a limit buy order
    Buy {
        market: String,
        quantity: String,
        price: String,
    },
    /// Place a limit sell order
    Sell {
        market: String,
        quantity: String,
        price: String,
    },
    /// Cancel one order, or every order with --all
    Cancel {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        uuid: Option<String>,
        #[arg(long)]
        all: bool,
    },
    /// Open orders, optionally for one market
    Orders {
        #[arg(long)]
        market: Option<String>,
    },
    /// Balance of one currency
    Balance { currency: String },
    /// Balances of every currency
    Balances,
}

impl Command {
    /// Whether the command hits a private endpoint
    pub fn needs_credentials(&self) -> bool {
        !matches!(
            self,
            Command::Markets
                | Command::Book { .. }
                | Command::Ticker { .. }
                | Command::History { .. }
        )
    }
}

/// Clients a command runs against, built once per invocation
#[derive(Debug, Clone)]
pub struct Clients {
    pub public: TradeOgreClient,
    /// Present only when the command hits a private endpoint
    pub private: Option<AuthenticatedClient>,
}

impl Clients {
    /// Build the public client, plus the authenticated one when `command` needs it
    ///
    /// Fails without network I/O when a private command has no credentials.
    pub fn connect(config: &CliConfig, command: Option<&Command>) -> Result<Self> {
        let public = config.build_client()?;
        let private = match command {
            Some(command) if command.needs_credentials() => Some(config.authenticate(&public)?),
            _ => None,
        };
        Ok(Self { public, private })
    }

    fn private(&self) -> Result<&AuthenticatedClient> {
        self.private.as_ref().context(MISSING_CREDENTIALS)
    }
}

pub async fn run(command: &Command, clients: &Clients) -> Result<Value> {
    let client = &clients.public;
    match command {
        Command::Markets => to_json(client.list_markets().await?),
        Command::Book { market } => to_json(client.get_order_book(market).await?),
        Command::Ticker { market } => to_json(client.get_ticker(market).await?),
        Command::History { market } => to_json(client.get_trade_history(market).await?),
        Command::Buy {
            market,
            quantity,
            price,
        } => submit(clients.private()?, OrderDirection::Buy, market, quantity, price).await,
        Command::Sell {
            market,
            quantity,
            price,
        } => submit(clients.private()?, OrderDirection::Sell, market, quantity, price).await,
        Command::Cancel { uuid, .. } => {
            let private = clients.private()?;
            let result = match uuid {
                Some(uuid) => private.cancel_order(uuid).await?,
                None => private.cancel_all_orders().await?,
            };
            to_json(result)
        }
        Command::Orders { market } => {
            to_json(clients.private()?.get_orders(market.as_deref()).await?)
        }
        Command::Balance { currency } => to_json(clients.private()?.get_balance(currency).await?),
        Command::Balances => to_json(clients.private()?.get_balances().await?),
    }
}

async fn submit(
    private: &AuthenticatedClient,
    direction: OrderDirection,
    market: &str,
    quantity: &str,
    price: &str,
) -> Result<Value> {
    info!(%direction, market, quantity, price, "submitting order");
    let result = private
        .submit_order(direction, market, quantity, price)
        .await?;
    if !result.success {
        info!(error = ?result.error, "order rejected");
    }
    to_json(result)
}

fn to_json(value: impl Serialize) -> Result<Value> {
    serde_json::to_value(value).context("serialize response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> std::result::Result<Command, clap::Error> {
        Harness::try_parse_from(std::iter::once("tradeogre").chain(args.iter().copied()))
            .map(|harness| harness.command)
    }

    fn config_for(server: &MockServer, credentials: bool) -> CliConfig {
        let config = CliConfig {
            api_url: Some(format!("{}/api/v1/", server.uri())),
            ..CliConfig::default()
        };
        if credentials {
            config.with_credentials_override(Some("key".into()), Some("secret".into()))
        } else {
            config
        }
    }

    #[test]
    fn test_parse_cancel_variants() {
        assert_eq!(
            parse(&["cancel", "abc"]).unwrap(),
            Command::Cancel {
                uuid: Some("abc".to_string()),
                all: false
            }
        );
        assert_eq!(
            parse(&["cancel", "--all"]).unwrap(),
            Command::Cancel {
                uuid: None,
                all: true
            }
        );
        assert!(parse(&["cancel"]).is_err());
        assert!(parse(&["cancel", "abc", "--all"]).is_err());
    }

    #[test]
    fn test_needs_credentials() {
        assert!(!parse(&["ticker", "XMR-BTC"]).unwrap().needs_credentials());
        assert!(!Command::Markets.needs_credentials());
        assert!(Command::Balances.needs_credentials());
        assert!(parse(&["orders", "--market", "XMR-BTC"]).unwrap().needs_credentials());
    }

    #[tokio::test]
    async fn test_run_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ticker/XMR-BTC"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":true,"initialprice":"1","price":"2","high":"3","low":"0.5","volume":"10","bid":"1.9","ask":"2.1"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let config = config_for(&server, false);
        let command = Command::Ticker {
            market: "XMR-BTC".into(),
        };
        let clients = assert_ok!(Clients::connect(&config, Some(&command)));
        assert!(clients.private.is_none());
        let value = assert_ok!(run(&command, &clients).await);

        assert_eq!(value["price"], "2");
        assert_eq!(value["initialprice"], "1");
    }

    #[tokio::test]
    async fn test_run_cancel_all() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/order/cancel"))
            .and(header("authorization", "Basic a2V5OnNlY3JldA=="))
            .and(body_string("uuid=all"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"success":true}"#, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server, true);
        let command = Command::Cancel {
            uuid: None,
            all: true,
        };
        let clients = assert_ok!(Clients::connect(&config, Some(&command)));
        let value = assert_ok!(run(&command, &clients).await);

        assert_eq!(value["success"], true);
    }

    #[tokio::test]
    async fn test_private_command_without_credentials_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = config_for(&server, false);

        let err = Clients::connect(&config, Some(&Command::Balances)).unwrap_err();
        assert!(err.to_string().contains("TRADEOGRE_API_KEY"));
    }

    #[tokio::test]
    async fn test_connect_builds_private_client_once_for_private_commands() {
        let server = MockServer::start().await;
        let config = config_for(&server, true);

        let clients = assert_ok!(Clients::connect(&config, Some(&Command::Balances)));
        let private = clients.private.as_ref().unwrap();
        assert!(std::sync::Arc::ptr_eq(private.transport(), clients.public.transport()));

        let clients = assert_ok!(Clients::connect(&config, None));
        assert!(clients.private.is_none());
    }

    #[tokio::test]
    async fn test_run_private_command_with_public_only_clients_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let clients = assert_ok!(Clients::connect(&config_for(&server, true), None));

        let err = run(&Command::Balances, &clients).await.unwrap_err();
        assert!(err.to_string().contains("TRADEOGRE_API_KEY"));
    }
}
