//! Ledger CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse configuration** — load `ledger.toml` (or `--config`), apply the
//!    `LEDGER_API_BASE_URL` / `--base-url` override, and validate the result.
//! 2. **Wire observability** — see [`telemetry`].
//! 3. **Construct infrastructure** — build a [`transport::ReqwestTransport`] and
//!    inject it into [`ledger::Accounts`].
//! 4. **Run one command** — `create`, `fetch` or `delete`, printing the
//!    resulting Account as JSON on stdout.

mod config;
mod telemetry;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledger::{Account, AccountId, AccountVersion, Accounts, HttpProvider, Timestamp};
use tracing::info;
use transport::ReqwestTransport;

use crate::config::CliConfig;
use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "ledger", version, about = "Manage Account resources on the ledger API")]
struct Cli {
    /// Configuration file (defaults to ./ledger.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API root including the version prefix, e.g. http://localhost:8080/v1.
    #[arg(long, global = true, env = "LEDGER_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an Account from a JSON file.
    Create {
        /// Path to a JSON document holding the Account object.
        #[arg(long)]
        file: PathBuf,
    },
    /// Fetch an Account by ID.
    Fetch { id: AccountId },
    /// Delete an Account by ID and version.
    Delete {
        id: AccountId,
        #[arg(long)]
        version: u64,
    },
}

fn read_account(path: &Path) -> Result<Account> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read account file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse account file: {}", path.display()))
}

/// Executes `command`, returning the Account to print, if any.
async fn run<T: HttpProvider>(command: Command, accounts: &Accounts<T>) -> Result<Option<Account>> {
    match command {
        Command::Create { file } => {
            let account = read_account(&file)?;
            let created = accounts.create(&account).await?;
            info!(
                account_id = %created.id,
                created_on = ?created.created_on.map(Timestamp::as_datetime),
                "account created"
            );
            Ok(Some(created))
        }
        Command::Fetch { id } => Ok(Some(accounts.fetch(&id).await?)),
        Command::Delete { id, version } => {
            accounts.delete(&id, AccountVersion::new(version)).await?;
            info!(account_id = %id, version, "account deleted");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _telemetry = telemetry::init(cli.log_format)?;

    let config = CliConfig::load(cli.config.as_deref())?.with_base_url(cli.base_url);
    config.validate()?;

    let transport = ReqwestTransport::new(&config.api).context("Failed to build HTTP transport")?;
    info!(base_url = transport.base_url(), "using ledger API");
    let accounts = Accounts::new(transport);

    if let Some(account) = run(cli.command, &accounts).await? {
        println!("{}", serde_json::to_string_pretty(&account)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use ledger::{AccountAttributes, ApiRequest, HttpMethod, OrganisationId, TransportError};
    use serde_json::json;

    use super::*;

    const ACCOUNT_ID: &str = "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc";

    #[test]
    fn parses_delete_with_version() {
        let cli = Cli::try_parse_from(["ledger", "delete", ACCOUNT_ID, "--version", "4"]).unwrap();
        match cli.command {
            Command::Delete { id, version } => {
                assert_eq!(id.to_string(), ACCOUNT_ID);
                assert_eq!(version, 4);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn rejects_malformed_account_id() {
        assert!(Cli::try_parse_from(["ledger", "fetch", "not-a-uuid"]).is_err());
    }

    #[test]
    fn delete_requires_version() {
        assert!(Cli::try_parse_from(["ledger", "delete", ACCOUNT_ID]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "ledger",
            "fetch",
            ACCOUNT_ID,
            "--base-url",
            "http://127.0.0.1:9000/v1",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000/v1"));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn base_url_precedence_is_flag_then_env_then_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[api]\nbase_url = \"https://file.example.com/v1\"\n",
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        std::env::set_var("LEDGER_API_BASE_URL", "https://env.example.com/v1");
        let from_env = Cli::try_parse_from([
            "ledger",
            "--config",
            &config_path,
            "fetch",
            ACCOUNT_ID,
        ])
        .unwrap();
        let from_flag = Cli::try_parse_from([
            "ledger",
            "--config",
            &config_path,
            "--base-url",
            "https://flag.example.com/v1",
            "fetch",
            ACCOUNT_ID,
        ])
        .unwrap();
        std::env::remove_var("LEDGER_API_BASE_URL");

        let file_only = CliConfig::load(from_env.config.as_deref()).unwrap();
        assert_eq!(file_only.api.base_url, "https://file.example.com/v1");

        let env_config = file_only.clone().with_base_url(from_env.base_url);
        assert_eq!(env_config.api.base_url, "https://env.example.com/v1");

        let flag_config = file_only.with_base_url(from_flag.base_url);
        assert_eq!(flag_config.api.base_url, "https://flag.example.com/v1");
    }

    /// Answers a create request with the submitted account at version 0.
    #[derive(Default)]
    struct StoringTransport {
        requests: Mutex<Vec<ApiRequest>>,
    }

    #[async_trait]
    impl HttpProvider for StoringTransport {
        async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
            let mut data = request
                .body
                .as_ref()
                .map(|body| body["data"].clone())
                .unwrap_or_default();
            data["version"] = json!(0);
            data["created_on"] = json!("2021-03-04T10:15:30.123Z");
            self.requests.lock().unwrap().push(request);
            Ok(serde_json::to_vec(&json!({ "data": data })).unwrap())
        }
    }

    #[tokio::test]
    async fn create_command_returns_created_account() {
        let account = Account::new(
            ACCOUNT_ID.parse().unwrap(),
            OrganisationId::new_random(),
            AccountAttributes::new("GB"),
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(file.as_file(), &account).unwrap();

        let accounts = Accounts::new(StoringTransport::default());
        let command = Command::Create {
            file: file.path().to_path_buf(),
        };

        let created = run(command, &accounts).await.unwrap().unwrap();

        assert_eq!(created.id, account.id);
        assert_eq!(created.attributes, account.attributes);
        assert_eq!(created.version, Some(AccountVersion::INITIAL));
        assert!(created.created_on.is_some());

        let requests = accounts.transport().requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].endpoint, "/organisation/accounts");
    }

    /// Records requests and answers every one with `204 No Content`.
    #[derive(Default)]
    struct NoContentTransport {
        requests: Mutex<Vec<ApiRequest>>,
    }

    #[async_trait]
    impl HttpProvider for NoContentTransport {
        async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn delete_command_prints_nothing() {
        let accounts = Accounts::new(NoContentTransport::default());
        let command = Command::Delete {
            id: ACCOUNT_ID.parse().unwrap(),
            version: 2,
        };

        let printed = run(command, &accounts).await.unwrap();

        assert!(printed.is_none());
        let requests = accounts.transport().requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(
            requests[0].endpoint,
            format!("/organisation/accounts/{ACCOUNT_ID}?version=2")
        );
    }

    #[tokio::test]
    async fn create_command_reports_unreadable_file() {
        let accounts = Accounts::new(NoContentTransport::default());
        let command = Command::Create {
            file: PathBuf::from("/nonexistent/account.json"),
        };

        let err = run(command, &accounts).await.unwrap_err();

        assert!(err.to_string().contains("Failed to read account file"));
        assert!(accounts.transport().requests.lock().unwrap().is_empty());
    }
}
