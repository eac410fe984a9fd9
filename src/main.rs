use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use accounts::adapters::messages::LoggedMessages;
use accounts::adapters::operator::UsernameOperatorResolver;
use accounts::adapters::password::Argon2PasswordHasher;
use accounts::adapters::postgres::{
    self, PostgresAccountRepository, PostgresBillingLinkRepository, PostgresMembershipRepository,
    PostgresNotificationDispatcher, PostgresProfileRepository,
};
use accounts::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use accounts::application::{
    CreateAccountCommand, CreateAccountHandler, CreateAccountResult, ProvisioningPorts,
    ProvisioningSettings, ProvisioningWorkflow,
};
use accounts::config::AppConfig;
use accounts::ports::AccountRepository;

/// accounts - account provisioning
#[derive(Parser)]
#[command(name = "accounts")]
#[command(about = "Account provisioning and administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Create a regular account
    CreateUser(NewAccount),
    /// Create an admin account
    CreateSuperuser(NewAccount),
}

#[derive(Args)]
struct NewAccount {
    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    /// Omit to create the account with an unusable password
    #[arg(long, env = "ACCOUNTS_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl From<NewAccount> for CreateAccountCommand {
    fn from(args: NewAccount) -> Self {
        Self {
            username: args.username,
            email: args.email,
            password: args.password,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    match cli.command {
        Commands::Migrate => config.validate_storage()?,
        Commands::CreateUser(_) | Commands::CreateSuperuser(_) => config.validate()?,
    }

    accounts::telemetry::init(&config.logging)?;

    let pool = postgres::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations || matches!(cli.command, Commands::Migrate) {
        postgres::run_migrations(&pool).await?;
    }

    match cli.command {
        Commands::Migrate => {
            tracing::info!("Migrations complete");
            Ok(())
        }
        Commands::CreateUser(args) => {
            let handler = create_account_handler(&config, pool)?;
            let result = handler.create_user(args.into(), &LoggedMessages).await?;
            print_created(&result);
            Ok(())
        }
        Commands::CreateSuperuser(args) => {
            let handler = create_account_handler(&config, pool)?;
            let result = handler.create_superuser(args.into(), &LoggedMessages).await?;
            print_created(&result);
            Ok(())
        }
    }
}

fn create_account_handler(config: &AppConfig, pool: sqlx::PgPool) -> Result<CreateAccountHandler> {
    let accounts: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));

    let payments = StripePaymentAdapter::new(StripeConfig::from_payment_config(&config.payment))?;

    let ports = ProvisioningPorts {
        accounts: accounts.clone(),
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
        billing_links: Arc::new(PostgresBillingLinkRepository::new(pool.clone())),
        payments: Arc::new(payments),
        notifications: Arc::new(PostgresNotificationDispatcher::new(pool)),
        operator: Arc::new(UsernameOperatorResolver::new(
            accounts.clone(),
            &config.provisioning.operator_username,
        )),
    };
    let settings = ProvisioningSettings::from_config(&config.provisioning, &config.payment);
    let workflow = Arc::new(ProvisioningWorkflow::new(ports, settings));

    let hasher = Argon2PasswordHasher::new()?;
    Ok(CreateAccountHandler::new(accounts, Arc::new(hasher), workflow))
}

fn print_created(result: &CreateAccountResult) {
    println!("Created account {} ({})", result.account.username, result.account.id);
    println!("  admin:        {}", result.account.is_admin);
    println!("  profile:      {}", if result.report.profile_created { "created" } else { "existing" });
    println!("  notification: {:?}", result.report.notification);
    println!("  billing:      {:?}", result.report.billing);
}
