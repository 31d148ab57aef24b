use authzac::{
    platform::Builder as PlatformBuilder,
    Platform,
};
use authzcore::{
    ac::{
        agent::Agent,
        user::User,
    },
    platform::ConnectorOption,
};
use authzdb::Backend;
use clap::{
    Parser,
    Subcommand,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "AUTHZ_DB_URL", env = "AUTHZ_DB_URL")]
    authz_db_url: String,
    #[clap(long, value_name = "AUTHZ_STATEMENT_CACHE", env = "AUTHZ_STATEMENT_CACHE", default_value_t = 100)]
    statement_cache_capacity: usize,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether a user may invoke an action on a model class
    #[command(arg_required_else_help = true)]
    Check {
        model_class: String,
        action: String,
        /// The user id; omit to check as an anonymous agent
        #[arg(long)]
        user: Option<i64>,
    },
    /// List the model classes the user holds any permission on
    Classes {
        #[arg(long)]
        user: Option<i64>,
    },
    /// List the methods granted to the user on a model class
    #[command(arg_required_else_help = true)]
    Methods {
        model_class: String,
        #[arg(long)]
        user: Option<i64>,
    },
}

// The identity is not looked up; only the id takes part in decisions.
fn agent(user: Option<i64>) -> Agent {
    user.map(|id| User {
        id,
        name: format!("user{id}"),
    })
        .into()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("authzac")
        .module("authzdb")
        .module("authzdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = PlatformBuilder::new()
        .boxed_authz_platform(
            Backend::authz(
                ConnectorOption::from(args.authz_db_url)
                    .statement_cache_capacity(args.statement_cache_capacity)
            )
                .await
                .map_err(anyhow::Error::from_boxed)?
        )
        .build()?;

    parse_command(&platform, args.command).await
}

async fn parse_command(
    platform: &Platform,
    arg: Commands,
) -> anyhow::Result<()> {
    match arg {
        Commands::Check { model_class, action, user } => {
            let agent = agent(user);
            let result = platform.is_authorized(&agent, &action, &model_class).await?;
            println!("{}", if result { "authorized" } else { "denied" });
        }
        Commands::Classes { user } => {
            for model_class in platform.authorized_classes(&agent(user), None).await? {
                println!("{model_class}");
            }
        }
        Commands::Methods { model_class, user } => {
            for method in platform.authorized_methods(
                &agent(user),
                None,
                Some(&model_class),
                None,
            ).await? {
                println!("{method}");
            }
        }
    }
    Ok(())
}
