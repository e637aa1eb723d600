use clap::Parser;
use dotenvy::dotenv;
use rand::{Rng, distributions::Alphanumeric};
use stk_portal::infrastructure::database;
use stk_portal::services::auth_service::upsert_admin;
use tracing::info;

/// Creates an editor account, or resets the password of an existing one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Login name of the admin
    username: String,

    /// Password; a random one is generated and printed when omitted
    #[arg(short, long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let username = args.username.trim();
    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }

    let generated = args.password.is_none();
    let password = args.password.unwrap_or_else(|| {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(20)
            .map(char::from)
            .collect()
    });

    let db = database::setup_database().await?;
    upsert_admin(&db, username, &password).await?;

    info!("✅ Admin '{}' saved", username);
    if generated {
        println!("Generated password for {}: {}", username, password);
    }
    Ok(())
}
