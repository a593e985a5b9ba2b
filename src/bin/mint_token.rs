use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header};

/// Mint an HS256 bearer token for local testing.
///
/// Signs with AUTH_JWT_SECRET / AUTH_ISSUER from the environment (a .env
/// file is honored), so the output verifies against a locally running
/// service. The real tokens come from the upstream auth service; this
/// tool only replaces it during development.
#[derive(Parser, Debug)]
#[command(name = "mint-token", version, about)]
struct Args {
    /// Subject (user id) to embed
    #[arg(long)]
    sub: String,

    /// Role claim
    #[arg(long, default_value = "customer")]
    role: String,

    /// Token lifetime in seconds; 0 omits `exp` entirely
    #[arg(long, default_value_t = 3600)]
    ttl: u64,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_secs()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let secret = std::env::var("AUTH_JWT_SECRET")
        .map_err(|_| "AUTH_JWT_SECRET is required (set it in the environment or .env)")?;
    let issuer = std::env::var("AUTH_ISSUER")
        .map_err(|_| "AUTH_ISSUER is required (set it in the environment or .env)")?;

    let iat = now_unix();
    let mut claims = serde_json::json!({
        "iss": issuer,
        "sub": args.sub,
        "role": args.role,
        "iat": iat,
    });
    if args.ttl > 0 {
        claims["exp"] = serde_json::Value::from(iat + args.ttl);
    }

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    if args.quiet {
        println!("{token}");
        return Ok(());
    }

    println!("token: {token}");
    println!("iss: {issuer}");
    println!("sub: {}", args.sub);
    println!("role: {}", args.role);
    if args.ttl > 0 {
        println!("exp: {}", iat + args.ttl);
    } else {
        println!("exp: (none)");
    }

    Ok(())
}
