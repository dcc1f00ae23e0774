use std::io::BufRead;

use clap::Parser;

use krii_moderation::auth::seed::ModeratorSeed;
use krii_moderation::models::Role;

/// Print a bcrypt hash and the SQL that inserts a new moderator.
#[derive(Parser, Debug)]
#[command(name = "hash_password", version)]
struct Cli {
    /// Username of the new moderator
    #[arg(long)]
    username: String,

    /// `admin` or `moderator`
    #[arg(long, default_value_t = Role::Moderator)]
    role: Role,

    /// Password to hash; read from stdin when omitted
    #[arg(long, env = "KRII_NEW_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let password = match cli.password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let seed = ModeratorSeed::new(&cli.username, cli.role, &password)?;
    print!("{}", seed.report());
    Ok(())
}
