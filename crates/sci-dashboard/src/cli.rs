//! Command line interface
//!
//! Without a subcommand the dashboard starts. The account commands talk to
//! the auth endpoints and manage the persisted session.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sci_client::{
    AuthClient, AuthResponse, HttpClient, LoginCredentials, ResearchClient, SignupCredentials,
    TokenResolver,
};
use sci_config::{Session, SessionAuth};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "sci-dashboard")]
#[command(about = "Terminal dashboard for supply chain research")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides config and SCI_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the dashboard (default)
    Run,

    /// Log in and store the credential
    Login {
        #[arg(short, long)]
        username: String,

        /// Read from SCI_PASSWORD or stdin when omitted
        #[arg(short, long, env = "SCI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and store the credential
    Signup {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// Read from SCI_PASSWORD or stdin when omitted
        #[arg(short, long, env = "SCI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored credential
    Logout,

    /// Show the user the stored credential belongs to
    Whoami,

    /// Print the status of a single task
    Status {
        /// Task identifier
        task_id: String,
    },
}

fn read_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    eprint!("Password: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("Password must not be empty");
    }
    Ok(password)
}

fn store_auth(response: &AuthResponse) -> Result<()> {
    let mut session = Session::load();
    session.set_auth(SessionAuth {
        user_id: response.user.id,
        username: response.user.username.clone(),
        email: response.user.email.clone(),
        token: response.token.clone(),
    });
    session.save().context("Failed to store credential")
}

pub async fn login(client: &HttpClient, username: String, password: Option<String>) -> Result<()> {
    let password = read_password(password)?;
    let response = client
        .login(&LoginCredentials { username, password })
        .await
        .context("Login failed")?;

    store_auth(&response)?;
    log::info!("Logged in as {}", response.user.username);
    println!("Logged in as {}", response.user.username);
    Ok(())
}

pub async fn signup(
    client: &HttpClient,
    username: String,
    email: String,
    password: Option<String>,
) -> Result<()> {
    let password = read_password(password)?;
    let response = client
        .signup(&SignupCredentials {
            username,
            email,
            password,
        })
        .await
        .context("Signup failed")?;

    store_auth(&response)?;
    log::info!("Signed up as {}", response.user.username);
    println!("Account created, logged in as {}", response.user.username);
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut session = Session::load();
    if session.auth.is_none() {
        println!("Not logged in");
        return Ok(());
    }
    session.clear_auth();
    session.save().context("Failed to update session")?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(client: &HttpClient) -> Result<()> {
    let credential = TokenResolver::new().resolve()?;
    let user = client
        .current_user(&credential)
        .await
        .context("Failed to fetch current user")?;
    println!("{} <{}> (id {})", user.username, user.email, user.id);
    Ok(())
}

pub async fn status(client: &HttpClient, task_id: &str) -> Result<()> {
    let credential = TokenResolver::new().resolve()?;
    let task = client
        .task_status(&credential, task_id)
        .await
        .with_context(|| format!("Failed to fetch status of {}", task_id))?;

    println!("{}  {}  {}", task.task_id, task.industry, task.status.label());
    if let Some(percent) = task.progress_percent() {
        println!("progress: {}%", percent);
    }
    if let Some(reason) = task.failure_reason() {
        println!("error: {}", reason);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_subcommand_runs_dashboard() {
        let cli = Cli::try_parse_from(["sci-dashboard"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_parse_signup() {
        let cli = Cli::try_parse_from([
            "sci-dashboard",
            "--api-url",
            "http://backend:8000",
            "signup",
            "-u",
            "analyst",
            "-e",
            "analyst@example.com",
            "-p",
            "secret",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://backend:8000"));
        assert_eq!(
            cli.command,
            Some(Commands::Signup {
                username: "analyst".to_string(),
                email: "analyst@example.com".to_string(),
                password: Some("secret".to_string()),
            })
        );
    }

    #[test]
    fn test_login_requires_username() {
        assert!(Cli::try_parse_from(["sci-dashboard", "login"]).is_err());
    }

    #[test]
    fn test_explicit_password_is_used_as_is() {
        assert_eq!(read_password(Some("pw".to_string())).unwrap(), "pw");
    }
}
