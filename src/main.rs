mod config;
mod guard;
mod net;
mod services;
mod state;
mod storage;
mod views;

use std::io::Write as _;

use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;

use crate::config::AppConfig;
use crate::guard::GuardDecision;
use crate::net::TransportError;
use crate::services::activity::ActivitySignal;
use crate::services::session::{self, AuthError};
use crate::state::AppState;
use crate::storage::StoreError;

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pulseboard", about = "Client-rendered BI dashboard shell")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Keep the session alive across restarts and idle periods.
        #[arg(long)]
        keep_logged_in: bool,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the persisted session.
    Logout,
    /// Show the current session, if any.
    Whoami,
    /// Navigate to a route, running the edge guard first.
    Open { path: String },
    /// Interactive session with live inactivity tracking.
    Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &state).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command, state: &AppState) -> Result<(), ShellError> {
    match command {
        Command::Login { email, password, keep_logged_in } => {
            let user = state.sessions.login(&email, &password, keep_logged_in).await?;
            println!("signed in as {} <{}>", user.name, user.email);
        }
        Command::Register { name, email, password } => {
            let user = state.sessions.register(&name, &email, &password).await?;
            println!("registered and signed in as {} <{}>", user.name, user.email);
        }
        Command::Logout => {
            state.sessions.logout();
            println!("signed out");
        }
        Command::Whoami => print_whoami(state),
        Command::Open { path } => open_route(state, &path).await?,
        Command::Shell => run_shell(state).await?,
    }
    Ok(())
}

fn print_whoami(state: &AppState) {
    match state.sessions.current_user() {
        Some(user) => println!("signed in as {} <{}>", user.name, user.email),
        None => println!("anonymous"),
    }
}

/// One navigation: guard first, then render whatever route survives.
async fn open_route(state: &AppState, path: &str) -> Result<(), ShellError> {
    let mut target = path;
    if let GuardDecision::Redirect(to) = guard::decide(path, state.store.token_present()) {
        println!("-> {to}");
        target = to;
    }
    // The landing page forwards signed-in visitors to their dashboard.
    if target == "/" && state.sessions.is_authenticated() {
        println!("-> {}", guard::DASHBOARD_ROUTE);
        target = guard::DASHBOARD_ROUTE;
    }

    match views::render_route(target, state.transport.as_ref()).await? {
        Some(page) => print!("{page}"),
        None => println!("no page at {target}"),
    }
    Ok(())
}

const SHELL_HELP: &str = "\
commands:
  open <path>                     navigate (guard runs first)
  login <email> <password> [keep] sign in
  register <name> <email> <pw>    create an account
  logout                          sign out
  whoami                          show the current session
  signal <kind>                   inject a user-activity signal
                                  (pointer-move|key-press|click|scroll|touch)
  help                            this text
  quit                            leave the shell
";

/// Interactive loop standing in for the single-page app: a live session,
/// activity signals, and the idle watchdog running in the background.
async fn run_shell(state: &AppState) -> Result<(), ShellError> {
    let watchdog = session::spawn_idle_watchdog(
        state.sessions.clone(),
        state.config.idle_poll_interval,
        state.config.idle_threshold,
    );

    println!("pulseboard shell — `help` for commands");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let Some(line) = lines.next_line().await? else {
            break;
        };

        // Typing is user activity.
        state.activity.emit(ActivitySignal::KeyPress);

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["help"] => print!("{SHELL_HELP}"),
            ["whoami"] => print_whoami(state),
            ["logout"] => {
                state.sessions.logout();
                println!("signed out");
            }
            ["open", path] => {
                state.activity.emit(ActivitySignal::Click);
                if let Err(e) = open_route(state, path).await {
                    println!("error: {e}");
                }
            }
            ["login", email, password, rest @ ..] => {
                let keep = matches!(rest, ["keep"]);
                match state.sessions.login(email, password, keep).await {
                    Ok(user) => println!("signed in as {} <{}>", user.name, user.email),
                    Err(e) => println!("error: {e}"),
                }
            }
            ["register", name, email, password] => {
                match state.sessions.register(name, email, password).await {
                    Ok(user) => println!("registered and signed in as {} <{}>", user.name, user.email),
                    Err(e) => println!("error: {e}"),
                }
            }
            ["signal", kind] => match parse_signal(kind) {
                Some(signal) => state.activity.emit(signal),
                None => println!("unknown signal: {kind}"),
            },
            _ => println!("unrecognized command; `help` for commands"),
        }
    }

    watchdog.abort();
    Ok(())
}

fn parse_signal(kind: &str) -> Option<ActivitySignal> {
    match kind {
        "pointer-move" => Some(ActivitySignal::PointerMove),
        "key-press" => Some(ActivitySignal::KeyPress),
        "click" => Some(ActivitySignal::Click),
        "scroll" => Some(ActivitySignal::Scroll),
        "touch" => Some(ActivitySignal::Touch),
        _ => None,
    }
}
