//! Interactive signup front end for the enroll form core.
//!
//! Plays the role a registration screen would: prompts for the three fields,
//! renders the per-field messages after each pass, and forwards a permitted
//! submission to the chosen sink — the local JSON store by default, or the
//! remote registration endpoint when a URL is given as the first argument.
//! `--list` prints the locally stored users in insertion order.

mod paths;

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use enroll_lib::RegistrationClient;
use enroll_lib::form::FieldIndicator;
use enroll_lib::form::FormInputs;
use enroll_lib::form::FormState;
use enroll_lib::form::SubmitError;
use enroll_lib::form::submit;
use enroll_lib::sink::JsonFileStore;
use enroll_lib::sink::RegistrationSink;
use enroll_lib::sink::UserStore;
use enroll_lib::validate::ValidationResult;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

#[tokio::main]
async fn main() {
    let log_path = paths::log_file().unwrap_or_else(|| "enroll-cli.log".into());
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let log_file = File::create(log_path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--list") => list_users().await,
        Some(url) => register(RegistrationClient::builder().url(url).build()).await,
        None => register(local_store()?).await,
    }
}

fn local_store() -> Result<JsonFileStore, Box<dyn Error>> {
    let path = paths::users_file().ok_or("could not determine the user data directory")?;
    Ok(JsonFileStore::new(path))
}

async fn list_users() -> Result<(), Box<dyn Error>> {
    let records = local_store()?.list().await?;
    if records.is_empty() {
        println!("No registered users.");
        return Ok(());
    }
    for record in records {
        println!("{}", record.email);
    }
    Ok(())
}

async fn register(sink: impl RegistrationSink) -> Result<(), Box<dyn Error>> {
    println!("Register a new user (Ctrl+C to quit).");

    let mut attempted = false;
    loop {
        let inputs = read_inputs()?;
        let state = FormState::recompute(&inputs);
        render(&inputs, &state, attempted);

        match submit(&inputs, &sink).await {
            Ok(()) => {
                println!("User created successfully!");
                return Ok(());
            }
            Err(SubmitError::Blocked { message, .. }) => {
                attempted = true;
                println!("{message}\n");
            }
            Err(SubmitError::Sink(err)) => {
                log::warn!("sink failure: {err}");
                return Err(err.user_message().into());
            }
        }
    }
}

fn read_inputs() -> Result<FormInputs, Box<dyn Error>> {
    let email = prompt("E-mail: ")?;
    let password = prompt("Password: ")?;
    let confirm = prompt("Confirm password: ")?;
    Ok(FormInputs::new(email, password, confirm))
}

fn prompt(label: &str) -> Result<String, Box<dyn Error>> {
    print!("{label}");
    stdout().flush()?;
    let mut line = String::new();
    stdin().read_line(&mut line)?;
    // Strip the line ending only; validators compare content exactly.
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render(inputs: &FormInputs, state: &FormState, attempted: bool) {
    print_field("email", &inputs.email, &state.email, attempted);
    print_field("password", &inputs.password, &state.password, attempted);
    print_field(
        "confirm",
        inputs.confirm_password.as_deref().unwrap_or(""),
        &state.confirm,
        attempted,
    );
}

fn print_field(label: &str, text: &str, result: &ValidationResult, attempted: bool) {
    let marker = match FieldIndicator::for_field(text.is_empty(), attempted, result.is_valid) {
        FieldIndicator::Neutral => ' ',
        FieldIndicator::Valid => '+',
        FieldIndicator::Invalid => '!',
    };
    match result.message() {
        Some(message) => println!("  [{marker}] {label}: {message}"),
        None => println!("  [{marker}] {label}"),
    }
}
