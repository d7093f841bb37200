// Nova theme CLI - headless settings surface
// The host settings screen performs the same operations through the library;
// this binary exposes them for scripts and operators.

mod config;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use novatheme_store::{PreferenceStore, Scope};
use novatheme_theme::{nova_theme, FormError, PresentationResolver, SettingsForm};

use config::CliConfig;
use exit_codes::{store_error_code, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE, EXIT_VALIDATION};

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Backend theme preferences (settings surface, headless)")]
#[command(version)]
struct Cli {
    /// Preference database path (default: config file, then
    /// the user config directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Act as this user (reads see their overrides, writes create them)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every preference with its resolved value
    Show {
        /// Emit a JSON object instead of key = value lines
        #[arg(long)]
        json: bool,
    },

    /// Read the value stored for exactly this scope (no fallback)
    Get {
        /// Preference key, e.g. nova_theme.mode
        key: String,
    },

    /// Validate and persist one preference
    #[command(after_help = "\
Examples:
  nova set nova_theme.mode dark
  nova --user alice set nova_theme.accent_color emerald")]
    Set {
        key: String,
        value: String,
    },

    /// Resolved value: user override, else global, else default
    Resolve {
        key: String,
    },

    /// Rewrite a preference to its schema default
    Reset {
        key: String,
    },

    /// Save a settings-form submission (all-or-nothing)
    #[command(after_help = "\
Examples:
  nova save nova_theme.mode=dark nova_theme.animations=false
  nova --user alice save nova_theme.mode=dark

Every field is validated before anything is written; one invalid
field rejects the whole submission.")]
    Save {
        /// KEY=VALUE pairs
        #[arg(required = true, value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Emit presentation directives for the page root
    Directives {
        /// Emit JSON
        #[arg(long)]
        json: bool,
        /// Print the page-root data attributes and class list
        #[arg(long)]
        attrs: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = CliConfig::load();

    let db_path = cli
        .db
        .or(cfg.db)
        .unwrap_or_else(PreferenceStore::default_path);
    let user_owned = cli.user.or(cfg.user);
    let user = user_owned.as_deref().filter(|u| !u.is_empty());
    let scope = Scope::from_user_id(user);

    let store = match PreferenceStore::open(&db_path, nova_theme()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: cannot open {}: {err}", db_path.display());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let code = match cli.command {
        Commands::Show { json } => cmd_show(&store, user, json),
        Commands::Get { key } => cmd_get(&store, &key, &scope),
        Commands::Set { key, value } => cmd_set(&store, &key, &scope, &value),
        Commands::Resolve { key } => cmd_resolve(&store, &key, user),
        Commands::Reset { key } => cmd_reset(&store, &key, &scope),
        Commands::Save { fields } => cmd_save(&store, &scope, &fields),
        Commands::Directives { json, attrs } => cmd_directives(&store, user, json, attrs),
    };
    ExitCode::from(code)
}

fn cmd_show(store: &PreferenceStore, user: Option<&str>, json: bool) -> u8 {
    let resolved = match store.resolve_all(user) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("error: {err}");
            return store_error_code(&err);
        }
    };
    if json {
        let mut map = serde_json::Map::new();
        for (key, value) in resolved {
            map.insert(key, serde_json::Value::String(value));
        }
        let obj = serde_json::Value::Object(map);
        println!("{}", serde_json::to_string_pretty(&obj).unwrap_or_default());
    } else {
        for (key, value) in resolved {
            println!("{key} = {value}");
        }
    }
    EXIT_SUCCESS
}

fn cmd_get(store: &PreferenceStore, key: &str, scope: &Scope) -> u8 {
    match store.get(key, scope) {
        Ok(value) => {
            println!("{value}");
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            store_error_code(&err)
        }
    }
}

fn cmd_set(store: &PreferenceStore, key: &str, scope: &Scope, value: &str) -> u8 {
    match store.set(key, scope, value) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            store_error_code(&err)
        }
    }
}

fn cmd_resolve(store: &PreferenceStore, key: &str, user: Option<&str>) -> u8 {
    match store.resolve(key, user) {
        Ok(value) => {
            println!("{value}");
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            store_error_code(&err)
        }
    }
}

fn cmd_reset(store: &PreferenceStore, key: &str, scope: &Scope) -> u8 {
    match store.reset(key, scope) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            store_error_code(&err)
        }
    }
}

fn cmd_save(store: &PreferenceStore, scope: &Scope, fields: &[String]) -> u8 {
    let mut changes = Vec::with_capacity(fields.len());
    for field in fields {
        match parse_field(field) {
            Some(change) => changes.push(change),
            None => {
                eprintln!("error: expected KEY=VALUE, got '{field}'");
                return EXIT_USAGE;
            }
        }
    }

    let form = match SettingsForm::load(store, scope) {
        Ok(form) => form,
        Err(err) => {
            eprintln!("error: {err}");
            return store_error_code(&err);
        }
    };

    match form.submit(store, &changes) {
        Ok(0) => {
            println!("No changes.");
            EXIT_SUCCESS
        }
        Ok(saved) => {
            println!("Saved {saved} preference(s).");
            EXIT_SUCCESS
        }
        Err(FormError::Invalid(errors)) => {
            eprintln!("error: settings not saved:");
            for err in &errors {
                eprintln!("  {}: {}", err.key, err.message);
            }
            EXIT_VALIDATION
        }
        Err(FormError::Store(err)) => {
            eprintln!("error: {err}");
            store_error_code(&err)
        }
    }
}

fn cmd_directives(store: &PreferenceStore, user: Option<&str>, json: bool, attrs: bool) -> u8 {
    let directives = match PresentationResolver::new(store).compute_directives(user) {
        Ok(directives) => directives,
        Err(err) => {
            eprintln!("error: {err}");
            return store_error_code(&err);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&directives).unwrap_or_default()
        );
    } else if attrs {
        for (name, value) in directives.root_attributes() {
            println!("{name}=\"{value}\"");
        }
        let classes = directives.root_classes();
        if !classes.is_empty() {
            println!("class=\"{}\"", classes.join(" "));
        }
    } else {
        println!("mode = {}", directives.theme_mode.as_str());
        println!(
            "accent = {} {}",
            directives.accent.as_str(),
            directives.accent.hex()
        );
        println!("animations = {}", directives.animations);
        println!("sidebar_collapsed = {}", directives.sidebar_collapsed);
        println!("font_size = {}", directives.font_size.as_str());
        println!("font_family = {}", directives.font_family);
    }
    EXIT_SUCCESS
}

/// Split a `KEY=VALUE` argument. The value may itself contain `=`.
fn parse_field(field: &str) -> Option<(String, String)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Some((key.to_string(), value.to_string())),
        _ => None,
    }
}
