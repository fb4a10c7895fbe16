use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use userdb_config::{get_config_path, Config};
use userdb_executor::Executor;
use userdb_types::{Arguments, FILE_NAME_KEY, ID_KEY, ITEM_KEY, OPERATION_KEY};

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(false);

fn profile_start(name: &str) -> (Instant, &str) {
    (Instant::now(), name)
}

fn profile_end((start, name): (Instant, &str)) {
    if PROFILING_ENABLED.load(Ordering::Relaxed) {
        let elapsed = start.elapsed();
        eprintln!(
            "[profile] {:>8.2}ms  {}",
            elapsed.as_secs_f64() * 1000.0,
            name
        );
    }
}

const MAIN_HELP: &str = r#"Keep a list of users in a JSON file.

The file holds a single JSON array of {"id", "email", "age"} objects and is
created if it does not exist. Each invocation runs one operation:

  add       append --item unless a user with the same id exists
  list      print every user
  findById  print the user with --id, or nothing
  remove    delete the user with --id

Results are printed to stdout as compact JSON."#;

#[derive(Parser, Debug)]
#[command(name = "userdb")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long = "id", default_value = "", allow_hyphen_values = true, help = "user ID")]
    id: String,

    #[arg(
        long = "item",
        default_value = "",
        allow_hyphen_values = true,
        help = "valid json object with the id, email and age fields"
    )]
    item: String,

    #[arg(
        long = "operation",
        default_value = "",
        allow_hyphen_values = true,
        help = "available operations are: «add», «list», «findById», «remove»"
    )]
    operation: String,

    #[arg(
        long = "fileName",
        default_value = "",
        allow_hyphen_values = true,
        help = "users list in json format"
    )]
    file_name: String,

    #[arg(long, help = "Print timing information for profiling")]
    profile: bool,

    #[arg(long, help = "Print config file location and contents")]
    print_config: bool,
}

impl Cli {
    /// Builds the option map, falling back to the configured default store
    /// file when `--fileName` is empty.
    fn arguments(&self, config: &Config) -> Arguments {
        let file_name = match (self.file_name.as_str(), config.default_file()) {
            ("", Some(default)) => default,
            (given, _) => given,
        };

        Arguments::new()
            .with(FILE_NAME_KEY, file_name)
            .with(OPERATION_KEY, self.operation.as_str())
            .with(ID_KEY, self.id.as_str())
            .with(ITEM_KEY, self.item.as_str())
    }
}

/// Flags that also work with a single dash (`-fileName=users.json`), the
/// way the Go `flag` package spells them.
const SINGLE_DASH_FLAGS: [&str; 4] = ["fileName", "operation", "id", "item"];

/// Rewrites `-fileName` style flags to `--fileName` so clap accepts them.
/// Values that follow a flag are passed through untouched.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;

    for arg in args {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(flag) = arg.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
            expect_value = arg.starts_with("--")
                && !arg.contains('=')
                && SINGLE_DASH_FLAGS.contains(&&arg[2..]);
            normalized.push(arg);
            continue;
        };

        let name = flag.split_once('=').map_or(flag, |(name, _)| name);
        if SINGLE_DASH_FLAGS.contains(&name) {
            expect_value = !flag.contains('=');
            normalized.push(format!("-{}", arg));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let total_start = profile_start("total");
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    if cli.profile {
        PROFILING_ENABLED.store(true, Ordering::Relaxed);
    }

    let config_path = get_config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    init_logging(&config);
    if config_path.exists() {
        debug!("Loaded config from {}", config_path.display());
    }

    let result = if cli.print_config {
        handle_config(&config)
    } else {
        handle_perform(&cli, &config)
    };

    profile_end(total_start);
    result
}

fn handle_perform(cli: &Cli, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let timer = profile_start("perform");
    run(cli, config, &mut out)?;
    profile_end(timer);

    out.flush()?;
    Ok(())
}

fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let args = cli.arguments(config);
    let executor = Executor::new(config.write_mode());

    info!(
        "Running {} against {} ({:?} writes)",
        args.operation(),
        args.file_name(),
        config.write_mode()
    );
    executor.perform(&args, out)?;
    Ok(())
}

fn handle_config(config: &Config) -> Result<()> {
    let config_path = get_config_path();
    println!("Config file: {}", config_path.display());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use userdb_config::StoreConfig;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_single_dash_flags_are_accepted() {
        let args = normalize_args(argv(&[
            "userdb",
            "-operation",
            "add",
            "-fileName=users.json",
            "-item",
            "-id",
        ]));
        assert_eq!(
            args,
            argv(&[
                "userdb",
                "--operation",
                "add",
                "--fileName=users.json",
                "--item",
                "-id",
            ])
        );

        let cli = Cli::try_parse_from(args).unwrap();
        let parsed = cli.arguments(&Config::default());
        assert_eq!(parsed.file_name(), "users.json");
        assert_eq!(parsed.operation(), "add");
        assert_eq!(parsed.item(), "-id");
        assert_eq!(parsed.id(), "");
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let args = argv(&["userdb", "--id", "-operation", "-h", "--profile", "-x=1"]);
        assert_eq!(normalize_args(args.clone()), args);
    }

    #[test]
    fn test_run_logs_and_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let cli = Cli::try_parse_from([
            "userdb",
            "--operation",
            "list",
            "--fileName",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let mut out = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            run(&cli, &Config::default(), &mut out).unwrap();
        });

        assert_eq!(out, b"[]");
        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Running list against"), "logs: {}", logs);
    }

    #[test]
    fn test_parses_camel_case_flags() {
        let cli = Cli::try_parse_from([
            "userdb",
            "--operation",
            "findById",
            "--fileName",
            "users.json",
            "--id",
            "7",
        ])
        .unwrap();

        let args = cli.arguments(&Config::default());
        assert_eq!(args.file_name(), "users.json");
        assert_eq!(args.operation(), "findById");
        assert_eq!(args.id(), "7");
        assert_eq!(args.item(), "");
    }

    #[test]
    fn test_flags_default_to_empty() {
        let cli = Cli::try_parse_from(["userdb"]).unwrap();
        let args = cli.arguments(&Config::default());
        assert_eq!(args.file_name(), "");
        assert_eq!(args.operation(), "");
        assert!(!cli.profile);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_item_keeps_json_verbatim() {
        let item = r#"{"id":"1","email":"a@x.com","age":30}"#;
        let cli = Cli::try_parse_from(["userdb", "--operation", "add", "--item", item]).unwrap();
        assert_eq!(cli.arguments(&Config::default()).item(), item);
    }

    #[test]
    fn test_config_default_file_fills_missing_file_name() {
        let config = Config {
            store: StoreConfig {
                default_file: Some("default.json".to_string()),
                atomic_writes: false,
            },
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["userdb", "--operation", "list"]).unwrap();
        assert_eq!(cli.arguments(&config).file_name(), "default.json");

        let cli =
            Cli::try_parse_from(["userdb", "--operation", "list", "--fileName", "given.json"])
                .unwrap();
        assert_eq!(cli.arguments(&config).file_name(), "given.json");
    }
}
