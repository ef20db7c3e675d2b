use clap::Parser;
use color_eyre::Result;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bkrs::dispatch::ConsoleDispatcher;
use bkrs::{Dictionary, RequestDebouncer, SearchConfig, config};

/// Requester id for everything typed on this console
const CONSOLE_REQUESTER: &str = "console";

/// Chinese-Russian dictionary with search-as-you-type lookups
#[derive(Parser, Debug)]
#[command(version, about = "Chinese dictionary lookup with debounced search")]
struct Args {
    /// Dictionary JSON file (overrides the config file)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Quiet interval before a lookup runs, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

/// Why the input loop stopped
enum Exit {
    Quit,
    EndOfInput,
}

fn main() -> Result<()> {
    init_logger();
    color_eyre::install()?;

    // Load config early so CLI flags can override it
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    let config = config_result.config;

    let args = Args::parse();

    let mut search_config = SearchConfig::from(&config);
    if let Some(delay_ms) = args.delay_ms {
        search_config = search_config.with_quiet_interval(Duration::from_millis(delay_ms));
    }

    let shutdown_grace = search_config.shutdown_grace;

    let dictionary_path = args.dictionary.unwrap_or(config.dictionary.path);
    let dictionary = Dictionary::load(&dictionary_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let debouncer: RequestDebouncer<&'static str, u64> = RequestDebouncer::with_runtime(
        runtime.handle().clone(),
        search_config,
        Arc::new(dictionary),
        Arc::new(ConsoleDispatcher::stdout()),
    );

    eprintln!("Chinese-Russian dictionary");
    eprintln!("Type 'quit' to exit");

    let exit = run(&debouncer);

    // Output of the last search must land before the process exits
    match exit {
        Ok(Exit::EndOfInput) => runtime.block_on(debouncer.drain()),
        Ok(Exit::Quit) | Err(_) => runtime.block_on(debouncer.shutdown()),
    }

    // Dropping the runtime would wait on blocking lookups without limit
    drop(debouncer);
    runtime.shutdown_timeout(shutdown_grace);

    log::debug!("=== BKRS SESSION ENDED ===");
    exit.map(|_| ())
}

/// Read lines from stdin and submit each as a search
fn run(debouncer: &RequestDebouncer<&'static str, u64>) -> Result<Exit> {
    let stdin = io::stdin();
    let mut request_id: u64 = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim();

        if query.eq_ignore_ascii_case("quit") {
            return Ok(Exit::Quit);
        }

        request_id += 1;
        debouncer.submit(CONSOLE_REQUESTER, query, request_id)?;
    }

    Ok(Exit::EndOfInput)
}

/// Log to stderr; level comes from RUST_LOG, default warn
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== BKRS SESSION STARTED ===");
}
