use anyhow::Result;
use mini_shell::Interpreter;
use mini_shell::config::{CliArgs, Config};
use mini_shell::logging::init_logging;
use tracing::info;

fn main() -> Result<()> {
    let args: CliArgs = argh::from_env();
    let config = Config::from_args(args);
    init_logging(config.log_level)?;
    info!(backend = %config.backend, "starting");

    let executor = config.executor()?;
    let mut sh = Interpreter::new(executor, config.prompt);
    if !sh.start_up(&mut std::io::stdout())? {
        std::process::exit(1);
    }
    sh.repl()
}
