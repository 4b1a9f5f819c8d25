use taskcal::commands::Cli;
use taskcal::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskcal=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu()
}
