use semana::commands::Cli;

fn main() -> anyhow::Result<()> {
    // Route messages through tracing when debug output is requested.
    if semana::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
