use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(args: &Args) {
    let env_filter = EnvFilter::from_default_env().add_directive(
        args.log_directive
            .parse()
            .expect("Failed to parse the log directive."),
    );
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
