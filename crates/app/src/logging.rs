use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global stderr subscriber.
///
/// `FOCAL_LOG` overrides the default filter, using the usual env-filter
/// syntax (`info`, `services=debug`, ...).
pub fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_env("FOCAL_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
