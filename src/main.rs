use assignbot::{assign, config::MainConfig, event::EventContext, logging};

#[tokio::main]
async fn main() {
	let config = MainConfig::from_env();

	env_logger::from_env(env_logger::Env::default().default_filter_or("info"))
		.target(env_logger::Target::Stdout)
		.format(logging::actions::format)
		.init();

	let result = match EventContext::from_env() {
		Ok(ctx) => assign::run(&config, &ctx).await,
		Err(err) => Err(err),
	};

	if let Err(err) = result {
		log::error!("{}", err.failure_message());
		std::process::exit(1);
	}
}
