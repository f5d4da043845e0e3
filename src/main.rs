use clap::{CommandFactory, Parser, error::ErrorKind};
use escape_field::{CliArgs, CliController, ImageFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = match args.generation_config() {
        Ok(config) => config,
        Err(err) => CliArgs::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let mut controller = CliController::new(ImageFilePresenter::new());

    if let Err(err) = controller.generate(&config, args.colour_map, args.threads) {
        log::error!("{}", err);
        return Err(err);
    }

    controller.write(&args.output)?;

    Ok(())
}
