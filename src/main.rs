/* crate use */
use anyhow::{Context, Result};
use clap::Parser;

/* project use */
use randread::cli;
use randread::format::{self, Renderer};
use randread::SequenceGenerator;

fn main() -> Result<()> {
    let params = cli::Command::parse();

    env_logger::Builder::new()
        .filter_level(params.log_level())
        .parse_default_env()
        .init();

    log::info!("Start check configuration");
    let request = params.read_request().with_context(|| "Check read request")?;
    let generation = params
        .generation_parameters()
        .with_context(|| "Check generation parameters")?;
    let quality = params
        .quality()
        .with_context(|| "Init quality score model")?;
    let output_format = params.format().with_context(|| "Check output format")?;
    log::info!("End check configuration");

    let renderer = Renderer::new(output_format, SequenceGenerator::new(&generation), quality);
    let mut rng = params.rng();
    let mut output = params.output().with_context(|| "Open output")?;

    log::info!("Start generate {} {} reads", request.count(), output_format);
    let nb_record = format::generate(&renderer, &request, &mut rng, &mut output)
        .with_context(|| "Write reads")?;
    log::info!("End generate {} reads", nb_record);

    Ok(())
}
