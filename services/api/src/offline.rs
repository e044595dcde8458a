use clap::Args;
use covid19_estimator::error::AppError;
use covid19_estimator::estimator::{render_xml, EstimateService, EstimatorConfig, ResponseFormat};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Path to a JSON file holding the input payload
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output format, json or xml (unrecognized values fall back to json)
    #[arg(long, default_value = "json")]
    pub(crate) format: String,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs { input, format } = args;

    let raw = std::fs::read_to_string(input)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let service = EstimateService::new(EstimatorConfig::default());
    let report = service.estimate_payload(&payload)?;

    match ResponseFormat::parse(&format) {
        ResponseFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ResponseFormat::Xml => println!("{}", render_xml(&report)?),
    }

    Ok(())
}
