use clap::Parser;

/// Lists the attached DigitalPersona readers and describes the first one.
#[derive(Debug, Parser)]
#[command(name = "dpfp-devinfo", version)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use an in-process runtime with COUNT simulated readers instead of DPFPApi.dll
    #[arg(long, value_name = "COUNT")]
    pub simulate: Option<usize>,

    /// With --simulate, report no readers for the first N scans
    #[arg(long, value_name = "N", requires = "simulate", default_value_t = 0)]
    pub empty_scans: usize,

    /// Give up after N retried scans instead of asking indefinitely
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,
}
