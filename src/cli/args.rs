use clap::Args;

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Decimal values to encode (reads whitespace-separated values from stdin
    /// if none are given)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for decoding identifiers
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Identifiers to decode (reads whitespace-separated identifiers from
    /// stdin if none are given)
    #[arg(value_name = "ID")]
    pub identifiers: Vec<String>,
}

/// Arguments for the config subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only list the configuration files that are consulted
    #[arg(long)]
    pub paths: bool,
}
