use crate::cli::{args::EncodeArgs, global::GlobalArgs};
use base62_id::{Config, MAX_LEN, encode_into, parse_value};

use super::{collect_items, process};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = collect_items(args.values)?;
    if items.is_empty() {
        return Err("error: nothing to encode".into());
    }

    let mut buf = [0u8; MAX_LEN];
    process(items, global.keep_going(&config.settings), |item| {
        parse_value(item).map(|value| encode_into(value, &mut buf).to_owned())
    })
}
