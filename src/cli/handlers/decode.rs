use crate::cli::{args::DecodeArgs, global::GlobalArgs};
use base62_id::{Config, decode};

use super::{collect_items, process};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = collect_items(args.identifiers)?;
    if items.is_empty() {
        return Err("error: nothing to decode".into());
    }

    process(items, global.keep_going(&config.settings), decode)
}
