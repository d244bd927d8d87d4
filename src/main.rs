// SPDX-License-Identifier: MPL-2.0
use emerald_studio::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        api_url: args.opt_value_from_str("--api-url").unwrap_or(None),
        access_token: args.opt_value_from_str("--token").unwrap_or(None),
    };

    app::run(flags)
}
