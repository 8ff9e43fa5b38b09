// SPDX-License-Identifier: MPL-2.0
use iced_feedback::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        theme: args.opt_value_from_str("--theme").unwrap(),
    };

    app::run(flags)
}
