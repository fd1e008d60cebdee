use plan_lens::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        zoom_step: args.opt_value_from_str("--zoom-step").unwrap(),
        margin: args.opt_value_from_str("--margin").unwrap(),
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
