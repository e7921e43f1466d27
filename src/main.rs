mod modes;
mod shared;

use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use env_logger::Env;
use std::process;

fn main() {
    let mut config = modes::Config::default();
    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Run an integer tape, or solve for its inputs");
        parser.refer(&mut config.input)
              .required()
              .add_argument("input_file", Store,
                            "file to read tape from; the tape should be a \
                             comma-separated list of integers");
        parser.refer(&mut config.noun)
              .add_option(&["--noun"], StoreOption,
                          "the noun to use; leave blank to solve");
        parser.refer(&mut config.verb)
              .add_option(&["--verb"], StoreOption,
                          "the verb to use; leave blank to solve");
        parser.refer(&mut config.target)
              .add_option(&["--solve"], StoreOption,
                          "the desired solution to solve for; \
                           leave blank to not solve");
        parser.refer(&mut config.verbose)
              .add_option(&["-v", "--verbose"], StoreTrue,
                          "log progress at debug level");
        parser.parse_args_or_exit();
    }

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
                        .init();

    if let Err(e) = modes::run(&config) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
