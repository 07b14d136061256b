//! new-puzzle entry point.

use new_puzzle::{cli::get_args, error::default_error_handler, logger::init_logger, run};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(&args) {
        Ok(generated) => {
            for file in generated {
                println!("{}: '{}'", file.action, file.target.display());
            }
        }
        Err(err) => default_error_handler(err),
    }
}
