//! `zigx` launcher entry point.
//!
//! Accepts no flags of its own: every argument is forwarded to the resolved
//! native binary, whose exit code becomes ours.

use zigx_core::ProcessEnv;

fn main() {
    zigx_cli::logging::init();

    let code = zigx_cli::handlers::launch::execute(std::env::args_os().skip(1), &ProcessEnv);
    std::process::exit(code);
}
