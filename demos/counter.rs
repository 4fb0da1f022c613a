//! Counter Example - one magnitude through the whole pipeline
//!
//! Reads a number from the command line, prints its reading and draws its
//! dot layout once at the current terminal size.
//!
//! Run with: cargo run --example counter -- 12345
//! Set RUST_LOG=kazu=debug to see plan statistics.

use std::process::ExitCode;

use kazu::MagnitudeSource;
use kazu::pipeline::{LogNarrator, detect_viewport_size, mount, set_source, viewport_size};
use kazu::renderer::TerminalRenderer;

fn main() -> ExitCode {
    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "12345".to_string());

    let mut source = MagnitudeSource::new();
    if let Err(err) = source.set_from_str(&arg) {
        eprintln!("counter: {err}");
        return ExitCode::FAILURE;
    }

    detect_viewport_size();
    set_source(source);

    let (w, h) = viewport_size();
    log::debug!("viewport {w}x{h}");

    // Mounting draws the first frame.
    let mut handle = mount(TerminalRenderer::stdout(), LogNarrator);
    let reading = handle.narrate();
    handle.unmount();

    println!();
    println!("{arg} = {reading}");
    ExitCode::SUCCESS
}
