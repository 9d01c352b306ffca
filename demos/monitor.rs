//! Print every normalized input event.
//!
//! Run with: cargo run --example monitor
//!
//! Note: you need read access to /dev/input/event* (the 'input' group).

use libmacro::{CancellationToken, Context, EventKind, NormalizedEvent, run};

fn main() {
    env_logger::init();

    println!("libmacro monitor example");
    println!("Press Ctrl+C to exit\n");

    let token = CancellationToken::new();
    if let Err(e) = token.install_ctrlc() {
        eprintln!("Error: {}", e);
        return;
    }

    let mut context = match Context::init() {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut print = |event: &NormalizedEvent| match event.kind {
        EventKind::KeyPress => println!("Key {} pressed", event.value),
        EventKind::KeyRelease => println!("Key {} released", event.value),
        EventKind::MousePress => println!("Mouse {} pressed", event.value),
        EventKind::MouseRelease => println!("Mouse {} released", event.value),
        EventKind::ScrollVertical => println!("Scroll {} degrees vertically", event.value),
        EventKind::ScrollHorizontal => println!("Scroll {} degrees horizontally", event.value),
    };

    if let Err(e) = run(&mut context, &token, &mut print) {
        eprintln!("Error: {}", e);
    }
}
