mod damson;

use std::{env, io};

use damson::*;

/*----------------------------------------------------------------*/

fn main() {
    let mut engine = Engine::new();

    let time_man = engine.time_man();
    ctrlc::set_handler(move || time_man.stop())
        .expect("failed to install the interrupt handler");

    // Arguments run as commands for one-shot use, e.g. `damson "perft 5"`.
    let args = env::args().skip(1).collect::<Vec<String>>();

    if !args.is_empty() {
        for cmd in &args {
            if !engine.input(cmd.trim()) {
                break;
            }
        }

        return;
    }

    let mut buffer = String::new();
    while let Ok(bytes) = io::stdin().read_line(&mut buffer) {
        if bytes == 0 || !engine.input(buffer.trim()) {
            break;
        }

        buffer.clear();
    }
}
