use std::env;
use std::process;
use vmguest_monitor::probe::{self, Operation, USAGE};
use vmguest_monitor::{CapabilityBridge, GuestSdk};

fn main() {
    vmguest_monitor::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let commands: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    if commands.len() != 1 {
        println!("{}", USAGE);
        process::exit(1);
    }

    let Some(operation) = Operation::parse(commands[0]) else {
        println!("Bad command {}", commands[0]);
        process::exit(1);
    };

    let bridge = CapabilityBridge::new(GuestSdk);
    let outcome = match probe::run(&bridge, operation) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} failed: {}", operation, e);
            process::exit(1);
        }
    };

    if json {
        match outcome.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Failed to encode outcome: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", outcome.render());
    }
}
