//! Creature demo binary.
//!
//! Runs the fixed demo scenario and prints each combat line to stdout.
//! Takes no arguments and always exits with success.

use skirmish::creature::CombatLog;
use skirmish::scenario::run_demo;

fn main() {
    let mut log = CombatLog::new();
    run_demo(&mut log);
    for line in log.messages() {
        println!("{}", line);
    }
}
