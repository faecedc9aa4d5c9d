//! CamelCube main entrypoint.

use camelcube::run;
use camelcube::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
