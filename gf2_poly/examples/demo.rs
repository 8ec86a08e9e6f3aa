// examples/demo.rs

use gf2_poly::demo::sample_session;
use gf2_poly::PolyError;

fn main() -> Result<(), PolyError> {
    env_logger::init();

    for (label, value) in sample_session()? {
        println!("{:<20} {:<20}", label, value);
    }
    Ok(())
}
