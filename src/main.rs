//! rCheckin main entrypoint.

use rcheckin::run;
use rcheckin::ui::messages::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!();
    if let Err(e) = run().await {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
