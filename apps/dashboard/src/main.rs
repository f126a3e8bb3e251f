//! # Barista Dashboard
//!
//! Entry point for the `barista` binary.
//!
//! ```text
//! $ barista login --email admin@barista.lk
//! $ barista items add --name Latte --category beverage --price 350
//! $ barista orders new --customer 65f1c0 --item 65f2aa:2
//! $ barista open "/order-details?id=65f3b1"
//! ```
//!
//! All setup lives in `lib.rs` so the pages can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    barista_dashboard::run()
}
