//! Walk through a few capabilities against the local termux tools.
//!
//! Run inside Termux; elsewhere every call reports the tool as missing.

use termux_bridge_api::device::Brightness;
use termux_bridge_api::TermuxApi;

#[tokio::main]
async fn main() {
    let api = TermuxApi::new();

    println!("1. battery status...");
    match api.device().battery_status().await {
        Ok(battery) => println!("   ✅ {battery}"),
        Err(e) => println!("   ❌ {e}"),
    }

    println!("2. clipboard round trip...");
    match api.clipboard().set("hello from termux-bridge").await {
        Ok(()) => match api.clipboard().get().await {
            Ok(text) => println!("   ✅ clipboard now holds: '{text}'"),
            Err(e) => println!("   ❌ get failed: {e}"),
        },
        Err(e) => println!("   ❌ set failed: {e}"),
    }

    println!("3. sensor list...");
    match api.device().sensor_list().await {
        Ok(sensors) => println!("   ✅ {sensors}"),
        Err(e) => println!("   ❌ {e}"),
    }

    println!("4. brightness to auto...");
    match api.device().brightness(Brightness::Auto).await {
        Ok(()) => println!("   ✅ brightness set"),
        Err(e) => println!("   ❌ {e}"),
    }
}
