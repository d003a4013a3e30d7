use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (unit tests) need none of the AVR link setup
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega32
    println!("cargo:rustc-link-arg=-mmcu=atmega32");

    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=Building ATmega32 firmware with debug logging");
    }
}
