//! Microwave oven controller firmware for the ATmega32.
//!
//! The oven core (`oven`), the pin-generic drivers and the serial logger
//! build on any target so they can be unit tested on the host. Register
//! level code in `hal` and the UART console only exist on AVR.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod drivers;
pub mod logger;
pub mod oven;

#[cfg(target_arch = "avr")]
pub mod hal;
