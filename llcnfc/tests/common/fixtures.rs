// fixtures.rs: wire frames captured from a controller trace

use llcnfc::LinkConfig;

pub const UA: &str = "03e617a7";
pub const RR_0: &str = "03c023e3";
pub const RR_1: &str = "03c1aaf2";
pub const REJ_0: &str = "03c86b6f";
pub const RNR_1: &str = "03d12be2";
/// RSET, window 4, no capabilities, no baud rate
pub const RSET_W4: &str = "05f90400c3e5";
/// RSET, window 2, no capabilities, 57600 baud
pub const RSET_W2_57600: &str = "06f902000384fd";
/// I frame N(S)=0 N(R)=0 carrying `01 02`
pub const I_0_0: &str = "05800102afa4";

pub fn bytes(fixture: &str) -> Vec<u8> {
    hex::decode(fixture).expect("fixture is valid hex")
}

/// Config with a 10 ms resolution so timeouts take few ticks:
/// connection and guard expire after 10 ticks, ack after 5.
pub fn fast_config() -> LinkConfig {
    LinkConfig::builder()
        .timer_resolution_ms(10)
        .connection_timeout_ms(100)
        .guard_timeout_ms(100)
        .ack_timeout_ms(50)
        .build()
        .expect("valid config")
}

pub const GUARD_TICKS: usize = 10;
pub const CONNECTION_TICKS: usize = 10;
pub const ACK_TICKS: usize = 5;
