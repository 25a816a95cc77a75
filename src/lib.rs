#![cfg_attr(not(test), warn(clippy::unwrap_used))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), warn(clippy::todo))]
#![cfg_attr(not(test), warn(clippy::unimplemented))]

pub mod ir;
pub mod serialization;

#[cfg(test)]
#[ctor::ctor]
fn init_logger() {
    // .is_test(true) silences the "already initialized" panic
    let _ = env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}
