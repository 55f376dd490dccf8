//! One pure function per fee component. All of them are total: degenerate
//! inputs produce zeros, never errors, so a calculation can always finish.

pub mod gateway;
pub mod handling;
pub mod incentive;
pub mod meta;

pub use gateway::{gateway_fee, GatewayFee};
pub use handling::net_handling_fee;
pub use incentive::{distribution_incentive, performance_bonus};
pub use meta::{meta_fee, MetaFee};
