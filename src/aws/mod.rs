//! AWS control-plane access.
//!
//! # Data Flow
//! ```text
//! ResolvedEnvironment.region
//!     → load_sdk_config (ambient credential chain + region)
//!     → EcsCompute (aws-sdk-ecs) / Ec2Network (aws-sdk-ec2)
//!     → ComputeApi / NetworkApi traits used by the launch pipeline
//! ```
//!
//! # Design Decisions
//! - Credentials come from the SDK's standard discovery chain; this crate
//!   never touches them
//! - Both clients are thin pass-throughs; response-shape checks live in
//!   the launch pipeline so they stay testable without AWS
//! - Transport retry stays on the SDK's default policy

pub mod compute;
pub mod filters;
pub mod network;

use aws_config::BehaviorVersion;
use aws_types::region::Region;

pub use compute::{ComputeApi, EcsCompute};
pub use network::{Ec2Network, NetworkApi};

/// Load the shared SDK configuration pinned to `region`.
pub async fn load_sdk_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}
