//! Action module

pub mod declare_argument;
pub mod include;
pub mod node;

pub use declare_argument::DeclareArgumentAction;
pub use include::IncludeLaunchAction;
pub use node::NodeAction;
