/// Shared literals for the synthetic point cloud fixture
pub mod class;
pub mod output;
