//! Command entry points for the robodeploy binary

pub mod deploy;
