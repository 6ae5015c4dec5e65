//! Integration test harness; each submodule is one scenario group.

mod color_control;
