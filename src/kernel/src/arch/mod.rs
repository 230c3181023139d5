//! Architecture-specific implementations.
//!
//! This module provides platform adapters for bare-metal targets.
//! Currently supported: x86_64.

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod x86_64;
