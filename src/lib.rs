//! Lunch Agent — restaurant search over the Kakao Local API, packaged as
//! an LLM-callable tool.

pub mod config;
pub mod context;
pub mod error;
pub mod finder;
pub mod format;
pub mod kakao;
pub mod tools;
