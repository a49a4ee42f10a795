//! 버전 관리(git) 연동 계층.

pub mod git;

pub use git::GitDiffSource;
