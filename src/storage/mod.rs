//! Storage模块 - 配置持久化

pub mod config;
