//! Core模块 - 匿名化核心逻辑

pub mod anonymizer;
pub mod models;
pub mod rules;
