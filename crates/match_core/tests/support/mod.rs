#![allow(dead_code)]

pub mod files;
