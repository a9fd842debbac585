pub mod common;

mod blog_degradation;
