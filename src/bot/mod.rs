// ABOUTME: Bot module - the event-stream runner and outcome rendering.
// ABOUTME: Connects the chat boundary to the dispatcher.

mod runner;

pub use runner::{Bot, render};

#[cfg(test)]
mod runner_test;
