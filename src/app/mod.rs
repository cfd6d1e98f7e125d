// Application layer: drives the core flows for the command-line surface.

pub mod commands;
