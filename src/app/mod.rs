// Application layer: wires CLI input to the formatter.

pub mod commands;
