// Application commands (write path)
pub mod track_commands;
