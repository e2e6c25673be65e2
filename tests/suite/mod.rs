mod config;
mod text;
