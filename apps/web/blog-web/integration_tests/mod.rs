mod admin;
mod helpers;
mod public;
