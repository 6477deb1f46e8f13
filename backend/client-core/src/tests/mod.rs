mod config;
mod guard;
mod navigation;
mod pages;
mod session;
mod shaping;
