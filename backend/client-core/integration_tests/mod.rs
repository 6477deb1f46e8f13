mod api_client;
mod auth_failure;
mod helpers;
mod pages;
