mod auth;
mod catalog;
mod custom_name;
