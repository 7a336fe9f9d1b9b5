mod catalog;
mod custom_name;
mod profile;
