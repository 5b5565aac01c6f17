mod auth;
mod recipe;
mod user;
