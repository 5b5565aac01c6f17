mod create;
mod download;
mod favorite;
mod mutate;
mod shopping_cart;
mod short_link;
