mod me;
mod register;
mod subscribe;
mod subscriptions;
