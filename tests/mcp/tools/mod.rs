mod account;
mod status;
mod templates;
