mod config;
mod contact;
mod flight;
