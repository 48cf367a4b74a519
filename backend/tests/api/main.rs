mod helpers;

mod admin;
mod attachments;
mod events;
mod health_check;
mod theme;
