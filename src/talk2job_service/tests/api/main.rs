mod helpers;

mod dashboard;
mod gate;
mod oauth;
mod sign_in;
mod sign_up;
